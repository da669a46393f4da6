//! Per-chart statistics computed from the filtered table.
//!
//! [`compute_view`] turns a descriptor plus the filtered records into the
//! numbers a chart needs (bins, points, category flows, bar heights). Each
//! chart first drops the records missing one of its required columns, so a
//! gap in one sub-table only thins out the charts that use it.

use crate::specs::{ChartDescriptor, ChartKind, Role};
use census_data::FilteredTable;
use census_model::{Field, StudentRecord};
use serde::Serialize;
use std::collections::HashMap;

/// Group label for records with no value in a color column.
pub const UNSPECIFIED_GROUP: &str = "Unspecified";

/// Upper bound on histogram bins.
pub const MAX_BINS: usize = 40;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartView {
    Histogram(HistogramView),
    Scatter(ScatterView),
    ParallelCategories(ParallelCategoriesView),
    Bubble(BubbleView),
    GroupedBar(GroupedBarView),
}

impl ChartView {
    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        match self {
            ChartView::Histogram(v) => v.bins.is_empty(),
            ChartView::Scatter(v) => v.series.iter().all(|s| s.points.is_empty()),
            ChartView::ParallelCategories(v) => v.ribbons.is_empty(),
            ChartView::Bubble(v) => v.points.is_empty(),
            ChartView::GroupedBar(v) => v.categories.is_empty(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bin {
    pub start: f64,
    pub end: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramSeries {
    pub group: String,
    /// One count per bin.
    pub counts: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RugMark {
    pub group: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramView {
    pub bins: Vec<Bin>,
    pub series: Vec<HistogramSeries>,
    /// Empty unless the descriptor asks for a marginal rug.
    pub rug: Vec<RugMark>,
}

impl HistogramView {
    /// Count of the tallest (group, bin) bar.
    pub fn max_count(&self) -> usize {
        self.series
            .iter()
            .flat_map(|s| s.counts.iter().copied())
            .max()
            .unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.series.iter().flat_map(|s| s.counts.iter()).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointSeries {
    pub group: String,
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterView {
    pub series: Vec<PointSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAxis {
    pub field: Field,
    pub categories: Vec<CategoryCount>,
}

/// All records sharing one category on every axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ribbon {
    /// One label per axis, in axis order.
    pub path: Vec<String>,
    pub count: usize,
    /// Mean of the color column over the ribbon's records.
    pub color_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParallelCategoriesView {
    pub axes: Vec<CategoryAxis>,
    pub ribbons: Vec<Ribbon>,
    pub color_field: Option<Field>,
    pub color_domain: Option<(f64, f64)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bubble {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// Marker diameter in pixels; area is proportional to `size`.
    pub diameter: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BubbleView {
    pub points: Vec<Bubble>,
    pub log_x: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarSeries {
    pub group: String,
    /// Mean y per x category; `None` where the group has no records.
    pub values: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedBarView {
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
}

/// How many filtered records made it into a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Coverage {
    pub included: usize,
    pub excluded: usize,
}

/// Split `table` into the records `spec` can draw, plus the tally.
pub fn included_records<'a>(
    spec: &ChartDescriptor,
    table: &FilteredTable<'a>,
) -> (Vec<&'a StudentRecord>, Coverage) {
    let rows: Vec<&StudentRecord> = table.iter().filter(|r| spec.includes(r)).collect();
    let coverage = Coverage {
        included: rows.len(),
        excluded: table.len() - rows.len(),
    };
    (rows, coverage)
}

/// Compute the statistics for one chart from the filtered table.
pub fn compute_view(spec: &ChartDescriptor, table: &FilteredTable<'_>) -> (ChartView, Coverage) {
    let (rows, coverage) = included_records(spec, table);
    let view = match spec.kind {
        ChartKind::Histogram => ChartView::Histogram(histogram(spec, &rows)),
        ChartKind::Scatter => ChartView::Scatter(scatter(spec, &rows)),
        ChartKind::ParallelCategories => {
            ChartView::ParallelCategories(parallel_categories(spec, &rows))
        }
        ChartKind::Bubble => ChartView::Bubble(bubble(spec, &rows)),
        ChartKind::GroupedBar => ChartView::GroupedBar(grouped_bar(spec, &rows)),
    };
    (view, coverage)
}

fn group_of(spec: &ChartDescriptor, record: &StudentRecord) -> String {
    spec.field(Role::Color)
        .and_then(|f| f.category(record))
        .unwrap_or_else(|| UNSPECIFIED_GROUP.to_string())
}

/// Distinct groups in first-seen order.
fn groups_in_order(spec: &ChartDescriptor, rows: &[&StudentRecord]) -> Vec<String> {
    let mut groups: Vec<String> = Vec::new();
    for r in rows {
        let g = group_of(spec, r);
        if !groups.contains(&g) {
            groups.push(g);
        }
    }
    groups
}

fn number(spec: &ChartDescriptor, role: Role, record: &StudentRecord) -> Option<f64> {
    spec.field(role).and_then(|f| f.number(record))
}

/// Extent of a set of values, or `None` when there are none.
pub fn extent<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Equal-width bins over `values` using Sturges' rule.
pub fn bin_edges(values: &[f64]) -> Vec<Bin> {
    let Some((lo, hi)) = extent(values.iter().copied()) else {
        return Vec::new();
    };
    if hi <= lo {
        return vec![Bin {
            start: lo - 0.5,
            end: lo + 0.5,
        }];
    }
    let n = values.len() as f64;
    let count = ((n.log2().ceil() as usize) + 1).clamp(1, MAX_BINS);
    let width = (hi - lo) / count as f64;
    (0..count)
        .map(|i| Bin {
            start: lo + i as f64 * width,
            end: if i + 1 == count { hi } else { lo + (i + 1) as f64 * width },
        })
        .collect()
}

/// Index of the bin holding `value`; the last bin is closed on the right.
fn bin_index(bins: &[Bin], value: f64) -> Option<usize> {
    let first = bins.first()?;
    let last = bins.last()?;
    if value < first.start || value > last.end {
        return None;
    }
    let position = bins.iter().position(|b| value >= b.start && value < b.end);
    Some(position.unwrap_or(bins.len() - 1))
}

fn histogram(spec: &ChartDescriptor, rows: &[&StudentRecord]) -> HistogramView {
    let values: Vec<(String, f64)> = rows
        .iter()
        .filter_map(|r| number(spec, Role::X, r).map(|v| (group_of(spec, r), v)))
        .collect();
    let raw: Vec<f64> = values.iter().map(|(_, v)| *v).collect();
    let bins = bin_edges(&raw);

    let groups = groups_in_order(spec, rows);
    let mut series: Vec<HistogramSeries> = groups
        .iter()
        .map(|g| HistogramSeries {
            group: g.clone(),
            counts: vec![0; bins.len()],
        })
        .collect();
    for (group, value) in &values {
        if let (Some(s), Some(i)) = (
            series.iter_mut().find(|s| &s.group == group),
            bin_index(&bins, *value),
        ) {
            s.counts[i] += 1;
        }
    }

    let rug = if spec.options.marginal_rug {
        values
            .into_iter()
            .map(|(group, value)| RugMark { group, value })
            .collect()
    } else {
        Vec::new()
    };

    HistogramView { bins, series, rug }
}

fn scatter(spec: &ChartDescriptor, rows: &[&StudentRecord]) -> ScatterView {
    let mut series: Vec<PointSeries> = groups_in_order(spec, rows)
        .into_iter()
        .map(|group| PointSeries {
            group,
            points: Vec::new(),
        })
        .collect();
    for r in rows {
        let (Some(x), Some(y)) = (number(spec, Role::X, r), number(spec, Role::Y, r)) else {
            continue;
        };
        let group = group_of(spec, r);
        if let Some(s) = series.iter_mut().find(|s| s.group == group) {
            s.points.push(Point { x, y });
        }
    }
    ScatterView { series }
}

/// Sort key for category labels: month columns in calendar order, other
/// numeric columns numerically, everything else alphabetically.
fn sort_categories(field: Field, labels: &mut [(String, Option<f64>)]) {
    if field == Field::Gender {
        labels.sort_by(|a, b| a.0.cmp(&b.0));
    } else {
        labels.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
    }
}

fn parallel_categories(spec: &ChartDescriptor, rows: &[&StudentRecord]) -> ParallelCategoriesView {
    let dims: Vec<Field> = spec.fields(Role::Dimension).collect();
    let color_field = spec.field(Role::Color);

    let axes = dims
        .iter()
        .map(|&field| {
            let mut counts: HashMap<String, (usize, Option<f64>)> = HashMap::new();
            for r in rows {
                if let Some(label) = field.category(r) {
                    let entry = counts.entry(label).or_insert((0, field.number(r)));
                    entry.0 += 1;
                }
            }
            let mut labels: Vec<(String, Option<f64>)> =
                counts.iter().map(|(l, (_, n))| (l.clone(), *n)).collect();
            sort_categories(field, &mut labels);
            CategoryAxis {
                field,
                categories: labels
                    .into_iter()
                    .map(|(label, _)| {
                        let count = counts.get(&label).map(|c| c.0).unwrap_or(0);
                        CategoryCount { label, count }
                    })
                    .collect(),
            }
        })
        .collect::<Vec<_>>();

    // ribbons keyed by full path, accumulating the color column
    let mut paths: Vec<(Vec<String>, usize, f64, usize)> = Vec::new();
    for r in rows {
        let path: Option<Vec<String>> = dims.iter().map(|f| f.category(r)).collect();
        let Some(path) = path else { continue };
        let color = color_field.and_then(|f| f.number(r));
        match paths.iter_mut().find(|p| p.0 == path) {
            Some(entry) => {
                entry.1 += 1;
                if let Some(c) = color {
                    entry.2 += c;
                    entry.3 += 1;
                }
            }
            None => paths.push((path, 1, color.unwrap_or(0.0), usize::from(color.is_some()))),
        }
    }

    let position = |axis: usize, label: &str| {
        axes[axis]
            .categories
            .iter()
            .position(|c| c.label == label)
            .unwrap_or(usize::MAX)
    };
    paths.sort_by_key(|(path, ..)| {
        path.iter()
            .enumerate()
            .map(|(i, l)| position(i, l))
            .collect::<Vec<_>>()
    });

    let ribbons: Vec<Ribbon> = paths
        .into_iter()
        .map(|(path, count, sum, colored)| Ribbon {
            path,
            count,
            color_value: if colored > 0 { sum / colored as f64 } else { 0.0 },
        })
        .collect();

    let color_domain = color_field.and_then(|f| extent(rows.iter().filter_map(|r| f.number(r))));

    ParallelCategoriesView {
        axes,
        ribbons,
        color_field,
        color_domain,
    }
}

fn bubble(spec: &ChartDescriptor, rows: &[&StudentRecord]) -> BubbleView {
    let size_max = spec.options.size_max.unwrap_or(20.0);
    let raw: Vec<(f64, f64, f64)> = rows
        .iter()
        .filter_map(|r| {
            Some((
                number(spec, Role::X, r)?,
                number(spec, Role::Y, r)?,
                number(spec, Role::Size, r)?,
            ))
        })
        .collect();
    let largest = raw.iter().map(|p| p.2).fold(0.0f64, f64::max);
    let points = raw
        .into_iter()
        .map(|(x, y, size)| {
            let diameter = if largest > 0.0 && size > 0.0 {
                size_max * (size / largest).sqrt()
            } else {
                0.0
            };
            Bubble { x, y, size, diameter }
        })
        .collect();
    BubbleView {
        points,
        log_x: spec.options.log_x,
    }
}

fn grouped_bar(spec: &ChartDescriptor, rows: &[&StudentRecord]) -> GroupedBarView {
    let Some(x_field) = spec.field(Role::X) else {
        return GroupedBarView {
            categories: Vec::new(),
            series: Vec::new(),
        };
    };

    let mut xs: Vec<(String, Option<f64>)> = Vec::new();
    for r in rows {
        if let Some(label) = x_field.category(r) {
            if !xs.iter().any(|(l, _)| *l == label) {
                xs.push((label, x_field.number(r)));
            }
        }
    }
    sort_categories(x_field, &mut xs);
    let categories: Vec<String> = xs.into_iter().map(|(l, _)| l).collect();

    let groups = groups_in_order(spec, rows);
    // (sum, count) per (group, category)
    let mut cells = vec![vec![(0.0f64, 0usize); categories.len()]; groups.len()];
    for r in rows {
        let (Some(label), Some(y)) = (x_field.category(r), number(spec, Role::Y, r)) else {
            continue;
        };
        let g = group_of(spec, r);
        if let (Some(gi), Some(ci)) = (
            groups.iter().position(|x| *x == g),
            categories.iter().position(|x| *x == label),
        ) {
            cells[gi][ci].0 += y;
            cells[gi][ci].1 += 1;
        }
    }

    let series = groups
        .into_iter()
        .zip(cells)
        .map(|(group, row)| BarSeries {
            group,
            values: row
                .into_iter()
                .map(|(sum, n)| (n > 0).then(|| sum / n as f64))
                .collect(),
        })
        .collect();

    GroupedBarView { categories, series }
}
