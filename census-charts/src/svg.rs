//! Draws a [`ChartView`] into an SVG document with plotters.
//!
//! Every chart shares one frame: the title along the top and the plot area
//! below it, with a legend (or color bar) on the right. A view with no
//! points renders the frame with a placeholder message, never an error.

use crate::palette::{group_color, inferno, inferno_in};
use crate::specs::{ChartDescriptor, Role};
use crate::view::{
    extent, BubbleView, ChartView, GroupedBarView, HistogramView, ParallelCategoriesView,
    ScatterView,
};
use census_model::field::format_number;
use log::warn;
use plotters::coord::{CoordTranslate, Shift};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

pub const WIDTH: u32 = 560;
pub const HEIGHT: u32 = 380;

/// Shown in place of marks when the filters leave nothing to draw.
pub const EMPTY_MESSAGE: &str = "No data for the current filters";

const FONT: &str = "sans-serif";
const MARGIN: i32 = 12;
const X_LABEL_AREA: i32 = 40;
const Y_LABEL_AREA: i32 = 50;
const RUG_HEIGHT: i32 = 24;

const TEXT: RGBColor = RGBColor(55, 65, 81);
const MUTED: RGBColor = RGBColor(107, 114, 128);
const PANEL: RGBColor = RGBColor(249, 250, 251);
const BLOCK: RGBColor = RGBColor(75, 85, 99);

type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Render one chart. Total over every view, including empty ones.
pub fn render_svg(spec: &ChartDescriptor, view: &ChartView) -> String {
    let mut svg = String::new();
    let drawn = generate_svg(spec, view, &mut svg).map_err(|e| e.to_string());
    if let Err(e) = drawn {
        warn!("[Census] svg: chart {} failed to draw: {}", spec.number, e);
        svg.clear();
        let fallback = generate_placeholder(spec, &mut svg).map_err(|e| e.to_string());
        if let Err(e) = fallback {
            warn!("[Census] svg: chart {} placeholder failed: {}", spec.number, e);
            svg.clear();
        }
    }
    svg
}

fn titled<'a>(spec: &ChartDescriptor, root: &Area<'a>) -> DrawResult<Area<'a>, SVGBackend<'a>> {
    root.fill(&WHITE)?;
    root.titled(spec.title, (FONT, 15).into_font().color(&TEXT))
}

fn generate_svg<'a>(
    spec: &ChartDescriptor,
    view: &ChartView,
    svg: &'a mut String,
) -> DrawResult<(), SVGBackend<'a>> {
    let root = SVGBackend::with_string(svg, (WIDTH, HEIGHT)).into_drawing_area();
    let area = titled(spec, &root)?;
    if view.is_empty() {
        placeholder(&area)?;
    } else {
        match view {
            ChartView::Histogram(v) => histogram(spec, v, &area)?,
            ChartView::Scatter(v) => scatter(spec, v, &area)?,
            ChartView::ParallelCategories(v) => parallel_categories(v, &area)?,
            ChartView::Bubble(v) => bubble(spec, v, &area)?,
            ChartView::GroupedBar(v) => grouped_bar(spec, v, &area)?,
        }
    }
    root.present()?;
    Ok(())
}

fn generate_placeholder<'a>(
    spec: &ChartDescriptor,
    svg: &'a mut String,
) -> DrawResult<(), SVGBackend<'a>> {
    let root = SVGBackend::with_string(svg, (WIDTH, HEIGHT)).into_drawing_area();
    let area = titled(spec, &root)?;
    placeholder(&area)?;
    root.present()?;
    Ok(())
}

fn text_style(size: u32, color: &RGBColor, pos: Pos) -> TextStyle<'static> {
    (FONT, size).into_font().color(color).pos(pos)
}

fn placeholder<'a>(area: &Area<'a>) -> DrawResult<(), SVGBackend<'a>> {
    let (w, h) = area.dim_in_pixel();
    let (w, h) = (w as i32, h as i32);
    area.draw(&Rectangle::new(
        [(MARGIN, MARGIN), (w - MARGIN, h - MARGIN)],
        PANEL.filled(),
    ))?;
    area.draw_text(
        EMPTY_MESSAGE,
        &text_style(13, &MUTED, Pos::new(HPos::Center, VPos::Center)),
        (w / 2, h / 2),
    )?;
    Ok(())
}

fn field_label(spec: &ChartDescriptor, role: Role) -> &'static str {
    spec.field(role).map(|f| f.name()).unwrap_or("")
}

/// Pads a linear domain by 5% and widens a zero-width one.
fn padded(domain: Option<(f64, f64)>) -> (f64, f64) {
    let (lo, hi) = domain.unwrap_or((0.0, 1.0));
    if hi > lo {
        let pad = (hi - lo) * 0.05;
        (lo - pad, hi + pad)
    } else {
        let pad = if lo == 0.0 { 1.0 } else { lo.abs() * 0.1 };
        (lo - pad, hi + pad)
    }
}

/// Pads a strictly positive domain multiplicatively for a log axis.
fn log_padded(domain: Option<(f64, f64)>) -> (f64, f64) {
    let (lo, hi) = domain.unwrap_or((1.0, 10.0));
    let lo = lo.max(f64::MIN_POSITIVE);
    let hi = hi.max(lo);
    if hi > lo {
        (lo / 1.25, hi * 1.25)
    } else {
        (lo / 2.0, hi * 2.0)
    }
}

fn legend<'a, 'b: 'a, CT: CoordTranslate>(
    chart: &mut ChartContext<'a, SVGBackend<'b>, CT>,
) -> DrawResult<(), SVGBackend<'b>> {
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .label_font((FONT, 11))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
}

fn histogram<'a>(
    spec: &ChartDescriptor,
    view: &HistogramView,
    area: &Area<'a>,
) -> DrawResult<(), SVGBackend<'a>> {
    let (lo, hi) = match (view.bins.first(), view.bins.last()) {
        (Some(first), Some(last)) => (first.start, last.end),
        _ => return placeholder(area),
    };
    let totals: Vec<usize> = (0..view.bins.len())
        .map(|i| view.series.iter().map(|s| s.counts[i]).sum())
        .collect();
    let max = totals.iter().copied().max().unwrap_or(0).max(1) as f64;

    // the strip is reserved whenever the chart asks for a rug
    let strip = if spec.options.marginal_rug { RUG_HEIGHT } else { 0 };
    let (rug_area, bars_area) = area.split_vertically(strip);

    if !view.rug.is_empty() {
        let mut rug = ChartBuilder::on(&rug_area)
            .margin_left(MARGIN)
            .margin_right(MARGIN)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(lo..hi, 0f64..1f64)?;
        rug.draw_series(view.rug.iter().map(|mark| {
            let g = view
                .series
                .iter()
                .position(|s| s.group == mark.group)
                .unwrap_or(0);
            PathElement::new(
                vec![(mark.value, 0.15), (mark.value, 0.85)],
                group_color(g).mix(0.7).stroke_width(1),
            )
        }))?;
    }

    let mut chart = ChartBuilder::on(&bars_area)
        .margin(MARGIN)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(lo..hi, 0f64..max)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(field_label(spec, Role::X))
        .y_desc("count")
        .axis_desc_style((FONT, 12))
        .label_style((FONT, 10))
        .draw()?;

    let mut stacked = vec![0usize; view.bins.len()];
    for (g, series) in view.series.iter().enumerate() {
        let color = group_color(g);
        let mut bars = Vec::new();
        for (i, (bin, &count)) in view.bins.iter().zip(&series.counts).enumerate() {
            if count == 0 {
                continue;
            }
            let bottom = stacked[i] as f64;
            stacked[i] += count;
            let mut bar = Rectangle::new(
                [(bin.start, bottom), (bin.end, stacked[i] as f64)],
                color.mix(0.85).filled(),
            );
            bar.set_margin(0, 0, 1, 0);
            bars.push(bar);
        }
        chart
            .draw_series(bars)?
            .label(series.group.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }
    legend(&mut chart)
}

fn scatter<'a>(
    spec: &ChartDescriptor,
    view: &ScatterView,
    area: &Area<'a>,
) -> DrawResult<(), SVGBackend<'a>> {
    let points = || view.series.iter().flat_map(|s| s.points.iter());
    let (x_lo, x_hi) = padded(extent(points().map(|p| p.x)));
    let (y_lo, y_hi) = padded(extent(points().map(|p| p.y)));

    let mut chart = ChartBuilder::on(area)
        .margin(MARGIN)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;
    chart
        .configure_mesh()
        .x_desc(field_label(spec, Role::X))
        .y_desc(field_label(spec, Role::Y))
        .axis_desc_style((FONT, 12))
        .label_style((FONT, 10))
        .draw()?;

    for (g, series) in view.series.iter().enumerate() {
        let color = group_color(g);
        chart
            .draw_series(
                series
                    .points
                    .iter()
                    .map(|p| Circle::new((p.x, p.y), 4, color.mix(0.8).filled())),
            )?
            .label(series.group.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }
    legend(&mut chart)
}

fn bubble<'a>(
    spec: &ChartDescriptor,
    view: &BubbleView,
    area: &Area<'a>,
) -> DrawResult<(), SVGBackend<'a>> {
    let (y_lo, y_hi) = padded(extent(view.points.iter().map(|p| p.y)));
    let xs = || view.points.iter().map(|p| p.x);
    let color = group_color(0);

    // largest first so small bubbles stay visible
    let mut points: Vec<_> = view.points.iter().collect();
    points.sort_by(|a, b| b.diameter.total_cmp(&a.diameter));
    let marks = || {
        points.iter().map(move |p| {
            let radius = (p.diameter / 2.0).max(1.0).round() as i32;
            Circle::new((p.x, p.y), radius, color.mix(0.5).filled())
        })
    };

    if view.log_x {
        let (x_lo, x_hi) = log_padded(extent(xs()));
        let mut chart = ChartBuilder::on(area)
            .margin(MARGIN)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d((x_lo..x_hi).log_scale(), y_lo..y_hi)?;
        chart
            .configure_mesh()
            .x_desc(field_label(spec, Role::X))
            .y_desc(field_label(spec, Role::Y))
            .axis_desc_style((FONT, 12))
            .label_style((FONT, 10))
            .draw()?;
        chart.draw_series(marks())?;
    } else {
        let (x_lo, x_hi) = padded(extent(xs()));
        let mut chart = ChartBuilder::on(area)
            .margin(MARGIN)
            .x_label_area_size(X_LABEL_AREA)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;
        chart
            .configure_mesh()
            .x_desc(field_label(spec, Role::X))
            .y_desc(field_label(spec, Role::Y))
            .axis_desc_style((FONT, 12))
            .label_style((FONT, 10))
            .draw()?;
        chart.draw_series(marks())?;
    }
    Ok(())
}

fn grouped_bar<'a>(
    spec: &ChartDescriptor,
    view: &GroupedBarView,
    area: &Area<'a>,
) -> DrawResult<(), SVGBackend<'a>> {
    let values = || view.series.iter().flat_map(|s| s.values.iter().flatten().copied());
    let (lo, hi) = extent(values()).unwrap_or((0.0, 1.0));
    let (y_lo, y_hi) = (lo.min(0.0), hi.max(0.0));
    let y_hi = if y_hi > y_lo { y_hi + (y_hi - y_lo) * 0.05 } else { y_lo + 1.0 };
    let n = view.categories.len().max(1);

    let mut chart = ChartBuilder::on(area)
        .margin(MARGIN)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(0f64..n as f64, y_lo..y_hi)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_label_formatter(&|_: &f64| String::new())
        .x_desc(field_label(spec, Role::X))
        .y_desc(field_label(spec, Role::Y))
        .axis_desc_style((FONT, 12))
        .label_style((FONT, 10))
        .draw()?;

    // one tick label per category, thinned out when they crowd the axis
    let every = (view.categories.len() / 12).max(1);
    let (base_x, base_y) = area.get_base_pixel();
    let label = text_style(10, &MUTED, Pos::new(HPos::Center, VPos::Top));
    for (i, category) in view.categories.iter().enumerate().step_by(every) {
        let (px, py) = chart.backend_coord(&(i as f64 + 0.5, y_lo));
        area.draw_text(category, &label, (px - base_x, py - base_y + 4))?;
    }

    let groups = view.series.len().max(1) as f64;
    let bar = 0.8 / groups;
    for (g, series) in view.series.iter().enumerate() {
        let color = group_color(g);
        let bars = series.values.iter().enumerate().filter_map(|(i, value)| {
            value.map(|v| {
                let x0 = i as f64 + 0.1 + g as f64 * bar;
                Rectangle::new([(x0, 0.0), (x0 + bar, v)], color.filled())
            })
        });
        chart
            .draw_series(bars)?
            .label(series.group.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }
    legend(&mut chart)
}

/// Outline of one ribbon between two adjacent axes, eased from the left
/// segment `(x, top, bottom)` to the right one.
fn ribbon_outline(
    (x0, t0, b0): (f64, f64, f64),
    (x1, t1, b1): (f64, f64, f64),
) -> Vec<(i32, i32)> {
    const STEPS: usize = 16;
    let ease = |s: f64| s * s * (3.0 - 2.0 * s);
    let at = |s: f64, from: f64, to: f64| {
        let x = x0 + (x1 - x0) * s;
        let y = from + (to - from) * ease(s);
        (x.round() as i32, y.round() as i32)
    };
    let top = (0..=STEPS).map(|k| at(k as f64 / STEPS as f64, t0, t1));
    let bottom = (0..=STEPS).rev().map(|k| at(k as f64 / STEPS as f64, b0, b1));
    top.chain(bottom).collect()
}

fn parallel_categories<'a>(
    view: &ParallelCategoriesView,
    area: &Area<'a>,
) -> DrawResult<(), SVGBackend<'a>> {
    const BLOCK_WIDTH: f64 = 14.0;
    const GAP: f64 = 6.0;

    let axis_count = view.axes.len();
    if axis_count == 0 {
        return placeholder(area);
    }
    let (w, h) = area.dim_in_pixel();
    let (left, right) = (70.0, w as f64 - 120.0);
    let (top, bottom) = (10.0, h as f64 - 40.0);
    let axis_x = |i: usize| {
        if axis_count == 1 {
            (left + right) / 2.0
        } else {
            left + 40.0 + i as f64 * (right - left - 80.0) / (axis_count - 1) as f64
        }
    };

    // vertical extent of each category block, per axis
    let blocks: Vec<Vec<(f64, f64)>> = view
        .axes
        .iter()
        .map(|axis| {
            let total: usize = axis.categories.iter().map(|c| c.count).sum();
            let gaps = GAP * axis.categories.len().saturating_sub(1) as f64;
            let usable = (bottom - top - gaps).max(0.0);
            let mut cursor = top;
            axis.categories
                .iter()
                .map(|c| {
                    let span = if total > 0 {
                        usable * c.count as f64 / total as f64
                    } else {
                        0.0
                    };
                    let block = (cursor, cursor + span);
                    cursor += span + GAP;
                    block
                })
                .collect()
        })
        .collect();

    let domain = view.color_domain.unwrap_or((0.0, 1.0));
    let mut fill: Vec<Vec<f64>> = blocks
        .iter()
        .map(|axis| axis.iter().map(|b| b.0).collect())
        .collect();
    for ribbon in &view.ribbons {
        let mut segments = Vec::with_capacity(axis_count);
        for (a, label) in ribbon.path.iter().enumerate() {
            let Some(c) = view.axes[a].categories.iter().position(|c| &c.label == label) else {
                continue;
            };
            let (block_top, block_bottom) = blocks[a][c];
            let total = view.axes[a].categories[c].count.max(1) as f64;
            let span = (block_bottom - block_top) * ribbon.count as f64 / total;
            let start = fill[a][c];
            fill[a][c] += span;
            segments.push((axis_x(a), start, start + span));
        }
        let color = inferno_in(ribbon.color_value, domain);
        for pair in segments.windows(2) {
            let (x0, t0, b0) = pair[0];
            let (x1, t1, b1) = pair[1];
            let outline = ribbon_outline(
                (x0 + BLOCK_WIDTH / 2.0, t0, b0),
                (x1 - BLOCK_WIDTH / 2.0, t1, b1),
            );
            area.draw(&Polygon::new(outline, color.mix(0.75).filled()))?;
        }
    }

    let heading = text_style(12, &TEXT, Pos::new(HPos::Center, VPos::Top));
    for (a, axis) in view.axes.iter().enumerate() {
        let x = axis_x(a);
        area.draw_text(axis.field.name(), &heading, (x.round() as i32, (bottom + 14.0) as i32))?;
        let label_left = a + 1 < axis_count;
        let (lx, anchor) = if label_left {
            (x - BLOCK_WIDTH / 2.0 - 4.0, HPos::Right)
        } else {
            (x + BLOCK_WIDTH / 2.0 + 4.0, HPos::Left)
        };
        let label = text_style(10, &TEXT, Pos::new(anchor, VPos::Center));
        for (c, category) in axis.categories.iter().enumerate() {
            let (block_top, block_bottom) = blocks[a][c];
            let x0 = (x - BLOCK_WIDTH / 2.0).round() as i32;
            let y0 = block_top.round() as i32;
            let y1 = (block_bottom.round() as i32).max(y0 + 1);
            let block = Rectangle::new([(x0, y0), (x0 + BLOCK_WIDTH as i32, y1)], BLOCK.filled());
            area.draw(&block)?;
            let ly = ((block_top + block_bottom) / 2.0).round() as i32;
            area.draw_text(&category.label, &label, (lx.round() as i32, ly))?;
        }
    }

    if let Some(field) = view.color_field {
        let (x, bar_top) = ((right + 40.0) as i32, top as i32 + 20);
        color_bar(area, field.name(), domain, x, bar_top, (bottom - top) as i32 - 30)?;
    }
    Ok(())
}

fn color_bar<'a>(
    area: &Area<'a>,
    title: &str,
    (lo, hi): (f64, f64),
    x: i32,
    top: i32,
    height: i32,
) -> DrawResult<(), SVGBackend<'a>> {
    const STEPS: i32 = 20;
    area.draw_text(
        title,
        &text_style(11, &TEXT, Pos::new(HPos::Left, VPos::Bottom)),
        (x - 10, top - 6),
    )?;
    let step = height as f64 / STEPS as f64;
    for i in 0..STEPS {
        // high values at the top
        let t = 1.0 - i as f64 / (STEPS - 1) as f64;
        let y0 = top + (i as f64 * step).round() as i32;
        let y1 = top + ((i + 1) as f64 * step).round() as i32;
        area.draw(&Rectangle::new([(x, y0), (x + 14, y1)], inferno(t).filled()))?;
    }
    let tick = text_style(10, &MUTED, Pos::new(HPos::Left, VPos::Center));
    area.draw_text(&format_number(hi), &tick, (x + 18, top))?;
    area.draw_text(&format_number(lo), &tick, (x + 18, top + height))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::CHART_SPECS;
    use crate::view::compute_view;
    use census_data::FilteredTable;
    use census_model::{BirthMonth, Gender, StudentRecord};

    fn records() -> Vec<StudentRecord> {
        (0..24)
            .map(|i| {
                let gender = if i % 3 == 0 { "Male" } else { "Female" };
                let mut r = StudentRecord::demographic(
                    i,
                    Some(Gender::new(gender)),
                    10 + i % 8,
                    2012 + i % 6,
                    BirthMonth::ALL[(i % 12) as usize],
                );
                r.height = Some(140.0 + i as f64);
                r.armspan = Some(138.0 + i as f64);
                r.hrs_spent_with_family = Some((i % 7) as f64);
                r.hrs_games = Some((i % 5) as f64);
                r.hrs_chores = Some((i % 4) as f64);
                r.hrs_social_media = Some((i % 9) as f64);
                r.memory_game_score = Some((i % 10) as f64);
                r.academic_pressure = Some((i % 6) as f64);
                r
            })
            .collect()
    }

    fn views(records: &[StudentRecord]) -> Vec<ChartView> {
        let table = FilteredTable::from(records.iter().collect::<Vec<_>>());
        CHART_SPECS
            .iter()
            .map(|spec| compute_view(spec, &table).0)
            .collect()
    }

    /// True when `text` is the content of some text node.
    fn shows(svg: &str, text: &str) -> bool {
        svg.contains(&format!(">{}<", text)) || svg.lines().any(|line| line.trim() == text)
    }

    fn render_all(records: &[StudentRecord]) -> Vec<String> {
        CHART_SPECS
            .iter()
            .zip(views(records))
            .map(|(spec, view)| render_svg(spec, &view))
            .collect()
    }

    #[test]
    fn every_chart_renders_a_document() {
        let svgs = render_all(&records());
        for (spec, svg) in CHART_SPECS.iter().zip(&svgs) {
            assert!(svg.starts_with("<svg"), "chart {}", spec.number);
            assert!(svg.trim_end().ends_with("</svg>"), "chart {}", spec.number);
            assert!(svg.contains(spec.title), "chart {} title", spec.number);
            assert!(!svg.contains(EMPTY_MESSAGE), "chart {} has data", spec.number);
            assert!(!svg.contains("NaN"), "chart {} has NaN", spec.number);
        }
    }

    #[test]
    fn empty_views_render_placeholder() {
        for (spec, svg) in CHART_SPECS.iter().zip(render_all(&[])) {
            assert!(svg.contains(EMPTY_MESSAGE));
            assert!(svg.contains(spec.title));
            assert!(svg.trim_end().ends_with("</svg>"));
        }
    }

    #[test]
    fn histogram_draws_one_rug_mark_per_record() {
        let spec = &CHART_SPECS[0];
        let ChartView::Histogram(with_rug) = views(&records()).remove(0) else {
            panic!("chart 1 is a histogram");
        };
        let mut without_rug = with_rug.clone();
        without_rug.rug.clear();
        let marks = |view: HistogramView| {
            render_svg(spec, &ChartView::Histogram(view))
                .matches("<polyline")
                .count()
        };
        assert_eq!(marks(with_rug) - marks(without_rug), 24);
    }

    #[test]
    fn scatter_draws_one_circle_per_point() {
        let svgs = render_all(&records());
        assert_eq!(svgs[1].matches("<circle").count(), 24);
    }

    #[test]
    fn parallel_categories_labels_both_axes() {
        let svgs = render_all(&records());
        assert!(shows(&svgs[2], "Gender"));
        assert!(shows(&svgs[2], "BirthMonth"));
        assert!(shows(&svgs[2], "January"));
        assert!(shows(&svgs[2], "AgeSurveyed"));
        assert!(svgs[2].contains("<polygon"));
    }

    #[test]
    fn bubble_draws_every_point_on_a_log_axis() {
        let svgs = render_all(&records());
        assert!(CHART_SPECS[3].options.log_x);
        assert_eq!(svgs[3].matches("<circle").count(), 24);
        assert!(!svgs[3].contains("NaN"));
    }

    #[test]
    fn grouped_bars_label_every_category() {
        let svgs = render_all(&records());
        for year in 2012..2018 {
            assert!(shows(&svgs[4], &year.to_string()), "year {}", year);
        }
    }

    #[test]
    fn single_record_renders() {
        for svg in render_all(&records()[..1]) {
            assert!(!svg.contains("NaN"));
            assert!(!svg.contains(EMPTY_MESSAGE));
        }
    }

    #[test]
    fn padding_widens_flat_domains() {
        assert_eq!(padded(Some((5.0, 5.0))), (4.5, 5.5));
        assert_eq!(padded(Some((0.0, 0.0))), (-1.0, 1.0));
        assert_eq!(log_padded(Some((10.0, 10.0))), (5.0, 20.0));
    }

    #[test]
    fn ribbon_outline_closes_between_axes() {
        let outline = ribbon_outline((0.0, 10.0, 20.0), (100.0, 50.0, 60.0));
        assert_eq!(outline.len(), 34);
        assert_eq!(outline[0], (0, 10));
        assert_eq!(outline[16], (100, 50));
        assert_eq!(outline[17], (100, 60));
        assert_eq!(outline[33], (0, 20));
    }
}
