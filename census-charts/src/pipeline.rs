//! Filter-and-render pipeline and the per-user session that drives it.
//!
//! A [`Session`] loads the census once through a [`DataSource`], then every
//! [`FilterEvent`] re-filters the whole table and re-renders all six charts
//! before `dispatch` returns. Nothing is cached between events.

use crate::specs::{ChartDescriptor, ChartKind, CHART_COUNT, CHART_SPECS};
use crate::svg::render_svg;
use crate::view::{compute_view, ChartView, Coverage};
use census_data::{apply, initialize, FilterSelection, FilteredTable};
use census_db::{DataSource, DataSourceError};
use census_model::{BirthMonth, RawTable};
use serde::Serialize;

/// One chart panel, ready to display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedView {
    pub number: usize,
    pub title: &'static str,
    pub kind: ChartKind,
    pub container_id: String,
    pub view: ChartView,
    pub svg: String,
    pub coverage: Coverage,
}

impl RenderedView {
    /// Caption shown under the chart.
    pub fn caption(&self) -> String {
        format!(
            "{} records shown, {} excluded",
            self.coverage.included, self.coverage.excluded
        )
    }
}

/// The six rendered charts in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardLayout {
    views: Vec<RenderedView>,
}

impl DashboardLayout {
    pub const COLUMNS: usize = 2;

    pub fn views(&self) -> &[RenderedView] {
        &self.views
    }

    /// Rows of two panels: (1, 2), (3, 4), (5, 6).
    pub fn rows(&self) -> impl Iterator<Item = &[RenderedView]> + '_ {
        self.views.chunks(Self::COLUMNS)
    }

    pub fn get(&self, number: usize) -> Option<&RenderedView> {
        self.views.iter().find(|v| v.number == number)
    }
}

/// Compute, draw and tally every chart over `table`.
pub fn render(table: &FilteredTable<'_>, specs: &[ChartDescriptor; CHART_COUNT]) -> DashboardLayout {
    let views = specs
        .iter()
        .map(|spec| {
            let (view, coverage) = compute_view(spec, table);
            let svg = render_svg(spec, &view);
            log::debug!(
                "[Census] render: chart {} '{}' drew {} of {} records",
                spec.number,
                spec.title,
                coverage.included,
                table.len()
            );
            RenderedView {
                number: spec.number,
                title: spec.title,
                kind: spec.kind,
                container_id: spec.container_id(),
                view,
                svg,
                coverage,
            }
        })
        .collect();
    DashboardLayout { views }
}

/// A change to the filter controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    ToggleMonth(BirthMonth),
    SetMonths(Vec<BirthMonth>),
    SelectAllMonths,
    ClearMonths,
    SetAgeMin(i64),
    SetAgeMax(i64),
    SetAgeRange(i64, i64),
    /// Back to the selection made at load time.
    Reset,
}

impl FilterEvent {
    fn apply_to(self, selection: &mut FilterSelection, defaults: &FilterSelection) {
        match self {
            FilterEvent::ToggleMonth(month) => selection.toggle_month(month),
            FilterEvent::SetMonths(months) => selection.set_months(months),
            FilterEvent::SelectAllMonths => selection.select_all_months(),
            FilterEvent::ClearMonths => selection.clear_months(),
            FilterEvent::SetAgeMin(min) => selection.set_age_min(min),
            FilterEvent::SetAgeMax(max) => selection.set_age_max(max),
            FilterEvent::SetAgeRange(min, max) => selection.set_age_range(min, max),
            FilterEvent::Reset => *selection = defaults.clone(),
        }
    }
}

/// All state for one viewer: the loaded table, the filter and the charts.
#[derive(Debug)]
pub struct Session {
    source: String,
    raw: RawTable,
    defaults: FilterSelection,
    selection: FilterSelection,
    layout: DashboardLayout,
    renders: usize,
}

impl Session {
    /// Load the census once from `source` and render the default view.
    pub fn start(source: &dyn DataSource) -> Result<Self, DataSourceError> {
        let description = source.describe();
        log::info!("[Census] session: starting from {}", description);
        let raw = source.fetch().map_err(|e| {
            log::warn!("[Census] session: load from {} failed: {}", description, e);
            e
        })?;
        Ok(Self::from_table(description, raw))
    }

    /// A session over an already loaded table.
    pub fn from_table(source: impl Into<String>, raw: RawTable) -> Self {
        let defaults = initialize(&raw);
        let mut session = Self {
            source: source.into(),
            raw,
            selection: defaults.clone(),
            defaults,
            layout: DashboardLayout::default(),
            renders: 0,
        };
        session.refresh();
        session
    }

    /// Apply one filter change, then re-filter and re-render everything.
    pub fn dispatch(&mut self, event: FilterEvent) -> &DashboardLayout {
        log::debug!("[Census] session: {:?}", event);
        event.apply_to(&mut self.selection, &self.defaults);
        self.refresh();
        &self.layout
    }

    fn refresh(&mut self) {
        let filtered = apply(&self.raw, &self.selection);
        log::info!(
            "[Census] session: {} of {} records pass the filter",
            filtered.len(),
            self.raw.len()
        );
        self.layout = render(&filtered, &CHART_SPECS);
        self.renders += 1;
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn raw(&self) -> &RawTable {
        &self.raw
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn defaults(&self) -> &FilterSelection {
        &self.defaults
    }

    /// The records passing the current selection.
    pub fn filtered(&self) -> FilteredTable<'_> {
        apply(&self.raw, &self.selection)
    }

    pub fn layout(&self) -> &DashboardLayout {
        &self.layout
    }

    /// Full renders so far, the initial one included.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Distinct integer ages in the loaded table, for the age controls.
    pub fn available_ages(&self) -> Vec<i64> {
        self.raw.distinct_ages()
    }
}
