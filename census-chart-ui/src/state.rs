//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()` and send filter changes through
//! [`AppState::dispatch`].

use census_charts::{DashboardLayout, FilterEvent, Session};
use census_data::FilterSelection;
use census_db::{DataSource, DataSourceError};
use dioxus::prelude::*;

/// Why the session could not start. Startup failures are fatal; the page
/// shows this instead of the charts and nothing retries.
#[derive(Debug, Clone, PartialEq)]
pub struct StartupFailure {
    /// `connection` or `query`
    pub kind: &'static str,
    /// Where the census was being loaded from
    pub source: String,
    pub message: String,
}

impl StartupFailure {
    pub fn new(source: impl Into<String>, error: &DataSourceError) -> Self {
        Self {
            kind: error.kind(),
            source: source.into(),
            message: error.to_string(),
        }
    }
}

/// Shared state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The viewer's session (None until loaded)
    pub session: Signal<Option<Session>>,
    /// Whether the census is still loading
    pub loading: Signal<bool>,
    /// Startup failure shown instead of the charts
    pub failure: Signal<Option<StartupFailure>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(None),
            loading: Signal::new(true),
            failure: Signal::new(None),
        }
    }

    /// Start a session from `source`, recording either the session or the
    /// failure. Loading ends either way.
    pub fn start(&mut self, source: &dyn DataSource) {
        match Session::start(source) {
            Ok(session) => {
                log::info!(
                    "[Census] ui: session ready with {} records",
                    session.raw().len()
                );
                self.session.set(Some(session));
            }
            Err(e) => self.fail(&source.describe(), &e),
        }
        self.loading.set(false);
    }

    /// Record a startup failure that happened before any source could be
    /// opened, such as an unusable store configuration.
    pub fn fail(&mut self, source: &str, error: &DataSourceError) {
        log::error!("[Census] ui: startup from {} failed ({}): {}", source, error.kind(), error);
        self.failure.set(Some(StartupFailure::new(source, error)));
        self.loading.set(false);
    }

    /// Forward a filter change to the session, which re-renders every chart.
    pub fn dispatch(&mut self, event: FilterEvent) {
        let mut session = self.session.write();
        match session.as_mut() {
            Some(session) => {
                session.dispatch(event);
            }
            None => log::warn!("[Census] ui: {:?} before the session started", event),
        }
    }

    /// Current filter selection, if loaded.
    pub fn selection(&self) -> Option<FilterSelection> {
        self.session.read().as_ref().map(|s| s.selection().clone())
    }

    /// Distinct ages for the age controls.
    pub fn available_ages(&self) -> Vec<i64> {
        self.session
            .read()
            .as_ref()
            .map(|s| s.available_ages())
            .unwrap_or_default()
    }

    /// `(shown, total)` record counts for the header, if loaded.
    pub fn match_counts(&self) -> Option<(usize, usize)> {
        self.session
            .read()
            .as_ref()
            .map(|s| (s.filtered().len(), s.raw().len()))
    }

    /// Where the session loaded from, if loaded.
    pub fn source(&self) -> Option<String> {
        self.session.read().as_ref().map(|s| s.source().to_string())
    }

    /// Latest rendered charts, if loaded.
    pub fn layout(&self) -> Option<DashboardLayout> {
        self.session.read().as_ref().map(|s| s.layout().clone())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_keeps_error_kind_and_source() {
        let err = DataSourceError::query("running the census join", "no such table: HomeLife");
        let failure = StartupFailure::new("sqlite:census.db", &err);
        assert_eq!(failure.kind, "query");
        assert_eq!(failure.source, "sqlite:census.db");
        assert!(failure.message.contains("no such table: HomeLife"));
    }
}
