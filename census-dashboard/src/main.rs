//! Student Census Data dashboard.
//!
//! A sidebar of filters (birth month, age range) drives six charts over the
//! joined student census table, laid out in three rows of two.
//!
//! Data flow:
//! 1. `build.rs` copies the six table CSVs into `OUT_DIR`.
//! 2. `include_str!` embeds them into the WASM binary.
//! 3. On mount, the session starts from a `CensusSource`. Native builds
//!    read the SQLite database named by `CENSUS_DB_PATH` when it is set;
//!    otherwise (and always in the browser) the embedded CSVs are loaded
//!    into an in-memory SQLite database and joined there.
//! 4. Each filter change is dispatched to the session, which re-filters and
//!    re-renders all six charts before the grid re-reads them.

use census_chart_ui::components::{ChartGrid, DashboardHeader, Sidebar, StartupError};
use census_chart_ui::state::AppState;
use census_db::{CensusSource, DataSource, DataSourceError, Snapshot};
use dioxus::prelude::*;


const STUDENT_DEMOGRAPHICS_CSV: &str =
    include_str!(concat!(env!("OUT_DIR"), "/student_demographics.csv"));
const BODY_SPECIFICS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/body_specifics.csv"));
const HOME_LIFE_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/home_life.csv"));
const MISC_PREFERENCES_CSV: &str =
    include_str!(concat!(env!("OUT_DIR"), "/misc_preferences.csv"));
const SOCIAL_ACTIVITY_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/social_activity.csv"));
const WORLD_ISSUES_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/world_issues.csv"));

const SNAPSHOT: Snapshot<'static> = Snapshot {
    student_demographics: STUDENT_DEMOGRAPHICS_CSV,
    body_specifics: BODY_SPECIFICS_CSV,
    home_life: HOME_LIFE_CSV,
    misc_preferences: MISC_PREFERENCES_CSV,
    social_activity: SOCIAL_ACTIVITY_CSV,
    world_issues: WORLD_ISSUES_CSV,
};

/// The database named by `CENSUS_DB_PATH`, or the embedded snapshot.
#[cfg(not(target_arch = "wasm32"))]
fn census_source() -> Result<CensusSource<'static>, DataSourceError> {
    CensusSource::from_env(SNAPSHOT)
}

/// The browser has no environment or database file to open.
#[cfg(target_arch = "wasm32")]
fn census_source() -> Result<CensusSource<'static>, DataSourceError> {
    Ok(CensusSource::Snapshot(census_db::SnapshotStore::new(SNAPSHOT)))
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("census-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load once on mount
    use_effect(move || match census_source() {
        Ok(source) => {
            log::info!("[Census] dashboard: loading census from {}", source.describe());
            state.start(&source);
        }
        Err(e) => state.fail("configuration", &e),
    });

    rsx! {
        document::Title { "DS7330 Final Project" }
        div {
            style: "box-sizing: border-box; width: 100%; max-width: none; padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            DashboardHeader {
                title: "Student Census Data".to_string(),
            }

            if let Some(failure) = (state.failure)() {
                StartupError { failure }
            } else if (state.loading)() {
                div {
                    style: "padding: 40px; text-align: center; color: #666;",
                    "Loading census data..."
                }
            } else {
                div {
                    style: "display: flex; gap: 16px; align-items: flex-start;",
                    Sidebar {}
                    main {
                        style: "flex: 1; min-width: 0;",
                        ChartGrid {}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_snapshot_is_the_default_source() {
        let source = CensusSource::from_lookup(|_| None, SNAPSHOT).unwrap();
        assert!(source.is_snapshot());
        let students = STUDENT_DEMOGRAPHICS_CSV
            .lines()
            .skip(1)
            .filter(|line| !line.trim().is_empty())
            .count();
        assert_eq!(source.fetch().unwrap().len(), students);
    }
}
