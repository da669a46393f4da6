//! Charts for the student census dashboard.
//!
//! - [`specs`]: the six fixed chart descriptors.
//! - [`view`]: per-chart statistics over a filtered table.
//! - [`svg`]: plotters SVG rendering of those statistics, colored from [`palette`].
//! - [`pipeline`]: filter-and-render for all six charts, and the
//!   [`Session`] that reacts to [`FilterEvent`]s.
//!
//! ```rust
//! use census_charts::{FilterEvent, Session};
//! use census_model::{BirthMonth, Gender, RawTable, StudentRecord};
//!
//! let mut record = StudentRecord::demographic(1, Some(Gender::new("Female")), 13, 2018, BirthMonth::May);
//! record.height = Some(155.0);
//! let mut session = Session::from_table("inline", RawTable::new(vec![record]));
//! assert_eq!(session.layout().get(1).unwrap().coverage.included, 1);
//!
//! let layout = session.dispatch(FilterEvent::ToggleMonth(BirthMonth::May));
//! assert!(layout.views().iter().all(|v| v.view.is_empty()));
//! ```

pub mod pipeline;
pub mod palette;
pub mod specs;
pub mod svg;
pub mod view;

pub use pipeline::{render, DashboardLayout, FilterEvent, RenderedView, Session};
pub use specs::{ChartDescriptor, ChartKind, Role, CHART_COUNT, CHART_SPECS};
pub use svg::render_svg;
pub use view::{compute_view, ChartView, Coverage};
