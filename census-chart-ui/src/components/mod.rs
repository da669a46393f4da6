//! Reusable Dioxus RSX components for the census dashboard.

mod age_range_slider;
mod chart_grid;
mod chart_panel;
mod dashboard_header;
mod month_selector;
mod sidebar;
mod startup_error;

pub use age_range_slider::AgeRangeSlider;
pub use chart_grid::ChartGrid;
pub use chart_panel::ChartPanel;
pub use dashboard_header::DashboardHeader;
pub use month_selector::MonthSelector;
pub use sidebar::Sidebar;
pub use startup_error::StartupError;
