//! Sidebar holding the filter controls.

use crate::components::{AgeRangeSlider, MonthSelector};
use dioxus::prelude::*;

#[component]
pub fn Sidebar() -> Element {
    rsx! {
        aside {
            style: "width: 220px; flex-shrink: 0; padding: 12px; background: #FAFAFA; border-right: 1px solid #E0E0E0;",
            h2 {
                style: "margin: 0 0 8px 0; font-size: 18px;",
                "Filters"
            }
            MonthSelector {}
            AgeRangeSlider {}
        }
    }
}
