//! The 3x2 grid of chart panels.

use crate::components::ChartPanel;
use crate::state::AppState;
use dioxus::prelude::*;

/// Lays the session's rendered charts out in rows of two.
#[component]
pub fn ChartGrid() -> Element {
    let state = use_context::<AppState>();
    let Some(layout) = state.layout() else {
        return rsx! {};
    };
    let rows: Vec<_> = layout.rows().map(|row| row.to_vec()).collect();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 12px;",
            for (i, row) in rows.into_iter().enumerate() {
                div {
                    key: "{i}",
                    style: "display: flex; gap: 12px;",
                    for view in row {
                        ChartPanel { key: "{view.number}", view }
                    }
                }
            }
        }
    }
}
