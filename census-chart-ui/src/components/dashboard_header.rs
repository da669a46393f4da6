//! Page heading with a live count of the students the filters keep.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct DashboardHeaderProps {
    pub title: String,
}

pub(crate) fn match_line(shown: usize, total: usize) -> String {
    let noun = if total == 1 { "student" } else { "students" };
    if shown == total {
        format!("All {} {} shown", total, noun)
    } else {
        format!("{} of {} {} match the current filters", shown, total, noun)
    }
}

#[component]
pub fn DashboardHeader(props: DashboardHeaderProps) -> Element {
    let state = use_context::<AppState>();
    let counts = state.match_counts();
    let source = state.source();

    rsx! {
        header {
            style: "margin-bottom: 12px;",
            h1 {
                style: "margin: 0 0 4px 0; font-size: 24px;",
                "{props.title}"
            }
            if let Some((shown, total)) = counts {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{match_line(shown, total)}"
                    if let Some(source) = &source {
                        ", loaded from {source}"
                    }
                }
            }
        }
    }
}
