//! Fatal startup box shown in place of the dashboard.

use crate::state::StartupFailure;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StartupErrorProps {
    pub failure: StartupFailure,
}

/// Headline for each failure class.
pub(crate) fn headline(kind: &str) -> &'static str {
    match kind {
        "connection" => "Could not reach the census store",
        "query" => "Could not read the census tables",
        _ => "The census could not be loaded",
    }
}

#[component]
pub fn StartupError(props: StartupErrorProps) -> Element {
    let failure = &props.failure;

    rsx! {
        div {
            role: "alert",
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "{headline(failure.kind)}" }
            p {
                style: "margin: 6px 0 0 0; font-size: 13px;",
                "{failure.message}"
            }
            p {
                style: "margin: 6px 0 0 0; font-size: 12px; color: #8E2424;",
                "Source: {failure.source} ({failure.kind} error). The dashboard stopped at startup; fix the store and reload the page."
            }
        }
    }
}
