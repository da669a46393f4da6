//! One chart: title, rendered SVG and a coverage caption.

use census_charts::RenderedView;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartPanelProps {
    pub view: RenderedView,
}

#[component]
pub fn ChartPanel(props: ChartPanelProps) -> Element {
    let view = &props.view;
    let caption = view.caption();

    rsx! {
        section {
            class: "census-chart-panel",
            style: "flex: 1 1 0; min-width: 0; padding: 8px; background: white; border: 1px solid #E0E0E0; border-radius: 4px;",
            h3 {
                style: "margin: 0 0 6px 0; font-size: 15px;",
                "{view.title}"
            }
            div {
                id: "{view.container_id}",
                style: "width: 100%; overflow-x: auto;",
                dangerous_inner_html: "{view.svg}",
            }
            p {
                style: "margin: 4px 0 0 0; font-size: 12px; color: #666;",
                "{caption}"
            }
        }
    }
}
