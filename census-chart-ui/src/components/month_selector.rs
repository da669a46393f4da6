//! Birth month multi-select: one checkbox per month plus All/None.

use crate::state::AppState;
use census_charts::FilterEvent;
use census_model::BirthMonth;
use dioxus::prelude::*;

/// Checkbox list over the twelve months in calendar order.
#[component]
pub fn MonthSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selection = state.selection();
    let is_selected =
        move |month: BirthMonth| selection.as_ref().is_some_and(|s| s.is_month_selected(month));

    rsx! {
        fieldset {
            style: "margin: 8px 0; border: none; padding: 0;",
            legend {
                style: "font-weight: bold; margin-bottom: 4px;",
                "Birth Month"
            }
            div {
                style: "display: flex; gap: 6px; margin-bottom: 6px;",
                button {
                    r#type: "button",
                    onclick: move |_| state.dispatch(FilterEvent::SelectAllMonths),
                    "All"
                }
                button {
                    r#type: "button",
                    onclick: move |_| state.dispatch(FilterEvent::ClearMonths),
                    "None"
                }
            }
            for month in BirthMonth::ALL {
                label {
                    key: "{month.number()}",
                    style: "display: block; font-size: 14px;",
                    input {
                        r#type: "checkbox",
                        value: "{month}",
                        checked: is_selected(month),
                        onchange: move |_| state.dispatch(FilterEvent::ToggleMonth(month)),
                    }
                    " {month}"
                }
            }
        }
    }
}
