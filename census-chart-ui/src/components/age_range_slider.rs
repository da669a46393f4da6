//! Age range control: two range inputs over the observed ages.

use crate::state::AppState;
use census_charts::FilterEvent;
use census_data::AgeRange;
use dioxus::prelude::*;

/// Text shown next to the sliders.
pub(crate) fn range_label(range: AgeRange) -> String {
    if range.is_empty() {
        format!("{} to {} (no ages)", range.min, range.max)
    } else if range.min == range.max {
        format!("{}", range.min)
    } else {
        format!("{} to {}", range.min, range.max)
    }
}

/// Lower and upper age sliders bounded by the load-time age domain.
#[component]
pub fn AgeRangeSlider() -> Element {
    let mut state = use_context::<AppState>();
    let Some(selection) = state.selection() else {
        return rsx! {};
    };
    let (lo, hi) = selection.age_domain();
    let range = selection.age_range;
    let ages = state.available_ages();
    let label = range_label(range);

    let on_min = move |evt: Event<FormData>| {
        if let Ok(min) = evt.value().parse::<i64>() {
            state.dispatch(FilterEvent::SetAgeMin(min));
        }
    };
    let on_max = move |evt: Event<FormData>| {
        if let Ok(max) = evt.value().parse::<i64>() {
            state.dispatch(FilterEvent::SetAgeMax(max));
        }
    };

    rsx! {
        div {
            style: "margin: 16px 0 8px 0;",
            div {
                style: "font-weight: bold; margin-bottom: 4px;",
                "Age Range"
            }
            div {
                style: "font-size: 14px; margin-bottom: 6px;",
                "{label}"
            }
            label {
                style: "display: block; font-size: 12px; color: #666;",
                "From "
                input {
                    r#type: "range",
                    min: "{lo}",
                    max: "{hi}",
                    step: "1",
                    value: "{range.min}",
                    list: "census-ages",
                    oninput: on_min,
                }
            }
            label {
                style: "display: block; font-size: 12px; color: #666;",
                "To "
                input {
                    r#type: "range",
                    min: "{lo}",
                    max: "{hi}",
                    step: "1",
                    value: "{range.max}",
                    list: "census-ages",
                    oninput: on_max,
                }
            }
            datalist {
                id: "census-ages",
                for age in ages {
                    option { key: "{age}", value: "{age}" }
                }
            }
        }
    }
}
