//! Category Pills Component
//!
//! Horizontal row of gallery filter pills. The selected pill is filled black.

use dioxus::prelude::*;
use urbanskate_core::CategoryFilter;

#[derive(Clone, PartialEq, Props)]
pub struct CategoryPillsProps {
    /// Currently selected filter
    pub selected: CategoryFilter,
    /// Handler called when a pill is clicked
    pub on_select: EventHandler<CategoryFilter>,
}

/// Displays "All Photos" followed by one pill per category.
#[component]
pub fn CategoryPills(props: CategoryPillsProps) -> Element {
    rsx! {
        div {
            class: "category-pills",
            role: "radiogroup",
            "aria-label": "Photo category",
            for filter in CategoryFilter::options() {
                {
                    let is_selected = props.selected == filter;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            key: "{filter.as_str()}",
                            class: if is_selected { "pill selected" } else { "pill" },
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            onclick: move |_| on_select.call(filter),
                            "{filter.label()}"
                        }
                    }
                }
            }
        }
    }
}
