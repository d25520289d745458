//! Credit card placeholder view.

use dioxus::prelude::*;
use urbanskate_core::payment::card;

#[component]
pub fn CardPayment() -> Element {
    rsx! {
        div { class: "payment-view",
            h2 { "{card::TITLE}" }
            p { class: "hint", "{card::SUMMARY}" }
            div { class: "panel-gray",
                p { "{card::DEMO_NOTICE}" }
            }
        }
    }
}
