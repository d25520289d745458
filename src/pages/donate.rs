//! Donation page: impact tiers, the wizard and why donations matter.

use dioxus::prelude::*;

use crate::components::donation::DonationForm;
use crate::components::{NavBar, NavLocation};

const IMPACT_TIERS: [(&str, &str); 3] = [
    ("$25", "Covers basic maintenance supplies for one week"),
    ("$100", "Funds a beginner skateboarding workshop"),
    ("$500", "Helps purchase new equipment and safety gear"),
];

const REASONS: [(&str, &str); 4] = [
    (
        "Community Access",
        "We keep our track free and accessible to everyone, regardless of economic background. Your donations help us maintain this commitment to the community.",
    ),
    (
        "Safety & Maintenance",
        "Regular maintenance, safety inspections, and equipment updates ensure a safe environment for skaters of all skill levels.",
    ),
    (
        "Events & Programs",
        "From competitions to beginner workshops, we organize events that bring the community together and help new skaters learn.",
    ),
    (
        "Future Growth",
        "Your support helps us plan for expansion, new features, and improved facilities to serve our growing community better.",
    ),
];

#[component]
pub fn Donate() -> Element {
    rsx! {
        main { class: "page page--dim",
            NavBar { current: NavLocation::Donate }

            div { class: "container",
                div { class: "page-intro",
                    h1 { class: "page-title", "SUPPORT OUR COMMUNITY" }
                    p { class: "page-lead",
                        "Your donation helps us maintain our facilities, organize events, and keep the skateboarding community thriving. Every contribution makes a difference."
                    }
                }

                div { class: "three-col",
                    for (amount, impact) in IMPACT_TIERS {
                        div { key: "{amount}", class: "tile",
                            div { class: "tile-value", "{amount}" }
                            p { "{impact}" }
                        }
                    }
                }

                DonationForm {}

                div { class: "panel-dark section-gap",
                    h2 { class: "panel-title", "Why Your Support Matters" }
                    div { class: "two-col",
                        for (title, body) in REASONS {
                            div { key: "{title}",
                                h3 { "{title}" }
                                p { "{body}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
