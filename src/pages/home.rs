//! Landing page: hero, track features, community stats and a call to action.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{NavBar, NavLocation};

const FEATURES: [(&str, &str); 4] = [
    (
        "Street Course",
        "Navigate through urban obstacles, rails, and ledges designed to challenge every skill level.",
    ),
    (
        "Bowl Section",
        "Deep concrete bowls for vert skating and aerial tricks. Perfect for advanced riders.",
    ),
    (
        "Beginner Area",
        "Safe learning environment with smaller ramps and obstacles for newcomers.",
    ),
    (
        "Community Events",
        "Regular competitions, workshops, and meetups bringing skaters together.",
    ),
];

const STATS: [(&str, &str); 4] = [
    ("500+", "Active Members"),
    ("50+", "Events Yearly"),
    ("10K+", "Photos Shared"),
    ("24/7", "Open Access"),
];

#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();

    rsx! {
        main { class: "page",
            NavBar { current: NavLocation::Home }

            header { class: "hero",
                h1 { class: "hero-title", "URBAN SKATE TRACK" }
                p { class: "hero-tagline",
                    "Concrete, community and the freedom to roll. A free skate park built and kept alive by the people who ride it."
                }
                div { class: "hero-actions",
                    Link { to: Route::Gallery {}, class: "btn btn-primary btn-large", "SEE THE GALLERY" }
                    Link { to: Route::Donate {}, class: "btn btn-outline btn-large", "SUPPORT THE TRACK" }
                }
            }

            section { class: "section",
                div { class: "container",
                    h2 { class: "section-title", "THE TRACK" }
                    p { class: "section-lead",
                        "Our state-of-the-art concrete park features diverse terrain for every style of skating. From technical street sections to flowing bowls, we've created the ultimate playground for the skateboarding community."
                    }

                    div { class: "feature-grid",
                        for (title, description) in FEATURES {
                            div { key: "{title}", class: "feature-card",
                                h3 { "{title}" }
                                p { "{description}" }
                            }
                        }
                    }

                    div { class: "stats-panel",
                        h2 { "COMMUNITY IMPACT" }
                        p { class: "stats-lead", "Numbers that tell our story" }
                        div { class: "stats-grid",
                            for (number, label) in STATS {
                                div { key: "{label}", class: "stat",
                                    div { class: "stat-number", "{number}" }
                                    div { class: "stat-label", "{label}" }
                                }
                            }
                        }
                    }

                    div { class: "cta",
                        h2 { class: "section-title", "JOIN THE MOVEMENT" }
                        p { class: "section-lead",
                            "We're more than just a skate park. We're a community that supports creativity, progression, and the pure joy of skateboarding. Every session, every trick, every fall and every make - it all matters here."
                        }
                        div { class: "cta-actions",
                            button {
                                class: "btn btn-primary btn-large",
                                onclick: move |_| { navigator.push(Route::Gallery {}); },
                                "VISIT US TODAY"
                            }
                            button {
                                class: "btn btn-outline btn-large",
                                onclick: move |_| { navigator.push(Route::Nft {}); },
                                "LEARN MORE"
                            }
                        }
                    }
                }
            }
        }
    }
}
