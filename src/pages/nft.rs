//! NFT dashboard page.

use dioxus::prelude::*;

use crate::components::nft::NftDashboardPanel;
use crate::components::{NavBar, NavLocation};

const HIGHLIGHTS: [(&str, &str, &str); 3] = [
    (
        "🎨",
        "Unique Artwork",
        "Each NFT features original artwork inspired by our skateboard track and community",
    ),
    (
        "🏆",
        "Exclusive Benefits",
        "NFT holders get special privileges, event access, and community voting rights",
    ),
    (
        "⛓️",
        "Blockchain Verified",
        "All NFTs are minted on Ethereum blockchain ensuring authenticity and ownership",
    ),
];

const GETTING_STARTED: [(&str, &str); 3] = [
    ("Connect Wallet", "Connect your MetaMask or compatible Web3 wallet"),
    ("Mint Your First NFT", "Start with a Track Supporter NFT for just 0.01 ETH"),
    ("Enjoy Benefits", "Access exclusive events and community features"),
];

#[component]
pub fn Nft() -> Element {
    rsx! {
        main { class: "page",
            NavBar { current: NavLocation::Nft }

            div { class: "container",
                div { class: "page-intro",
                    h1 { class: "page-title", "NFT DASHBOARD" }
                    p { class: "page-lead",
                        "Discover, collect, and manage your Urban Skate Track NFTs. Each token represents your unique connection to our skateboarding community."
                    }
                }

                div { class: "three-col",
                    for (icon, title, body) in HIGHLIGHTS {
                        div { key: "{title}", class: "tile",
                            div { class: "tile-icon", "{icon}" }
                            h3 { "{title}" }
                            p { "{body}" }
                        }
                    }
                }

                NftDashboardPanel {}

                div { class: "two-col section-gap",
                    div { class: "panel-gray",
                        h2 { class: "panel-title", "About Our NFTs" }
                        p { class: "hint",
                            "Urban Skate Track NFTs are more than just digital collectibles. They represent membership in our community and support for our mission to provide free, accessible skateboarding facilities."
                        }
                        p { class: "hint",
                            "Each NFT is carefully designed to capture the essence of skateboarding culture and the unique character of our track. From legendary rare pieces to community badges, there's something for every supporter."
                        }
                    }
                    div { class: "panel-gray",
                        h2 { class: "panel-title", "Getting Started" }
                        div { class: "steps-list",
                            for (i, (title, body)) in GETTING_STARTED.iter().enumerate() {
                                div { key: "{title}", class: "steps-list-item",
                                    span { class: "steps-list-num", "{i + 1}" }
                                    div {
                                        h4 { "{title}" }
                                        p { "{body}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
