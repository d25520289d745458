//! NFT Card Component

use dioxus::prelude::*;
use urbanskate_core::Nft;

use crate::theme::colors::{badge_style, rarity_color};

/// One owned token: image, rarity badge, description, token id and mint date.
#[component]
pub fn NftCard(nft: Nft) -> Element {
    let badge = badge_style(rarity_color(nft.rarity));
    let minted = nft.mint_date.format("%Y-%m-%d").to_string();

    rsx! {
        div { class: "nft-card",
            img { src: "{nft.image}", alt: "{nft.name}" }
            div { class: "nft-card-body",
                div { class: "nft-card-head",
                    h3 { "{nft.name}" }
                    span { class: "badge", style: "{badge}", "{nft.rarity.as_str()}" }
                }
                p { "{nft.description}" }
                div { class: "nft-meta",
                    div { "Token ID: #{nft.token_id}" }
                    div { "Minted: {minted}" }
                }
                // Transfers are not simulated; the buttons are decorative
                div { class: "card-actions",
                    button { class: "btn btn-secondary btn-small", "View Details" }
                    button { class: "btn btn-primary btn-small", "Transfer" }
                }
            }
        }
    }
}
