//! Transaction History Component

use dioxus::prelude::*;
use urbanskate_core::Transaction;

use crate::theme::colors::{badge_style, status_color};

/// NFT-related transactions, newest first, each linking to the explorer.
#[component]
pub fn TxHistory(transactions: Vec<Transaction>) -> Element {
    rsx! {
        div { class: "panel",
            h3 { class: "panel-title", "Transaction History" }
            p { class: "hint", "Your NFT-related transactions on the blockchain" }

            if transactions.is_empty() {
                div { class: "empty-state",
                    h4 { "No Transactions Yet" }
                    p { "Your transaction history will appear here once you start minting or trading NFTs." }
                }
            } else {
                div { class: "tx-list section-gap",
                    for tx in transactions.iter() {
                        div { key: "{tx.id}", class: "tx-row",
                            div {
                                div { class: "tx-tags",
                                    strong { class: "tag", "{tx.kind.as_str()}" }
                                    span {
                                        class: "badge",
                                        style: badge_style(status_color(tx.status)),
                                        "{tx.status.as_str()}"
                                    }
                                }
                                div { "{tx.nft_name}" }
                                small { {tx.date.format("%Y-%m-%d").to_string()} }
                            }
                            div { class: "tx-link",
                                a { href: "{tx.tx_hash.explorer_url()}", target: "_blank", "View on Etherscan" }
                                div { "{tx.tx_hash.short()}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
