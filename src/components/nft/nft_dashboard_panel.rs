//! NFT Dashboard Panel
//!
//! Disconnected: a connect prompt. Connected: wallet header, three tabs
//! (My NFTs / Mint New / Transaction History) and dismissible banners for
//! failures and mint confirmations.

use dioxus::prelude::*;
use urbanskate_core::{DashboardTab, NftDashboard, MINT_BENEFITS, MINT_PRICE_ETH};

use super::{NftCard, TxHistory};
use crate::context::use_gateway;

#[component]
pub fn NftDashboardPanel() -> Element {
    let gateway = use_gateway();
    let mut dashboard = use_signal(NftDashboard::new);

    let connect_gateway = gateway.clone();
    let connect = move |_| {
        let Some(session) = dashboard.write().begin_connect() else {
            return;
        };
        let gateway = connect_gateway.clone();
        spawn(async move {
            let result = gateway.connect_wallet().await;
            let load = dashboard.write().finish_connect(session, result);
            if load {
                let collection = gateway.load_collection().await;
                dashboard.write().finish_load(session, collection);
            }
        });
    };

    let mint = move |_| {
        let session = match dashboard.write().begin_mint() {
            Ok(Some(session)) => session,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!(error = %e, "Mint clicked without a wallet");
                return;
            }
        };
        let gateway = gateway.clone();
        spawn(async move {
            let result = gateway.mint_supporter_token().await;
            dashboard.write().finish_mint(session, result);
        });
    };

    let state = dashboard.read().clone();

    let banners = rsx! {
        if let Some(err) = state.error() {
            div { class: "banner banner--error",
                span { "{err}" }
                button {
                    "aria-label": "Dismiss",
                    onclick: move |_| dashboard.write().dismiss_error(),
                    "×"
                }
            }
        }
        if let Some(notice) = state.notice() {
            div { class: "banner banner--success",
                span { "{notice}" }
                button {
                    "aria-label": "Dismiss",
                    onclick: move |_| dashboard.write().dismiss_notice(),
                    "×"
                }
            }
        }
    };

    let Some(wallet) = state.wallet() else {
        return rsx! {
            div { class: "connect-panel",
                {banners}
                h2 { class: "panel-title", "Connect Your Wallet" }
                p { class: "hint",
                    "Connect your Web3 wallet to view your NFT collection, mint new tokens, and track your transaction history."
                }
                div { class: "panel section-gap",
                    h3 { "Urban Skate Track NFTs" }
                    p { class: "hint",
                        "Collect unique digital assets that represent your connection to our skateboarding community. Each NFT tells a story and grants special privileges."
                    }
                    button {
                        class: "btn btn-primary btn-large section-gap",
                        disabled: state.is_connecting(),
                        onclick: connect,
                        if state.is_connecting() {
                            span { class: "spinner" }
                            "Connecting..."
                        } else {
                            "Connect Wallet"
                        }
                    }
                }
                div { class: "panel-gray section-gap",
                    h4 { "Supported Wallets" }
                    ul {
                        li { "MetaMask" }
                        li { "WalletConnect" }
                        li { "Coinbase Wallet" }
                        li { "Trust Wallet" }
                    }
                }
            }
        };
    };

    let tab = state.tab();

    rsx! {
        div { class: "wallet-header",
            div {
                h2 { "NFT Dashboard" }
                p { class: "wallet-line", strong { "Address: " } "{wallet.short_address()}" }
                p { class: "wallet-line", strong { "Balance: " } "{wallet.balance_display()} ETH" }
            }
            button {
                class: "btn btn-outline btn-small",
                onclick: move |_| dashboard.write().disconnect(),
                "Disconnect"
            }
        }

        {banners}

        div { class: "tabs",
            for t in DashboardTab::all().iter().copied() {
                button {
                    key: "{t.label()}",
                    class: if t == tab { "tab active" } else { "tab" },
                    onclick: move |_| dashboard.write().set_tab(t),
                    "{t.label()}"
                    if let Some(count) = state.tab_count(t) {
                        span { class: "tab-count", "{count}" }
                    }
                }
            }
        }

        {match tab {
            DashboardTab::Nfts => {
                if state.is_loading() {
                    rsx! {
                        div { class: "loading",
                            div { class: "spinner spinner--large" }
                            p { "Loading your NFTs..." }
                        }
                    }
                } else if state.tokens().is_empty() {
                    rsx! {
                        div { class: "empty-state",
                            h3 { "No NFTs Yet" }
                            p { "You don't have any Urban Skate Track NFTs yet. Start by minting your first one!" }
                            button {
                                class: "btn btn-primary section-gap",
                                onclick: move |_| dashboard.write().set_tab(DashboardTab::Mint),
                                "Mint Your First NFT"
                            }
                        }
                    }
                } else {
                    rsx! {
                        div { class: "nft-grid",
                            for nft in state.tokens().iter().cloned() {
                                NftCard { key: "{nft.id}", nft }
                            }
                        }
                    }
                }
            }
            DashboardTab::Mint => rsx! {
                div { class: "panel mint-panel",
                    h3 { class: "panel-title", "Mint New NFT" }
                    div { class: "benefits",
                        strong { "Track Supporter Collection" }
                        p { class: "hint",
                            "Mint a special NFT to show your support for the Urban Skate Track community. Each NFT is unique and grants you special privileges within our ecosystem."
                        }
                        div { class: "mint-terms",
                            div { span { "Mint Price:" } "{MINT_PRICE_ETH} ETH (~$20)" }
                            div { span { "Supply:" } "Unlimited" }
                            div { span { "Benefits:" } "Community access" }
                            div { span { "Rarity:" } "Common" }
                        }
                    }
                    div { class: "benefits",
                        strong { "NFT Benefits" }
                        ul {
                            for benefit in MINT_BENEFITS {
                                li { "• {benefit}" }
                            }
                        }
                    }
                    button {
                        class: "btn btn-primary btn-large",
                        disabled: state.is_minting() || state.is_loading(),
                        onclick: mint,
                        if state.is_minting() {
                            span { class: "spinner" }
                            "Minting NFT..."
                        } else if state.is_loading() {
                            span { class: "spinner" }
                            "Loading collection..."
                        } else {
                            "Mint NFT ({MINT_PRICE_ETH} ETH)"
                        }
                    }
                }
            },
            DashboardTab::History => rsx! {
                TxHistory { transactions: state.transactions().to_vec() }
            },
        }}
    }
}
