//! Crypto Payment View
//!
//! Mock wallet connection followed by a mock transfer. The direct
//! donation addresses are shown while no wallet is connected.

use dioxus::prelude::*;
use urbanskate_core::fixtures::{BTC_DONATION_ADDRESS, ETH_DONATION_ADDRESS};
use urbanskate_core::{estimate_eth, format_usd, CryptoCheckout, PaymentStatus, NETWORK_FEE_ETH};

use crate::context::use_gateway;

#[component]
pub fn CryptoPayment(amount: f64) -> Element {
    let gateway = use_gateway();
    let mut checkout = use_signal(CryptoCheckout::new);

    let connect_gateway = gateway.clone();
    let connect = move |_| {
        let Some(session) = checkout.write().begin_connect() else {
            return;
        };
        let gateway = connect_gateway.clone();
        spawn(async move {
            let result = gateway.connect_wallet().await;
            checkout.write().finish_connect(session, result);
        });
    };

    let send = move |_| {
        let session = match checkout.write().begin_send() {
            Ok(Some(session)) => session,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!(error = %e, "Send clicked without a wallet");
                return;
            }
        };
        let gateway = gateway.clone();
        spawn(async move {
            let result = gateway.send_donation(amount).await;
            checkout.write().finish_send(session, result);
        });
    };

    let state = checkout.read().clone();
    let amount_label = format_usd(amount);
    let eth_estimate = format!("{:.6}", estimate_eth(amount));

    rsx! {
        div { class: "payment-view",
            h2 { "Cryptocurrency Payment" }
            p { class: "hint", "Connect your wallet to donate ${amount_label} in cryptocurrency" }

            if let Some(wallet) = state.wallet() {
                div { class: "wallet-box",
                    div { class: "wallet-head",
                        h3 { "Wallet Connected" }
                        button {
                            class: "link-danger",
                            onclick: move |_| checkout.write().disconnect(),
                            "Disconnect"
                        }
                    }
                    p { class: "wallet-line", strong { "Address: " } "{wallet.short_address()}" }
                    p { class: "wallet-line", strong { "Balance: " } "{wallet.balance_display()} ETH" }
                }

                {match state.payment().status() {
                    PaymentStatus::Idle => rsx! {
                        div { class: "wallet-box",
                            h3 { "Donation Details" }
                            div { class: "summary-row",
                                span { "Donation Amount:" }
                                strong { "${amount_label} USD" }
                            }
                            div { class: "summary-row",
                                span { "Estimated ETH:" }
                                strong { "~{eth_estimate} ETH" }
                            }
                            div { class: "summary-row",
                                span { "Network Fee:" }
                                strong { "~{NETWORK_FEE_ETH} ETH" }
                            }
                            button { class: "btn btn-primary section-gap", onclick: send, "Send Donation" }
                        }
                    },
                    PaymentStatus::Pending => rsx! {
                        div { class: "loading",
                            div { class: "spinner spinner--large" }
                            h3 { "Processing Transaction" }
                            p { "Please confirm the transaction in your wallet and wait for blockchain confirmation." }
                        }
                    },
                    PaymentStatus::Success(hash) => rsx! {
                        div { class: "status-box status-box--success",
                            h3 { "Donation Successful!" }
                            p { "Thank you for your ${amount_label} donation to Urban Skate Track!" }
                            p { class: "address-list", "{hash}" }
                            p {
                                "View on Etherscan: "
                                a { href: "{hash.explorer_url()}", target: "_blank", "{hash.short()}" }
                            }
                        }
                    },
                    PaymentStatus::Failed(message) => rsx! {
                        div { class: "status-box status-box--error",
                            h3 { "Transaction Failed" }
                            p { "There was an error processing your donation: {message}" }
                            button {
                                class: "btn btn-primary btn-small",
                                onclick: move |_| {
                                    checkout.write().retry();
                                },
                                "Try Again"
                            }
                        }
                    },
                }}
            } else {
                div { class: "wallet-box",
                    h3 { "Connect Your Wallet" }
                    p { class: "wallet-line",
                        "Connect your cryptocurrency wallet to proceed with the donation. We support MetaMask and other Web3 wallets."
                    }
                    button {
                        class: "btn btn-primary section-gap",
                        disabled: state.is_connecting(),
                        onclick: connect,
                        if state.is_connecting() {
                            span { class: "spinner" }
                            "Connecting..."
                        } else {
                            "Connect Wallet"
                        }
                    }
                    if let Some(err) = state.connect_error() {
                        p { class: "field-error", "Failed to connect wallet: {err}" }
                    }
                }

                div { class: "wallet-box",
                    h3 { "Alternative Crypto Donations" }
                    p { class: "wallet-line", "You can also send donations directly to our wallet addresses:" }
                    div { class: "address-list",
                        div { strong { "Ethereum (ETH): " } br {} code { "{ETH_DONATION_ADDRESS}" } }
                        div { strong { "Bitcoin (BTC): " } br {} code { "{BTC_DONATION_ADDRESS}" } }
                    }
                }
            }

            div { class: "notice",
                strong { "Security Notice" }
                "Always verify the recipient address before sending cryptocurrency. Transactions are irreversible. We recommend starting with a small test transaction."
            }
        }
    }
}
