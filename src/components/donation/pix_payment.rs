//! PIX Payment View
//!
//! Requests a charge from the gateway as soon as it mounts, then shows the
//! QR code and the copy-and-paste payload.

use std::time::Duration;

use dioxus::prelude::*;
use urbanskate_core::{format_usd, MockGateway, PaymentStatus, PixCheckout};

use crate::components::clipboard::copy_text;
use crate::context::use_gateway;

/// Start a charge unless one is already pending or done.
fn request_charge(mut checkout: Signal<PixCheckout>, gateway: MockGateway, amount: f64) {
    if !checkout.write().begin() {
        return;
    }
    spawn(async move {
        let result = gateway.create_pix_charge(amount).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "PIX charge failed");
        }
        checkout.write().finish(result);
    });
}

#[component]
pub fn PixPayment(amount: f64) -> Element {
    let gateway = use_gateway();
    let mut checkout = use_signal(PixCheckout::new);
    let mut copied = use_signal(|| false);

    let mount_gateway = gateway.clone();
    use_effect(move || {
        request_charge(checkout, mount_gateway.clone(), amount);
    });

    let try_again = move |_| {
        if checkout.write().retry() {
            request_charge(checkout, gateway.clone(), amount);
        }
    };

    let amount_label = format_usd(amount);
    let status = checkout.read().status().clone();

    match status {
        PaymentStatus::Idle | PaymentStatus::Pending => rsx! {
            div { class: "loading",
                div { class: "spinner spinner--large" }
                p { "Generating PIX payment..." }
            }
        },
        PaymentStatus::Failed(message) => rsx! {
            div { class: "payment-view",
                div { class: "status-box status-box--error",
                    h3 { "Could not generate PIX payment" }
                    p { "{message}" }
                    button { class: "btn btn-primary btn-small", onclick: try_again, "Try Again" }
                }
            }
        },
        PaymentStatus::Success(charge) => {
            let payload = charge.payload.clone();
            let copy = move |_| {
                copy_text(&payload);
                copied.set(true);
                spawn(async move {
                    tokio::time::sleep(Duration::from_secs(2)).await;
                    copied.set(false);
                });
            };

            rsx! {
                div { class: "payment-view",
                    h2 { "PIX Payment" }
                    p { class: "hint",
                        "Scan the QR code or copy the PIX key to complete your ${amount_label} donation"
                    }

                    div { class: "qr-frame",
                        img { src: "{charge.qr_data_uri}", alt: "PIX QR Code" }
                    }

                    div { class: "form-group",
                        label { class: "form-label", "PIX Key (Copy and Paste)" }
                        div { class: "copy-row",
                            input {
                                class: "form-input",
                                r#type: "text",
                                readonly: true,
                                value: "{charge.payload}",
                            }
                            button {
                                class: if copied() { "btn btn-success" } else { "btn btn-primary" },
                                onclick: copy,
                                if copied() { "Copied!" } else { "Copy" }
                            }
                        }
                    }

                    div { class: "steps-list",
                        for (i, line) in [
                            "Open your bank app",
                            "Go to PIX section",
                            "Scan the QR code or paste the PIX key",
                            "Confirm the payment details",
                            "Complete the transaction",
                        ].iter().enumerate() {
                            div { class: "steps-list-item",
                                span { class: "steps-list-num", "{i + 1}" }
                                p { "{line}" }
                            }
                        }
                    }

                    div { class: "notice",
                        strong { "Waiting for payment confirmation..." }
                        "Your donation will be confirmed automatically once the payment is processed."
                    }
                    p { class: "payment-note", "Having trouble? Contact our support team for assistance." }
                }
            }
        }
    }
}
