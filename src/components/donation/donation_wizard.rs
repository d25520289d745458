//! Donation Wizard
//!
//! Amount → Method → Details → Payment. The "Next" button is enabled only
//! when the current step validates; inline messages appear once a field
//! has been touched.

use dioxus::prelude::*;
use urbanskate_core::{
    format_usd, DonationWizard, Field, PaymentMethod, SkateError, WizardStep, PRESET_AMOUNTS,
};

use super::{CardPayment, CryptoPayment, PixPayment, StepIndicator};

/// Four-step donation form
#[component]
pub fn DonationForm() -> Element {
    let mut wizard = use_signal(DonationWizard::new);
    let mut touched = use_signal(Vec::<Field>::new);
    let mut thanks = use_signal(|| Option::<String>::None);

    let mut touch = move |field: Field| {
        if !touched.read().contains(&field) {
            touched.write().push(field);
        }
    };

    let go_next = move |_| {
        let result = wizard.write().next();
        if let Err(SkateError::Validation(errors)) = result {
            // Surface every blocking message, not only the fields typed in
            for (field, _) in errors.iter() {
                touch(*field);
            }
        }
    };

    let complete = move |_| match wizard.read().submit() {
        Ok(draft) => thanks.set(Some(draft.name)),
        Err(e) => tracing::warn!(error = %e, "Donation submission rejected"),
    };

    let w = wizard.read().clone();
    let step = w.step();
    let errors = w.validate_step(step).err().unwrap_or_default();
    let shown_error = |field: Field| -> Option<String> {
        if touched.read().contains(&field) {
            errors.get(field).map(str::to_string)
        } else {
            None
        }
    };
    let amount_label = w.amount().map(format_usd).unwrap_or_default();

    rsx! {
        div { class: "panel",
            StepIndicator { current: step }

            div { class: "wizard-body",
                {match step {
                    WizardStep::Amount => rsx! {
                        h3 { "Choose Your Donation Amount" }
                        p { class: "hint",
                            "Your support helps us maintain and improve our skateboard track for the community."
                        }
                        div { class: "amount-grid",
                            for preset in PRESET_AMOUNTS {
                                button {
                                    key: "{preset}",
                                    r#type: "button",
                                    class: if w.amount_selection().preset() == Some(preset) { "amount-btn selected" } else { "amount-btn" },
                                    onclick: move |_| wizard.write().select_preset(preset),
                                    "${preset}"
                                }
                            }
                        }
                        div { class: "form-group",
                            label { class: "form-label", "Or enter custom amount" }
                            div { class: "input-prefix",
                                span { "$" }
                                input {
                                    class: "form-input",
                                    r#type: "number",
                                    min: "1",
                                    step: "0.01",
                                    placeholder: "0.00",
                                    value: "{w.amount_selection().custom_input()}",
                                    oninput: move |e| {
                                        wizard.write().set_custom_amount(e.value());
                                        touch(Field::Amount);
                                    },
                                }
                            }
                            if let Some(message) = shown_error(Field::Amount) {
                                p { class: "field-error", "{message}" }
                            }
                        }
                    },
                    WizardStep::Method => rsx! {
                        h3 { "Select Payment Method" }
                        p { class: "hint", "Choose how you'd like to make your ${amount_label} donation." }
                        for method in PaymentMethod::all().iter().copied() {
                            label {
                                key: "{method.as_str()}",
                                class: if w.payment_method() == Some(method) { "method-option selected" } else { "method-option" },
                                input {
                                    r#type: "radio",
                                    name: "payment-method",
                                    value: "{method.as_str()}",
                                    checked: w.payment_method() == Some(method),
                                    onchange: move |_| wizard.write().select_method(method),
                                }
                                div {
                                    strong { "{method.label()}" }
                                    small { "{method.description()}" }
                                }
                            }
                        }
                        if let Some(message) = shown_error(Field::PaymentMethod) {
                            p { class: "field-error", "{message}" }
                        }
                    },
                    WizardStep::Details => rsx! {
                        h3 { "Your Information" }
                        p { class: "hint", "We'll send you a confirmation receipt for your donation." }
                        div { class: "form-group",
                            label { class: "form-label", "Full Name" }
                            input {
                                class: "form-input",
                                r#type: "text",
                                placeholder: "Enter your full name",
                                value: "{w.name()}",
                                oninput: move |e| {
                                    wizard.write().set_name(e.value());
                                    touch(Field::Name);
                                },
                            }
                            if let Some(message) = shown_error(Field::Name) {
                                p { class: "field-error", "{message}" }
                            }
                        }
                        div { class: "form-group",
                            label { class: "form-label", "Email Address" }
                            input {
                                class: "form-input",
                                r#type: "email",
                                placeholder: "Enter your email address",
                                value: "{w.email()}",
                                oninput: move |e| {
                                    wizard.write().set_email(e.value());
                                    touch(Field::Email);
                                },
                            }
                            if let Some(message) = shown_error(Field::Email) {
                                p { class: "field-error", "{message}" }
                            }
                        }
                    },
                    WizardStep::Payment => {
                        let amount = w.amount().unwrap_or_default();
                        match w.payment_method() {
                            Some(PaymentMethod::Pix) => rsx! { PixPayment { amount } },
                            Some(PaymentMethod::Crypto) => rsx! { CryptoPayment { amount } },
                            Some(PaymentMethod::Card) => rsx! { CardPayment {} },
                            None => rsx! {},
                        }
                    }
                }}
            }

            div { class: "wizard-nav",
                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    disabled: step == WizardStep::Amount,
                    onclick: move |_| {
                        wizard.write().previous();
                        thanks.set(None);
                    },
                    "Previous"
                }

                if step.is_last() {
                    button {
                        r#type: "button",
                        class: "btn btn-primary",
                        onclick: complete,
                        "Complete Donation"
                    }
                } else {
                    button {
                        r#type: "button",
                        class: "btn btn-primary",
                        disabled: !w.can_advance(),
                        onclick: go_next,
                        "Next"
                    }
                }
            }

            if let Some(name) = thanks() {
                p { class: "wizard-thanks", "Thank you, {name}! Your donation details have been recorded." }
            }
        }
    }
}
