//! Donation wizard: a four-step linear form.
//!
//! ```text
//! Amount ──▶ Method ──▶ Details ──▶ Payment
//!   ◀──────────◀───────────◀
//! ```
//!
//! Forward moves are gated by validation of the fields that step collects.
//! Backward moves are always allowed. The terminal step hands off to one of
//! the mocked payment views in [`crate::payment`].

mod validation;
mod wizard;

use serde::{Deserialize, Serialize};

pub use validation::{
    validate_amount, validate_email, validate_name, Field, ValidationErrors, MIN_NAME_LEN,
};
pub use wizard::{AmountSelection, DonationWizard, PRESET_AMOUNTS};

/// How the donor intends to pay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Pix,
    Crypto,
    Card,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "pix",
            PaymentMethod::Crypto => "crypto",
            PaymentMethod::Card => "card",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "PIX",
            PaymentMethod::Crypto => "Cryptocurrency",
            PaymentMethod::Card => "Credit Card",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PaymentMethod::Pix => "Instant payment via Brazilian PIX system",
            PaymentMethod::Crypto => "Pay with Bitcoin, Ethereum, or other cryptocurrencies",
            PaymentMethod::Card => "Pay securely with your credit or debit card",
        }
    }

    pub fn all() -> &'static [PaymentMethod] {
        &[PaymentMethod::Pix, PaymentMethod::Crypto, PaymentMethod::Card]
    }
}

/// Wizard position. Steps are numbered from 1 for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    #[default]
    Amount,
    Method,
    Details,
    Payment,
}

impl WizardStep {
    pub fn all() -> &'static [WizardStep] {
        &[
            WizardStep::Amount,
            WizardStep::Method,
            WizardStep::Details,
            WizardStep::Payment,
        ]
    }

    /// 1-based step number
    pub fn number(&self) -> usize {
        match self {
            WizardStep::Amount => 1,
            WizardStep::Method => 2,
            WizardStep::Details => 3,
            WizardStep::Payment => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Amount => "Amount",
            WizardStep::Method => "Method",
            WizardStep::Details => "Details",
            WizardStep::Payment => "Payment",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::Amount => "Choose donation amount",
            WizardStep::Method => "Select payment method",
            WizardStep::Details => "Enter your information",
            WizardStep::Payment => "Complete donation",
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Amount => Some(WizardStep::Method),
            WizardStep::Method => Some(WizardStep::Details),
            WizardStep::Details => Some(WizardStep::Payment),
            WizardStep::Payment => None,
        }
    }

    pub fn previous(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Amount => None,
            WizardStep::Method => Some(WizardStep::Amount),
            WizardStep::Details => Some(WizardStep::Method),
            WizardStep::Payment => Some(WizardStep::Details),
        }
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

/// Format a USD amount the way the site prints it: `100`, `12.50`.
pub fn format_usd(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

/// A fully validated donation, built at the terminal step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationDraft {
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub email: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_order() {
        let numbers: Vec<_> = WizardStep::all().iter().map(|s| s.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(WizardStep::Amount.next(), Some(WizardStep::Method));
        assert_eq!(WizardStep::Amount.previous(), None);
        assert!(WizardStep::Payment.is_last());
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(100.0), "100");
        assert_eq!(format_usd(12.5), "12.50");
        assert_eq!(format_usd(0.01), "0.01");
    }

    #[test]
    fn test_payment_method_serde() {
        let json = serde_json::to_string(&PaymentMethod::Pix).unwrap();
        assert_eq!(json, "\"pix\"");
        let parsed: PaymentMethod = serde_json::from_str("\"card\"").unwrap();
        assert_eq!(parsed, PaymentMethod::Card);
    }
}
