//! Wizard state and transitions.

use super::validation::{validate_amount, validate_email, validate_name, Field, ValidationErrors};
use super::{DonationDraft, PaymentMethod, WizardStep};
use crate::error::{SkateError, SkateResult};

/// Preset donation amounts in USD
pub const PRESET_AMOUNTS: [u32; 6] = [10, 25, 50, 100, 250, 500];

/// How the amount was chosen
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AmountSelection {
    #[default]
    None,
    /// One of [`PRESET_AMOUNTS`]
    Preset(u32),
    /// Free-form entry; `value` is `None` while the text does not parse
    Custom { input: String, value: Option<f64> },
}

impl AmountSelection {
    pub fn value(&self) -> Option<f64> {
        match self {
            AmountSelection::None => None,
            AmountSelection::Preset(amount) => Some(f64::from(*amount)),
            AmountSelection::Custom { value, .. } => *value,
        }
    }

    pub fn preset(&self) -> Option<u32> {
        match self {
            AmountSelection::Preset(amount) => Some(*amount),
            _ => None,
        }
    }

    /// Text for the custom amount input (empty unless a custom entry is active)
    pub fn custom_input(&self) -> &str {
        match self {
            AmountSelection::Custom { input, .. } => input,
            _ => "",
        }
    }
}

/// Transient state of one donation session.
///
/// Discarded when the donor navigates away; nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationWizard {
    step: WizardStep,
    amount: AmountSelection,
    payment_method: Option<PaymentMethod>,
    name: String,
    email: String,
}

impl DonationWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn amount_selection(&self) -> &AmountSelection {
        &self.amount
    }

    pub fn amount(&self) -> Option<f64> {
        self.amount.value()
    }

    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Pick a preset amount; clears any custom entry.
    pub fn select_preset(&mut self, amount: u32) {
        self.amount = AmountSelection::Preset(amount);
    }

    /// Type into the custom amount field; clears any preset.
    pub fn set_custom_amount(&mut self, input: impl Into<String>) {
        let input = input.into();
        let value = input.trim().parse::<f64>().ok().filter(|v| v.is_finite());
        self.amount = AmountSelection::Custom { input, value };
    }

    pub fn select_method(&mut self, method: PaymentMethod) {
        self.payment_method = Some(method);
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Errors for the fields collected on `step`
    pub fn validate_step(&self, step: WizardStep) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        match step {
            WizardStep::Amount => {
                errors.check(Field::Amount, validate_amount(self.amount()).map(|_| ()));
            }
            WizardStep::Method => {
                if self.payment_method.is_none() {
                    errors.push(Field::PaymentMethod, "Please select a payment method");
                }
            }
            WizardStep::Details => {
                errors.check(Field::Name, validate_name(&self.name));
                errors.check(Field::Email, validate_email(&self.email));
            }
            WizardStep::Payment => {}
        }
        errors.into_result()
    }

    /// Whether the "Next" button is enabled
    pub fn can_advance(&self) -> bool {
        !self.step().is_last() && self.validate_step(self.step()).is_ok()
    }

    /// Move forward one step if the current step validates.
    pub fn next(&mut self) -> SkateResult<WizardStep> {
        let current = self.step();
        let Some(target) = current.next() else {
            return Err(SkateError::InvalidTransition(
                "already at the payment step".to_string(),
            ));
        };
        if let Err(errors) = self.validate_step(current) {
            tracing::debug!(step = ?current, %errors, "Wizard step blocked");
            return Err(errors.into());
        }
        self.step = target;
        tracing::debug!(from = ?current, to = ?target, "Wizard advanced");
        Ok(target)
    }

    /// Move back one step. Always allowed; stays put on the first step.
    pub fn previous(&mut self) -> WizardStep {
        let current = self.step();
        if let Some(target) = current.previous() {
            self.step = target;
            tracing::debug!(from = ?current, to = ?target, "Wizard went back");
        }
        self.step()
    }

    /// The draft, if every field validates
    pub fn draft(&self) -> Result<DonationDraft, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let amount = validate_amount(self.amount());
        if let Err(message) = &amount {
            errors.push(Field::Amount, message.clone());
        }
        if self.payment_method.is_none() {
            errors.push(Field::PaymentMethod, "Please select a payment method");
        }
        errors.check(Field::Name, validate_name(&self.name));
        errors.check(Field::Email, validate_email(&self.email));

        match (amount, self.payment_method) {
            (Ok(amount), Some(payment_method)) if errors.is_empty() => Ok(DonationDraft {
                amount,
                payment_method,
                email: self.email.clone(),
                name: self.name.trim().to_string(),
            }),
            _ => Err(errors),
        }
    }

    /// Placeholder submission at the payment step.
    ///
    /// Builds and logs the draft; no service is called.
    pub fn submit(&self) -> SkateResult<DonationDraft> {
        if self.step() != WizardStep::Payment {
            return Err(SkateError::InvalidTransition(format!(
                "cannot submit from the {} step",
                self.step().title()
            )));
        }
        let draft = self.draft()?;
        tracing::info!(
            amount = draft.amount,
            method = draft.payment_method.as_str(),
            email = %draft.email,
            name = %draft.name,
            "Donation submitted"
        );
        Ok(draft)
    }
}
