//! Field validation for the donation wizard.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimum donor name length, counted in characters after trimming
pub const MIN_NAME_LEN: usize = 2;

const MAX_LOCAL_PART_LEN: usize = 64;

/// Dot-separated atoms, then two or more domain labels ending in an alphabetic TLD
const EMAIL_PATTERN: &str = concat!(
    r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
    r"@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$",
);

static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(compile_email_regex);

fn compile_email_regex() -> Option<Regex> {
    match Regex::new(EMAIL_PATTERN) {
        Ok(regex) => Some(regex),
        Err(e) => {
            tracing::error!(error = %e, "Email pattern failed to compile");
            None
        }
    }
}

/// Wizard field that can carry an inline error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Amount,
    PaymentMethod,
    Name,
    Email,
}

/// Inline messages for every field that failed validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<(Field, String)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    /// Record the error of a field check, if any
    pub fn check(&mut self, field: Field, result: Result<(), String>) {
        if let Err(message) = result {
            self.push(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for one field, for rendering under its input
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Field, String)> {
        self.errors.iter()
    }

    /// `Ok(())` when nothing failed
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|(_, m)| m.as_str()).collect();
        f.write_str(&messages.join("; "))
    }
}

/// A donation amount must be present, finite and strictly positive.
pub fn validate_amount(amount: Option<f64>) -> Result<f64, String> {
    match amount {
        Some(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err("Please enter a donation amount greater than zero".to_string()),
    }
}

pub fn validate_name(name: &str) -> Result<(), String> {
    if name.trim().chars().count() < MIN_NAME_LEN {
        return Err(format!("Name must be at least {} characters", MIN_NAME_LEN));
    }
    Ok(())
}

/// Syntactic email check: `local@label.label...tld`.
pub fn validate_email(email: &str) -> Result<(), String> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err("Please enter a valid email".to_string())
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some(regex) = EMAIL_REGEX.as_ref() else {
        return false;
    };
    let local_len = email.split_once('@').map_or(0, |(local, _)| local.len());
    local_len <= MAX_LOCAL_PART_LEN && regex.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount() {
        assert_eq!(validate_amount(Some(25.0)), Ok(25.0));
        assert_eq!(validate_amount(Some(0.01)), Ok(0.01));
        assert!(validate_amount(Some(0.0)).is_err());
        assert!(validate_amount(Some(-5.0)).is_err());
        assert!(validate_amount(Some(f64::NAN)).is_err());
        assert!(validate_amount(Some(f64::INFINITY)).is_err());
        assert!(validate_amount(None).is_err());
    }

    #[test]
    fn test_name() {
        assert!(validate_name("Jo").is_ok());
        assert!(validate_name("J").is_err());
        assert!(validate_name("  J  ").is_err());
        assert!(validate_name("Zé").is_ok());
    }

    #[test]
    fn test_valid_emails() {
        for email in ["skater@urbanskate.com", "a.b+donor@mail.co.uk", "x_y@sub-domain.org"] {
            assert!(validate_email(email).is_ok(), "{} should be valid", email);
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "plain",
            "@nolocal.com",
            "nodomain@",
            "two@@signs.com",
            "a@b@c.com",
            "space in@local.com",
            "dot@nodot",
            "dot@.leading.com",
            "dot@trailing.com.",
            "tld@short.c",
            "tld@numeric.123",
            ".start@x.com",
            "double..dot@x.com",
            "hyphen@-bad.com",
            "hyphen@bad-.com",
            "trailing.@x.com",
            "line@break.com\nnext@x.com",
        ] {
            assert!(validate_email(email).is_err(), "{} should be invalid", email);
        }
    }

    #[test]
    fn test_email_pattern_compiles() {
        assert!(EMAIL_REGEX.is_some());
    }

    #[test]
    fn test_local_part_length_limit() {
        let at_limit = format!("{}@x.com", "a".repeat(MAX_LOCAL_PART_LEN));
        let over_limit = format!("{}@x.com", "a".repeat(MAX_LOCAL_PART_LEN + 1));
        assert!(validate_email(&at_limit).is_ok());
        assert!(validate_email(&over_limit).is_err());
    }

    #[test]
    fn test_errors_lookup_and_display() {
        let mut errors = ValidationErrors::new();
        errors.check(Field::Name, validate_name("A"));
        errors.check(Field::Email, validate_email("bad"));
        errors.check(Field::Amount, validate_amount(Some(10.0)).map(|_| ()));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Email), Some("Please enter a valid email"));
        assert_eq!(errors.get(Field::Amount), None);
        assert_eq!(
            errors.to_string(),
            "Name must be at least 2 characters; Please enter a valid email"
        );
    }
}
