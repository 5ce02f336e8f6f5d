//! Email format validator

use crate::error::{RuleResult, ValidationError};
use crate::traits::ValidationRule;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// General email shape: a local part of word characters, apostrophes,
/// plus signs, dots and hyphens that does not end in a dot, then one or
/// more dot-terminated domain labels and an alphabetic TLD of two or more
/// letters. Leading and doubled dots are rejected separately.
const EMAIL_FORMAT: &str =
    r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@(?:[A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$";

static DEFAULT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_FORMAT).expect("email format pattern compiles"));

/// Validator for email address format
#[derive(Debug, Clone, Default)]
pub struct EmailValidator {
    /// Custom error message
    pub message: Option<String>,
}

impl EmailValidator {
    /// Create a new email validator with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom error message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn validate_email_format(&self, email: &str) -> bool {
        if email.starts_with('.') || email.contains("..") {
            return false;
        }

        DEFAULT_PATTERN.is_match(email)
    }
}

impl ValidationRule for EmailValidator {
    fn validate(&self, value: &str, field: &str) -> RuleResult {
        if !self.validate_email_format(value) {
            let message = self
                .message
                .clone()
                .unwrap_or_else(|| format!("{} must be a valid email address", field));

            return Err(ValidationError::with_code(field, message, "invalid_email"));
        }

        Ok(())
    }

    fn rule_name(&self) -> &'static str {
        "email"
    }

    fn parameters(&self) -> Option<Value> {
        self.message.as_ref().map(|msg| {
            serde_json::json!({
                "message": msg
            })
        })
    }
}
