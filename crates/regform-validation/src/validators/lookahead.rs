//! Validator requiring several character classes to appear in a value

use crate::error::{RuleResult, ValidationError};
use crate::traits::ValidationRule;
use regex::Regex;
use serde_json::Value;

/// Any character a line-oriented `.` would consume
const LINE_PREFIX: &str = r"^[^\n\r\x{2028}\x{2029}]*";

#[derive(Debug, Clone)]
struct Requirement {
    source: String,
    regex: Regex,
}

/// Passes when every requirement occurs somewhere in the value, searching
/// from the start up to the first line break. Equivalent to a chain of
/// `^(?=.*X)` lookaheads: the overall length is not bounded and characters
/// outside the required classes are allowed.
#[derive(Debug, Clone, Default)]
pub struct LookaheadValidator {
    requirements: Vec<Requirement>,
    /// Custom error message
    pub message: Option<String>,
}

impl LookaheadValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a requirement, given as a regex fragment such as `[A-Z]`
    pub fn require(mut self, fragment: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("{}(?:{})", LINE_PREFIX, fragment))?;
        self.requirements.push(Requirement {
            source: fragment.to_string(),
            regex,
        });
        Ok(self)
    }

    /// Set custom error message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The requirement fragments, in the order they were added
    pub fn requirements(&self) -> impl Iterator<Item = &str> {
        self.requirements.iter().map(|r| r.source.as_str())
    }

    fn first_missing(&self, value: &str) -> Option<&Requirement> {
        self.requirements.iter().find(|r| !r.regex.is_match(value))
    }
}

impl ValidationRule for LookaheadValidator {
    fn validate(&self, value: &str, field: &str) -> RuleResult {
        if let Some(missing) = self.first_missing(value) {
            let message = self.message.clone().unwrap_or_else(|| {
                format!("{} must contain a character matching {}", field, missing.source)
            });

            return Err(ValidationError::with_code(field, message, "missing_requirement"));
        }

        Ok(())
    }

    fn rule_name(&self) -> &'static str {
        "lookahead"
    }

    fn parameters(&self) -> Option<Value> {
        let mut params = serde_json::Map::new();

        params.insert(
            "requirements".to_string(),
            Value::Array(
                self.requirements()
                    .map(|r| Value::String(r.to_string()))
                    .collect(),
            ),
        );
        if let Some(ref message) = self.message {
            params.insert("message".to_string(), Value::String(message.clone()));
        }

        Some(Value::Object(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strong() -> LookaheadValidator {
        LookaheadValidator::new()
            .require("[A-Z]")
            .and_then(|v| v.require("[a-z]"))
            .and_then(|v| v.require("[0-9]"))
            .and_then(|v| v.require("[@$!%*?&]"))
            .unwrap()
    }

    #[test]
    fn test_all_requirements_present() {
        let validator = strong();
        assert!(validator.validate("Abcdef1!", "password").is_ok());
        assert!(validator.validate("!1aA", "password").is_ok());
    }

    #[test]
    fn test_each_missing_requirement_fails() {
        let validator = strong();
        for value in ["abcdef1!", "ABCDEF1!", "Abcdefg!", "Abcdefg1"] {
            let error = validator.validate(value, "password").unwrap_err();
            assert_eq!(error.code, "missing_requirement", "{}", value);
        }
    }

    #[test]
    fn test_other_characters_are_permitted() {
        let validator = strong();
        assert!(validator.validate("Ab1! with spaces ~ ^ ñ", "password").is_ok());
        assert!(validator.validate("#Ab1@#", "password").is_ok());
    }

    #[test]
    fn test_requirements_stop_at_line_break() {
        let validator = strong();
        assert!(validator.validate("Abc1\n!", "password").is_err());
        assert!(validator.validate("Abc1!\nrest", "password").is_ok());
        assert!(validator.validate("Abc1\u{2028}!", "password").is_err());
    }

    #[test]
    fn test_default_message_names_first_missing() {
        let error = strong().validate("ABC1!", "password").unwrap_err();
        assert_eq!(error.message, "password must contain a character matching [a-z]");

        let custom = strong().message("custom");
        assert_eq!(custom.validate("x", "password").unwrap_err().message, "custom");
    }

    #[test]
    fn test_parameters_list_requirements() {
        let params = strong().parameters().unwrap();
        assert_eq!(params["requirements"][3], "[@$!%*?&]");
    }
}
