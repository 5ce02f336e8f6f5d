//! Pattern-based validators using regular expressions

use crate::error::{RuleResult, ValidationError};
use crate::traits::ValidationRule;
use regex::Regex;
use serde_json::Value;

/// Validator for custom regular expression patterns
#[derive(Debug, Clone)]
pub struct PatternValidator {
    /// The regular expression as written
    pattern: Regex,
    /// Same expression wrapped in `^(?:...)$`
    anchored: Regex,
    /// Custom error message
    pub message: Option<String>,
    /// Whether the entire value must match (default) or any match is enough
    pub full_match: bool,
    /// Case-sensitive matching (default: true)
    pub case_sensitive: bool,
}

impl PatternValidator {
    /// Create a new pattern validator
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Self::compile(pattern, true)
    }

    /// Create a case-insensitive pattern validator
    pub fn new_case_insensitive(pattern: &str) -> Result<Self, regex::Error> {
        Self::compile(&format!("(?i){}", pattern), false)
    }

    /// Create a validator from an existing Regex
    pub fn from_regex(regex: Regex) -> Result<Self, regex::Error> {
        let anchored = Regex::new(&format!("^(?:{})$", regex.as_str()))?;
        Ok(Self {
            pattern: regex,
            anchored,
            message: None,
            full_match: true,
            case_sensitive: true,
        })
    }

    fn compile(pattern: &str, case_sensitive: bool) -> Result<Self, regex::Error> {
        let mut validator = Self::from_regex(Regex::new(pattern)?)?;
        validator.case_sensitive = case_sensitive;
        Ok(validator)
    }

    /// Set custom error message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set whether to match the full string or just find a match
    pub fn full_match(mut self, full_match: bool) -> Self {
        self.full_match = full_match;
        self
    }

    /// Get the pattern string
    pub fn pattern_string(&self) -> &str {
        self.pattern.as_str()
    }

    fn validate_pattern(&self, text: &str) -> bool {
        if self.full_match {
            self.anchored.is_match(text)
        } else {
            self.pattern.is_match(text)
        }
    }
}

impl ValidationRule for PatternValidator {
    fn validate(&self, value: &str, field: &str) -> RuleResult {
        if !self.validate_pattern(value) {
            let message = self
                .message
                .clone()
                .unwrap_or_else(|| format!("{} does not match the required pattern", field));

            return Err(ValidationError::with_code(field, message, "pattern_mismatch"));
        }

        Ok(())
    }

    fn rule_name(&self) -> &'static str {
        "pattern"
    }

    fn parameters(&self) -> Option<Value> {
        let mut params = serde_json::Map::new();

        params.insert(
            "pattern".to_string(),
            Value::String(self.pattern.as_str().to_string()),
        );
        params.insert("full_match".to_string(), Value::Bool(self.full_match));
        params.insert("case_sensitive".to_string(), Value::Bool(self.case_sensitive));

        if let Some(ref message) = self.message {
            params.insert("message".to_string(), Value::String(message.clone()));
        }

        Some(Value::Object(params))
    }
}
