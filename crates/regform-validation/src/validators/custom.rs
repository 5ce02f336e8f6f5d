//! Closure-backed validators

use crate::error::{RuleResult, ValidationError};
use crate::traits::ValidationRule;
use serde_json::Value;
use std::sync::Arc;

/// Predicate over a field value
pub type PredicateFn = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Custom validator pairing a user-defined predicate with an error message
#[derive(Clone)]
pub struct CustomValidator {
    /// Name/identifier for this custom validator
    pub name: String,
    predicate: PredicateFn,
    /// Custom error message
    pub message: Option<String>,
}

impl CustomValidator {
    /// Create a new custom validator; the predicate returns `true` for valid values
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
            message: None,
        }
    }

    /// Set custom error message
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Get the validator name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for CustomValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomValidator")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish()
    }
}

impl ValidationRule for CustomValidator {
    fn validate(&self, value: &str, field: &str) -> RuleResult {
        if (self.predicate)(value) {
            return Ok(());
        }

        let message = self
            .message
            .clone()
            .unwrap_or_else(|| format!("{} failed {} validation", field, self.name));

        Err(ValidationError::with_code(field, message, "custom"))
    }

    fn rule_name(&self) -> &'static str {
        "custom"
    }

    fn parameters(&self) -> Option<Value> {
        let mut params = serde_json::Map::new();

        params.insert("name".to_string(), Value::String(self.name.clone()));

        if let Some(ref message) = self.message {
            params.insert("message".to_string(), Value::String(message.clone()));
        }

        Some(Value::Object(params))
    }
}
