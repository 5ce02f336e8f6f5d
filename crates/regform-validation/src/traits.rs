//! Core validation traits

use crate::error::RuleResult;
use serde_json::Value;

/// A single constraint over a text value. Implementations hold only
/// immutable configuration so one instance can serve concurrent callers.
pub trait ValidationRule: Send + Sync {
    /// Validate a single value belonging to `field`
    fn validate(&self, value: &str, field: &str) -> RuleResult;

    /// Get the validation rule name/type
    fn rule_name(&self) -> &'static str;

    /// Get validation rule parameters/configuration as JSON
    fn parameters(&self) -> Option<Value> {
        None
    }
}

impl<R: ValidationRule + ?Sized> ValidationRule for Box<R> {
    fn validate(&self, value: &str, field: &str) -> RuleResult {
        (**self).validate(value, field)
    }

    fn rule_name(&self) -> &'static str {
        (**self).rule_name()
    }

    fn parameters(&self) -> Option<Value> {
        (**self).parameters()
    }
}
