//! Ordered per-field constraint chains and the runner that evaluates them

use std::sync::Arc;

use crate::error::{ValidationError, ValidationErrors};
use crate::record::Record;
use crate::result::{FieldOutcome, ValidationResult};
use crate::traits::ValidationRule;

/// Constraints for one field, evaluated in declaration order
#[derive(Clone)]
pub struct FieldRule {
    field: String,
    constraints: Vec<Arc<dyn ValidationRule>>,
}

impl FieldRule {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            constraints: Vec::new(),
        }
    }

    /// Append a constraint to the chain
    pub fn constraint<R>(mut self, rule: R) -> Self
    where
        R: ValidationRule + 'static,
    {
        self.constraints.push(Arc::new(rule));
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn constraints(&self) -> &[Arc<dyn ValidationRule>] {
        &self.constraints
    }

    /// Run the chain, stopping at the first failing constraint
    pub fn check(&self, value: &str) -> Option<ValidationError> {
        for rule in &self.constraints {
            if let Err(error) = rule.validate(value, &self.field) {
                tracing::debug!(
                    field = %self.field,
                    rule = rule.rule_name(),
                    code = %error.code,
                    "field failed validation"
                );
                return Some(error);
            }
        }

        tracing::trace!(field = %self.field, "field passed validation");
        None
    }
}

impl std::fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldRule")
            .field("field", &self.field)
            .field(
                "constraints",
                &self.constraints.iter().map(|r| r.rule_name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// A rule set: one constraint chain per field, fields kept in the order
/// they were declared
#[derive(Clone, Default)]
pub struct Rules {
    fields: Vec<FieldRule>,
}

impl std::fmt::Debug for Rules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rules")
            .field("field_rule_count", &self.fields.len())
            .field("validated_fields", &self.get_validated_fields())
            .finish()
    }
}

impl Rules {
    /// Create a new empty rules collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a constraint to `field`'s chain, declaring the field if needed
    pub fn field<R>(mut self, field: impl Into<String>, rule: R) -> Self
    where
        R: ValidationRule + 'static,
    {
        let field = field.into();
        match self.fields.iter_mut().find(|f| f.field == field) {
            Some(existing) => existing.constraints.push(Arc::new(rule)),
            None => self.fields.push(FieldRule::new(field).constraint(rule)),
        }
        self
    }

    /// Append several constraints to `field`'s chain
    pub fn field_rules<R>(self, field: impl Into<String>, rules: Vec<R>) -> Self
    where
        R: ValidationRule + 'static,
    {
        let field = field.into();
        rules
            .into_iter()
            .fold(self, |acc, rule| acc.field(field.clone(), rule))
    }

    /// Add a fully built field chain. Replaces any chain already declared
    /// for the same field.
    pub fn with_field_rule(mut self, rule: FieldRule) -> Self {
        match self.fields.iter_mut().find(|f| f.field == rule.field) {
            Some(existing) => *existing = rule,
            None => self.fields.push(rule),
        }
        self
    }

    /// Get rules for a specific field
    pub fn get_field_rule(&self, field: &str) -> Option<&FieldRule> {
        self.fields.iter().find(|f| f.field == field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field_rule_count(&self) -> usize {
        self.fields.len()
    }

    /// Field names with validation rules, in declaration order
    pub fn get_validated_fields(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.field.as_str()).collect()
    }

    /// Evaluate every field chain against `record`.
    ///
    /// Fields are independent: a failure in one never stops the others.
    /// A field absent from the record is checked as an empty string and
    /// record entries without rules are ignored.
    pub fn validate(&self, record: &Record) -> ValidationResult {
        let mut result = ValidationResult::with_capacity(self.fields.len());

        for rule in &self.fields {
            let value = record.get(&rule.field).unwrap_or_default();
            let outcome = match rule.check(value) {
                Some(error) => FieldOutcome::invalid(error),
                None => FieldOutcome::valid(rule.field.clone()),
            };
            result.push(outcome);
        }

        tracing::debug!(
            fields = self.fields.len(),
            failed = result.error_count(),
            valid = result.is_valid(),
            "validated record"
        );
        result
    }

    /// Validate and collapse into accept/reject
    pub fn check(&self, record: &Record) -> Result<(), ValidationErrors> {
        self.validate(record).into_result()
    }

    /// Validate a single field, e.g. on keystroke or blur. Fields without
    /// rules always pass.
    pub fn validate_field(&self, field: &str, value: &str) -> Option<ValidationError> {
        self.get_field_rule(field).and_then(|rule| rule.check(value))
    }
}
