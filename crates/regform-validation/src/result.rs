//! Per-field outcome of one validation call

use serde::Serialize;

use crate::error::{ValidationError, ValidationErrors};

/// Outcome for one field: `None` means the value passed every constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldOutcome {
    pub field: String,
    pub message: Option<String>,
    #[serde(skip)]
    pub(crate) error: Option<ValidationError>,
}

impl FieldOutcome {
    pub(crate) fn valid(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: None,
            error: None,
        }
    }

    pub(crate) fn invalid(error: ValidationError) -> Self {
        Self {
            field: error.field.clone(),
            message: Some(error.message.clone()),
            error: Some(error),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.message.is_none()
    }

    /// The failed constraint, including its code
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }
}

/// Result of validating a record, with one outcome per declared field in
/// declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    fields: Vec<FieldOutcome>,
}

impl ValidationResult {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, outcome: FieldOutcome) {
        self.fields.push(outcome);
    }

    /// True iff no field carries a message
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(FieldOutcome::is_valid)
    }

    /// Message for `field`, or `None` if it passed or has no rules
    pub fn message(&self, field: &str) -> Option<&str> {
        self.outcome(field).and_then(|o| o.message.as_deref())
    }

    /// False only when the field was checked and failed
    pub fn is_field_valid(&self, field: &str) -> bool {
        self.message(field).is_none()
    }

    pub fn outcome(&self, field: &str) -> Option<&FieldOutcome> {
        self.fields.iter().find(|o| o.field == field)
    }

    pub fn outcomes(&self) -> &[FieldOutcome] {
        &self.fields
    }

    /// Failing fields with their messages
    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .filter_map(|o| o.message.as_deref().map(|m| (o.field.as_str(), m)))
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// Convert into the accept/reject form callers use on submit
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for outcome in self.fields {
            if let Some(error) = outcome.error {
                errors.add(error);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// JSON view for UIs: `{"valid": bool, "fields": {field: message|null}}`
    pub fn to_json(&self) -> serde_json::Value {
        let fields: serde_json::Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|o| {
                let message = o
                    .message
                    .clone()
                    .map_or(serde_json::Value::Null, serde_json::Value::String);
                (o.field.clone(), message)
            })
            .collect();

        serde_json::json!({
            "valid": self.is_valid(),
            "fields": fields
        })
    }
}
