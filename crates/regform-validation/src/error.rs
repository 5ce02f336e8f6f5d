//! Validation error types and handling

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of running a single constraint against a single value
pub type RuleResult = Result<(), ValidationError>;

/// A failed constraint for a specific field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message, shown next to the input
    pub message: String,
    /// Error code for programmatic handling
    pub code: String,
}

impl ValidationError {
    /// Create a new validation error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: "validation_failed".to_string(),
        }
    }

    /// Create a validation error with a specific code
    pub fn with_code(
        field: impl Into<String>,
        message: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Failures collected from one validation call, at most one per field,
/// kept in rule-declaration order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Error)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Create a new empty validation errors collection
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record a field failure. A field that already failed keeps its
    /// first message.
    pub fn add(&mut self, error: ValidationError) {
        if !self.has_field_error(&error.field) {
            self.errors.push(error);
        }
    }

    /// Add a simple validation error with field and message
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.add(ValidationError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Get the error recorded for a specific field
    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn has_field_error(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }

    /// Convert to a JSON payload keyed by field name
    pub fn to_json(&self) -> serde_json::Value {
        let fields: serde_json::Map<String, serde_json::Value> = self
            .errors
            .iter()
            .map(|e| (e.field.clone(), serde_json::Value::String(e.message.clone())))
            .collect();

        serde_json::json!({
            "error": {
                "code": "validation_failed",
                "message": "Validation failed",
                "fields": fields
            }
        })
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            write!(f, "No validation errors")
        } else {
            write!(f, "Validation failed for {} field(s):", self.errors.len())?;
            for error in &self.errors {
                write!(f, "\n  {}: {}", error.field, error.message)?;
            }
            Ok(())
        }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        let mut errors = Self::new();
        errors.add(error);
        errors
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

/// Errors raised while building a rule set. These describe a broken
/// configuration, never a bad user value.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("Field name must not be empty")]
    EmptyFieldName,

    #[error("Field '{0}' is declared more than once")]
    DuplicateField(String),

    #[error("Field '{0}' declares no constraints")]
    NoConstraints(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    pub fn invalid_pattern(field: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            field: field.into(),
            source,
        }
    }
}
