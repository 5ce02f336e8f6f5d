//! Declarative rule sets loaded from YAML or JSON documents
//!
//! ```yaml
//! fields:
//!   - field: name
//!     constraints:
//!       - kind: min_length
//!         min: 3
//!         message: "El nombre debe tener mínimo 3 caracteres"
//!       - kind: pattern
//!         pattern: '^[A-Za-z ]+$'
//!         message: "Solo se permiten letras y espacios"
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rules::{FieldRule, Rules};
use crate::validators::{EmailValidator, LengthValidator, LookaheadValidator, PatternValidator};

/// A complete rule set description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetConfig {
    pub fields: Vec<FieldRuleConfig>,
}

/// Constraint chain for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRuleConfig {
    pub field: String,
    pub constraints: Vec<ConstraintConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConstraintConfig {
    MinLength {
        min: usize,
        message: Option<String>,
    },
    MaxLength {
        max: usize,
        message: Option<String>,
    },
    Pattern {
        pattern: String,
        #[serde(default = "default_full_match")]
        full_match: bool,
        message: Option<String>,
    },
    Email {
        message: Option<String>,
    },
    ContainsAll {
        requirements: Vec<String>,
        message: Option<String>,
    },
}

fn default_full_match() -> bool {
    true
}

impl RuleSetConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compile into a rule set, rejecting empty or duplicate field names,
    /// fields without constraints and patterns that do not compile
    pub fn build(&self) -> Result<Rules, ConfigError> {
        let mut seen = HashSet::new();
        let mut rules = Rules::new();

        for field in &self.fields {
            if field.field.is_empty() {
                return Err(ConfigError::EmptyFieldName);
            }
            if !seen.insert(field.field.as_str()) {
                return Err(ConfigError::DuplicateField(field.field.clone()));
            }
            if field.constraints.is_empty() {
                return Err(ConfigError::NoConstraints(field.field.clone()));
            }

            rules = rules.with_field_rule(field.build()?);
        }

        tracing::debug!(fields = self.fields.len(), "built rule set from config");
        Ok(rules)
    }
}

impl FieldRuleConfig {
    fn build(&self) -> Result<FieldRule, ConfigError> {
        let mut rule = FieldRule::new(self.field.clone());

        for constraint in &self.constraints {
            rule = match constraint {
                ConstraintConfig::MinLength { min, message } => {
                    let mut validator = LengthValidator::new().min(*min);
                    if let Some(message) = message {
                        validator = validator.message(message.clone());
                    }
                    rule.constraint(validator)
                }
                ConstraintConfig::MaxLength { max, message } => {
                    let mut validator = LengthValidator::new().max(*max);
                    if let Some(message) = message {
                        validator = validator.message(message.clone());
                    }
                    rule.constraint(validator)
                }
                ConstraintConfig::Pattern {
                    pattern,
                    full_match,
                    message,
                } => {
                    let mut validator = PatternValidator::new(pattern)
                        .map_err(|e| ConfigError::invalid_pattern(&self.field, e))?
                        .full_match(*full_match);
                    if let Some(message) = message {
                        validator = validator.message(message.clone());
                    }
                    rule.constraint(validator)
                }
                ConstraintConfig::Email { message } => {
                    let mut validator = EmailValidator::new();
                    if let Some(message) = message {
                        validator = validator.message(message.clone());
                    }
                    rule.constraint(validator)
                }
                ConstraintConfig::ContainsAll {
                    requirements,
                    message,
                } => {
                    let mut validator = requirements
                        .iter()
                        .try_fold(LookaheadValidator::new(), |acc, r| acc.require(r))
                        .map_err(|e| ConfigError::invalid_pattern(&self.field, e))?;
                    if let Some(message) = message {
                        validator = validator.message(message.clone());
                    }
                    rule.constraint(validator)
                }
            };
        }

        Ok(rule)
    }
}

impl Rules {
    /// Build a rule set from a declarative description
    pub fn from_config(config: &RuleSetConfig) -> Result<Self, ConfigError> {
        config.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Record, SignupForm};
    use crate::signup::{self, validate_signup};

    const SIGNUP_YAML: &str = r#"
fields:
  - field: name
    constraints:
      - kind: min_length
        min: 3
        message: "El nombre debe tener mínimo 3 caracteres"
      - kind: pattern
        pattern: '^[A-Za-z\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+$'
        message: "Solo se permiten letras y espacios"
  - field: email
    constraints:
      - kind: email
        message: "Formato de correo inválido"
      - kind: pattern
        pattern: '(?-u)^[\w.-]+@[A-Za-z\d.-]+\.[A-Za-z]{2,}$'
        message: "Correo no válido"
  - field: password
    constraints:
      - kind: min_length
        min: 6
        message: "Mínimo 6 caracteres"
      - kind: contains_all
        requirements: ["[A-Z]", "[a-z]", "[0-9]", "[@$!%*?&]"]
        message: "Debe incluir mayúscula, minúscula, número y caracter especial (@$!%*?&)"
"#;

    #[test]
    fn test_yaml_rule_set_matches_builtin() {
        let rules = RuleSetConfig::from_yaml_str(SIGNUP_YAML).unwrap().build().unwrap();

        let samples = [
            ("Jo", "a@b.com", "Abcdef1!"),
            ("Juan Perez", "not-an-email", "Abcdef1!"),
            ("Juan Perez", "juan@mail.com", "abcdef1!"),
            ("Juan Perez", "juan@mail.com", "Abcdef1!"),
            ("Juan123", "o'brien@mail.com", "short"),
            ("Ana\u{FEFF}Maria", "juan@mail.com", "Ab1!\u{1F980}"),
            ("Ana\u{0085}Maria", "juan@mail.com", "Ab1!\u{1F980}"),
        ];

        for (name, email, password) in samples {
            let record: Record = SignupForm::new(name, email, password).into();
            assert_eq!(rules.validate(&record), validate_signup(&record));
        }
    }

    #[test]
    fn test_json_rule_set() {
        let json = r#"{"fields": [{"field": "code", "constraints": [
            {"kind": "max_length", "max": 4},
            {"kind": "pattern", "pattern": "[0-9]+", "full_match": false,
             "message": "needs a digit"}
        ]}]}"#;

        let rules = Rules::from_config(&RuleSetConfig::from_json_str(json).unwrap()).unwrap();

        assert_eq!(rules.validate_field("code", "ab12"), None);
        assert_eq!(rules.validate_field("code", "abcd").unwrap().message, "needs a digit");
        assert_eq!(rules.validate_field("code", "abcde").unwrap().code, "length_max");
    }

    #[test]
    fn test_invalid_configs() {
        let bad_pattern = r#"{"fields": [{"field": "x", "constraints": [
            {"kind": "pattern", "pattern": "("}
        ]}]}"#;
        let err = RuleSetConfig::from_json_str(bad_pattern).unwrap().build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPattern { ref field, .. } if field == "x"));

        let duplicate = r#"{"fields": [
            {"field": "x", "constraints": [{"kind": "email"}]},
            {"field": "x", "constraints": [{"kind": "email"}]}
        ]}"#;
        let err = RuleSetConfig::from_json_str(duplicate).unwrap().build().unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateField(ref f) if f == "x"));

        let empty_name = r#"{"fields": [{"field": "", "constraints": [{"kind": "email"}]}]}"#;
        assert!(matches!(
            RuleSetConfig::from_json_str(empty_name).unwrap().build(),
            Err(ConfigError::EmptyFieldName)
        ));

        let no_constraints = r#"{"fields": [{"field": "x", "constraints": []}]}"#;
        assert!(matches!(
            RuleSetConfig::from_json_str(no_constraints).unwrap().build(),
            Err(ConfigError::NoConstraints(_))
        ));

        assert!(matches!(
            RuleSetConfig::from_yaml_str("fields: [{kind: nope}]"),
            Err(ConfigError::Yaml(_))
        ));
        assert!(matches!(RuleSetConfig::from_json_str("{"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_builtin_constants_agree_with_yaml() {
        assert!(SIGNUP_YAML.contains(signup::NAME_PATTERN));
        assert!(SIGNUP_YAML.contains(signup::EMAIL_PATTERN));
        assert!(SIGNUP_YAML.contains(signup::MSG_PASSWORD_REQUIREMENTS));
    }
}
