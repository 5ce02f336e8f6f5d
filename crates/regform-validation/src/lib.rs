//! # regform-validation
//!
//! Field validation for registration forms. A rule set holds an ordered
//! chain of constraints per field; validating a record runs every chain,
//! stops each one at its first failure and reports at most one message per
//! field. Validation is pure: rule sets are immutable once built and can be
//! shared freely between threads.

pub mod config;
pub mod error;
pub mod record;
pub mod result;
pub mod rules;
pub mod signup;
pub mod traits;
pub mod validators;

pub use config::{ConstraintConfig, FieldRuleConfig, RuleSetConfig};
pub use error::{ConfigError, RuleResult, ValidationError, ValidationErrors};
pub use record::{Record, SignupForm};
pub use result::{FieldOutcome, ValidationResult};
pub use rules::{FieldRule, Rules};
pub use signup::{signup_rules, validate_signup, SIGNUP_RULES};
pub use traits::ValidationRule;

pub use validators::{
    custom::CustomValidator, email::EmailValidator, length::LengthValidator,
    lookahead::LookaheadValidator, pattern::PatternValidator,
};
