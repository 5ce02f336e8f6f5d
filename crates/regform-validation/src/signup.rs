//! The registration form rule set: name, email and password

use once_cell::sync::Lazy;

use crate::error::ConfigError;
use crate::record::Record;
use crate::result::ValidationResult;
use crate::rules::{FieldRule, Rules};
use crate::validators::{EmailValidator, LengthValidator, LookaheadValidator, PatternValidator};

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PASSWORD: &str = "password";

pub const NAME_MIN_LENGTH: usize = 3;
pub const PASSWORD_MIN_LENGTH: usize = 6;

/// Letters and whitespace only, whole value. Whitespace is the browser's
/// `\s` set (includes U+FEFF, excludes U+0085), which differs from the
/// Unicode `White_Space` property behind `\s` here.
pub const NAME_PATTERN: &str = concat!(
    r"^[A-Za-z",
    r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}",
    r"\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}",
    r"]+$",
);
/// ASCII `\w` and `\d`
pub const EMAIL_PATTERN: &str = r"(?-u)^[\w.-]+@[A-Za-z\d.-]+\.[A-Za-z]{2,}$";
/// Uppercase, lowercase, digit, special
pub const PASSWORD_REQUIREMENTS: [&str; 4] = ["[A-Z]", "[a-z]", "[0-9]", "[@$!%*?&]"];

pub const MSG_NAME_TOO_SHORT: &str = "El nombre debe tener mínimo 3 caracteres";
pub const MSG_NAME_CHARSET: &str = "Solo se permiten letras y espacios";
pub const MSG_EMAIL_FORMAT: &str = "Formato de correo inválido";
pub const MSG_EMAIL_PATTERN: &str = "Correo no válido";
pub const MSG_PASSWORD_TOO_SHORT: &str = "Mínimo 6 caracteres";
pub const MSG_PASSWORD_REQUIREMENTS: &str =
    "Debe incluir mayúscula, minúscula, número y caracter especial (@$!%*?&)";

/// Shared, read-only instance of [`signup_rules`]
pub static SIGNUP_RULES: Lazy<Rules> =
    Lazy::new(|| signup_rules().expect("registration form patterns compile"));

/// Build the registration form rule set
pub fn signup_rules() -> Result<Rules, ConfigError> {
    let name = FieldRule::new(FIELD_NAME)
        .constraint(
            LengthValidator::new()
                .min(NAME_MIN_LENGTH)
                .message(MSG_NAME_TOO_SHORT),
        )
        .constraint(
            PatternValidator::new(NAME_PATTERN)
                .map_err(|e| ConfigError::invalid_pattern(FIELD_NAME, e))?
                .message(MSG_NAME_CHARSET),
        );

    let email = FieldRule::new(FIELD_EMAIL)
        .constraint(EmailValidator::new().message(MSG_EMAIL_FORMAT))
        .constraint(
            PatternValidator::new(EMAIL_PATTERN)
                .map_err(|e| ConfigError::invalid_pattern(FIELD_EMAIL, e))?
                .message(MSG_EMAIL_PATTERN),
        );

    let requirements = PASSWORD_REQUIREMENTS
        .iter()
        .try_fold(LookaheadValidator::new(), |acc, fragment| acc.require(fragment))
        .map_err(|e| ConfigError::invalid_pattern(FIELD_PASSWORD, e))?
        .message(MSG_PASSWORD_REQUIREMENTS);

    let password = FieldRule::new(FIELD_PASSWORD)
        .constraint(
            LengthValidator::new()
                .min(PASSWORD_MIN_LENGTH)
                .message(MSG_PASSWORD_TOO_SHORT),
        )
        .constraint(requirements);

    Ok(Rules::new()
        .with_field_rule(name)
        .with_field_rule(email)
        .with_field_rule(password))
}

/// Validate a registration record against [`SIGNUP_RULES`]
pub fn validate_signup(record: &Record) -> ValidationResult {
    SIGNUP_RULES.validate(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SignupForm;

    fn validate(name: &str, email: &str, password: &str) -> ValidationResult {
        validate_signup(&SignupForm::new(name, email, password).into())
    }

    fn message_for(field: &str, name: &str, email: &str, password: &str) -> Option<String> {
        validate(name, email, password).message(field).map(str::to_owned)
    }

    #[test]
    fn test_rule_set_builds() {
        let rules = signup_rules().unwrap();
        assert_eq!(rules.get_validated_fields(), vec!["name", "email", "password"]);
        for field in rules.get_validated_fields() {
            assert_eq!(rules.get_field_rule(field).unwrap().constraints().len(), 2);
        }
    }

    #[test]
    fn test_name_constraints() {
        let name = |value| message_for(FIELD_NAME, value, "a@b.com", "Abcdef1!");

        assert_eq!(name("").as_deref(), Some(MSG_NAME_TOO_SHORT));
        assert_eq!(name("J1").as_deref(), Some(MSG_NAME_TOO_SHORT));
        assert_eq!(name("Ana").as_deref(), None);
        assert_eq!(name("José").as_deref(), Some(MSG_NAME_CHARSET));
        assert_eq!(name("   ").as_deref(), None);
        assert_eq!(name("Ana-Maria").as_deref(), Some(MSG_NAME_CHARSET));
    }

    #[test]
    fn test_name_whitespace_matches_browser_set() {
        let name = |value| message_for(FIELD_NAME, value, "a@b.com", "Abcdef1!");

        assert_eq!(name("Ana\u{FEFF}Maria").as_deref(), None);
        assert_eq!(name("Ana\u{00A0}Maria").as_deref(), None);
        assert_eq!(name("Ana\u{3000}Maria").as_deref(), None);
        assert_eq!(name("Ana\u{0085}Maria").as_deref(), Some(MSG_NAME_CHARSET));
        assert_eq!(name("Ana\u{180E}Maria").as_deref(), Some(MSG_NAME_CHARSET));
    }

    #[test]
    fn test_email_constraints() {
        let email = |value| message_for(FIELD_EMAIL, "Juan", value, "Abcdef1!");

        assert_eq!(email("").as_deref(), Some(MSG_EMAIL_FORMAT));
        assert_eq!(email("juan@mail").as_deref(), Some(MSG_EMAIL_FORMAT));
        // accepted by the general format check, rejected by the stricter pattern
        assert_eq!(email("o'brien@mail.com").as_deref(), Some(MSG_EMAIL_PATTERN));
        assert_eq!(email("juan+tag@mail.com").as_deref(), Some(MSG_EMAIL_PATTERN));
        assert_eq!(email("juan.perez-1@mail.co").as_deref(), None);
    }

    #[test]
    fn test_password_constraints() {
        let password = |value| message_for(FIELD_PASSWORD, "Juan", "a@b.com", value);

        assert_eq!(password("").as_deref(), Some(MSG_PASSWORD_TOO_SHORT));
        assert_eq!(password("Ab1!").as_deref(), Some(MSG_PASSWORD_TOO_SHORT));
        assert_eq!(password("abcdef1!").as_deref(), Some(MSG_PASSWORD_REQUIREMENTS));
        assert_eq!(password("Abcdefg!").as_deref(), Some(MSG_PASSWORD_REQUIREMENTS));
    }

    #[test]
    fn test_lengths_count_utf16_units() {
        // 4 chars, 6 units
        assert_eq!(validate("Juan", "a@b.com", "Ab1!\u{1F980}").message("password"), None);
        // 2 chars, 4 units: long enough, wrong charset
        assert_eq!(
            validate("\u{1F980}\u{1F980}", "a@b.com", "Abcdef1!").message("name"),
            Some(MSG_NAME_CHARSET)
        );
    }

    #[test]
    fn test_password_accepts_characters_outside_required_classes() {
        assert!(validate("Juan", "a@b.com", "Ab1! ~#^ñ").is_valid());
        assert!(validate("Juan", "a@b.com", "Ab1!Ab1!Ab1!Ab1!Ab1!Ab1!Ab1!Ab1!").is_valid());
    }

    #[test]
    fn test_signup_rules_instance_is_shared() {
        assert!(std::ptr::eq(&*SIGNUP_RULES, &*SIGNUP_RULES));
        assert_eq!(SIGNUP_RULES.field_rule_count(), 3);
    }
}
