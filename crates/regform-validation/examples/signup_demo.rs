//! Registration form demo: validates sample submissions, or a JSON record
//! passed as the first argument, and prints what a form UI would show.
//!
//! ```text
//! RUST_LOG=regform_validation=debug cargo run --example signup_demo -- \
//!     '{"name": "Juan Perez", "email": "juan@mail.com", "password": "Abcdef1!"}'
//! ```

use regform_validation::{validate_signup, Record, SignupForm, SIGNUP_RULES};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let records: Vec<Record> = match std::env::args().nth(1) {
        Some(json) => vec![Record::from_json_str(&json)?],
        None => vec![
            SignupForm::new("Jo", "a@b.com", "Abcdef1!").into(),
            SignupForm::new("Juan Perez", "not-an-email", "Abcdef1!").into(),
            SignupForm::new("Juan Perez", "juan@mail.com", "abcdef1!").into(),
            SignupForm::new("Juan123", "juan@mail.com", "Abcdef1!").into(),
            SignupForm::new("Juan Perez", "juan@mail.com", "Abcdef1!").into(),
        ],
    };

    println!("Formulario con Regex");
    println!("====================\n");

    for record in &records {
        let result = validate_signup(record);

        for field in SIGNUP_RULES.get_validated_fields() {
            match result.message(field) {
                Some(message) => println!("  ❌ {:<9} {}", field, message),
                None => println!("  ✅ {:<9}", field),
            }
        }

        if result.is_valid() {
            println!("✅ Datos válidos:\n{}", serde_json::to_string_pretty(record)?);
        }
        println!();
    }

    Ok(())
}
