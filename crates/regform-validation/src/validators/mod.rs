//! Built-in constraint validators

pub mod custom;
pub mod email;
pub mod length;
pub mod lookahead;
pub mod pattern;

pub use custom::CustomValidator;
pub use email::EmailValidator;
pub use length::LengthValidator;
pub use lookahead::LookaheadValidator;
pub use pattern::PatternValidator;
