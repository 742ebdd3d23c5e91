//! Validation engine
//!
//! Pure, ordered rule sets for registration and login. Each entry point
//! returns the first failing rule as a `ValidationError` naming the
//! field that should receive focus; all checks are synchronous and
//! total.

pub mod candidate;
pub mod field;
pub mod login;
pub mod patterns;
pub mod registration;

pub use candidate::{LoginCandidate, RegistrationCandidate};
pub use field::Field;
pub use login::{LoginSuccess, validate_login};
pub use registration::{
    MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH, is_valid_email, validate_registration,
};
