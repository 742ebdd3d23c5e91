//! Form fields
//!
//! Identifies which input a failed check points back at, so the UI
//! layer can move focus there.

use std::fmt;

/// A form field that can receive input focus after a failed check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Email,
    Password,
    PasswordCheck,
    Terms,
}

impl Field {
    /// The submission key this field is carried under.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
            Field::PasswordCheck => "password_check",
            Field::Terms => "terms",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
