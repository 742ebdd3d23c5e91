//! Form submissions
//!
//! A submission is the set of named field values captured by whatever
//! UI collected them: console, web, or a test harness. Each form
//! carries a fixed set of field names.

use std::collections::HashMap;

/// Registration and login both carry this field.
pub const FIELD_USERNAME: &str = "username";
/// Registration-only field.
pub const FIELD_EMAIL: &str = "email";
/// Registration and login both carry this field.
pub const FIELD_PASSWORD: &str = "password";
/// Registration-only field: the confirmation password.
pub const FIELD_PASSWORD_CHECK: &str = "password_check";
/// Registration-only field: the Terms of Use checkbox.
pub const FIELD_TERMS: &str = "terms";
/// Login-only field: the "remember this login" flag.
pub const FIELD_PERSIST: &str = "persist";

/// Named field values for one submission.
#[derive(Debug, Clone, Default)]
pub struct FormSubmission {
    fields: HashMap<String, String>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Sets a field value, replacing any previous one.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_string(), value.into());
    }

    /// Builder-style `set`, for constructing submissions inline.
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// The raw value of a field; an absent field reads as empty, the
    /// same as an untouched form input.
    pub fn value(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or("")
    }

    /// A checkbox-style field: present and truthy.
    pub fn flag(&self, name: &str) -> bool {
        matches!(
            self.value(name).trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "y" | "on" | "1"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_field_reads_as_empty() {
        let submission = FormSubmission::new();
        assert_eq!(submission.value(FIELD_USERNAME), "");
        assert!(!submission.flag(FIELD_TERMS));
    }

    #[test]
    fn test_set_and_with_agree() {
        let mut a = FormSubmission::new();
        a.set(FIELD_USERNAME, "alice");
        let b = FormSubmission::new().with(FIELD_USERNAME, "alice");
        assert_eq!(a.value(FIELD_USERNAME), b.value(FIELD_USERNAME));
    }

    #[test]
    fn test_flag_accepts_common_truthy_spellings() {
        for value in ["true", "YES", "y", "On", "1", " y "] {
            let submission = FormSubmission::new().with(FIELD_PERSIST, value);
            assert!(submission.flag(FIELD_PERSIST), "{value:?} should be truthy");
        }
        for value in ["", "no", "n", "false", "0", "maybe"] {
            let submission = FormSubmission::new().with(FIELD_PERSIST, value);
            assert!(!submission.flag(FIELD_PERSIST), "{value:?} should be falsy");
        }
    }

    #[test]
    fn test_values_are_kept_raw() {
        let submission = FormSubmission::new().with(FIELD_PASSWORD, "  spaces kept  ");
        assert_eq!(submission.value(FIELD_PASSWORD), "  spaces kept  ");
    }
}
