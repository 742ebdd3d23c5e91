//! Submission candidates
//!
//! Field values captured from a submission, normalized the way the rule
//! sets expect them: usernames trimmed, emails trimmed and lower-cased,
//! passwords left untouched.

/// Field values for a registration attempt, prior to validation.
#[derive(Debug, Clone)]
pub struct RegistrationCandidate {
    username: String,
    email: String,
    password: String,
    password_check: String,
    terms_accepted: bool,
}

impl RegistrationCandidate {
    /// Builds a candidate from raw field values, applying intake
    /// normalization. Passwords are deliberately not trimmed.
    pub fn new(
        username: &str,
        email: &str,
        password: &str,
        password_check: &str,
        terms_accepted: bool,
    ) -> Self {
        Self {
            username: username.trim().to_string(),
            email: email.trim().to_lowercase(),
            password: password.to_string(),
            password_check: password_check.to_string(),
            terms_accepted,
        }
    }

    /// The trimmed username, with the case the user typed.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The trimmed, lower-cased email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The password exactly as submitted.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The confirmation password exactly as submitted.
    pub fn password_check(&self) -> &str {
        &self.password_check
    }

    /// Whether the Terms of Use checkbox was ticked.
    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }
}

/// Field values for a login attempt, prior to validation.
#[derive(Debug, Clone)]
pub struct LoginCandidate {
    username: String,
    password: String,
    persist: bool,
}

impl LoginCandidate {
    /// Builds a candidate from raw field values. The username is
    /// trimmed and lower-cased for the case-insensitive lookup.
    pub fn new(username: &str, password: &str, persist: bool) -> Self {
        Self {
            username: username.trim().to_lowercase(),
            password: password.to_string(),
            persist,
        }
    }

    /// The trimmed, lower-cased username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The password exactly as submitted.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Whether the user asked to stay signed in.
    pub fn persist(&self) -> bool {
        self.persist
    }
}
