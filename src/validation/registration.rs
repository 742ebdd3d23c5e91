//! Registration rule set
//!
//! The ordered checks a registration candidate must pass. Evaluation
//! stops at the first failing check; the returned error carries the
//! user-facing message and the field to focus. The uniqueness check
//! runs before the character-set check, so a taken name is reported as
//! taken even when it is also malformed.

use crate::error::ValidationError;
use crate::validation::candidate::RegistrationCandidate;
use crate::validation::field::Field;
use crate::validation::patterns;

/// Minimum username length, in characters.
pub const MIN_USERNAME_LENGTH: usize = 4;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 12;

/// Email addresses ending in this literal suffix are rejected outright.
pub const BLOCKED_EMAIL_SUFFIX: &str = "example.com";

/// Substring no password may contain, compared case-insensitively.
const BLOCKED_PASSWORD_WORD: &str = "password";

/// Validates a registration candidate against the ordered rule set.
///
/// `existing_usernames` are the usernames already in the store; the
/// uniqueness check compares case-insensitively. The first failing
/// check wins; later checks are not evaluated.
pub fn validate_registration(
    candidate: &RegistrationCandidate,
    existing_usernames: &[String],
) -> Result<(), ValidationError> {
    let username = candidate.username();
    let username_lower = username.to_lowercase();

    // 1. Username presence
    if username.is_empty() {
        return Err(ValidationError::new(
            "Username cannot be blank",
            Field::Username,
        ));
    }

    // 2. Username length
    if username.chars().count() < MIN_USERNAME_LENGTH {
        return Err(ValidationError::new(
            "Username must be at least four characters long",
            Field::Username,
        ));
    }

    // 3. Username uniqueness
    if existing_usernames
        .iter()
        .any(|existing| existing.to_lowercase() == username_lower)
    {
        return Err(ValidationError::new(
            "That username is already taken",
            Field::Username,
        ));
    }

    // 4. Username character set
    if !patterns::USERNAME_RE.is_match(username) {
        return Err(ValidationError::new(
            "Username cannot contain special characters or whitespace",
            Field::Username,
        ));
    }

    // 5. Email presence
    let email = candidate.email();
    if email.is_empty() {
        return Err(ValidationError::new("Email cannot be blank", Field::Email));
    }

    // 6. Email shape, including the blocked suffix
    if !is_valid_email(email) {
        return Err(ValidationError::new(
            "Email must be a valid email address and not from example.com",
            Field::Email,
        ));
    }

    // 7. Password length
    let password = candidate.password();
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::new(
            "Password must be at least 12 characters long",
            Field::Password,
        ));
    }

    // 8. Mixed case
    if !patterns::has_uppercase(password) || !patterns::has_lowercase(password) {
        return Err(ValidationError::new(
            "Password must have at least one uppercase and one lowercase letter",
            Field::Password,
        ));
    }

    // 9. At least one digit
    if !patterns::has_digit(password) {
        return Err(ValidationError::new(
            "Password must contain at least one number",
            Field::Password,
        ));
    }

    // 10. At least one special character
    if !patterns::has_special(password) {
        return Err(ValidationError::new(
            "Password must contain at least one special character",
            Field::Password,
        ));
    }

    // 11. No embedded "password" and no embedded username
    let password_lower = password.to_lowercase();
    if password_lower.contains(BLOCKED_PASSWORD_WORD) || password_lower.contains(&username_lower) {
        return Err(ValidationError::new(
            "Password cannot contain the word \"password\" or the username",
            Field::Password,
        ));
    }

    // 12. Confirmation must match exactly
    if password != candidate.password_check() {
        return Err(ValidationError::new(
            "Passwords do not match",
            Field::PasswordCheck,
        ));
    }

    // 13. Terms of Use
    if !candidate.terms_accepted() {
        return Err(ValidationError::new(
            "You must accept the Terms of Use",
            Field::Terms,
        ));
    }

    Ok(())
}

/// An email is valid iff the pattern matches and the address does not
/// end with the blocked suffix. Candidates arrive lower-cased, so the
/// literal suffix comparison also catches `EXAMPLE.COM` variants.
pub fn is_valid_email(email: &str) -> bool {
    patterns::EMAIL_RE.is_match(email) && !email.ends_with(BLOCKED_EMAIL_SUFFIX)
}
