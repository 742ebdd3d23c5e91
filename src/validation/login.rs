//! Login rule set
//!
//! The ordered checks a login candidate must pass against the stored
//! records. Unknown usernames and wrong passwords fail with the same
//! message and the same focus field, so a caller cannot probe which
//! usernames exist.

use crate::error::ValidationError;
use crate::store::UserRecord;
use crate::validation::candidate::LoginCandidate;
use crate::validation::field::Field;

/// A successful login: whether the user asked to stay signed in.
///
/// The persist-flag changes only the acknowledgment text reported to
/// the user, nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginSuccess {
    pub persistent: bool,
}

/// Validates a login candidate against the stored records.
///
/// The username comparison is case-insensitive; the password comparison
/// is exact. The first failing check wins.
pub fn validate_login(
    candidate: &LoginCandidate,
    records: &[UserRecord],
) -> Result<LoginSuccess, ValidationError> {
    // 1. Username presence
    if candidate.username().is_empty() {
        return Err(ValidationError::new(
            "Username cannot be blank",
            Field::Username,
        ));
    }

    // 2. Anyone registered at all?
    if records.is_empty() {
        return Err(ValidationError::new(
            "No registered users found. Please register first.",
            Field::Username,
        ));
    }

    // 3. Username and password must both match one record; unknown user
    //    and wrong password answer identically
    let matched = records.iter().any(|record| {
        record.username_matches(candidate.username()) && record.password == candidate.password()
    });

    if matched {
        Ok(LoginSuccess {
            persistent: candidate.persist(),
        })
    } else {
        Err(ValidationError::new(
            "Invalid username or password",
            Field::Password,
        ))
    }
}
