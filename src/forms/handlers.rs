//! Form handlers
//!
//! Wires submissions to the validation engine and the credential
//! store. Handlers return the outcome the UI should display; a store
//! fault is not a form error and surfaces as `StoreError` instead.

use log::{info, warn};

use crate::error::StoreError;
use crate::forms::outcome::SubmissionOutcome;
use crate::forms::submission::{
    FIELD_EMAIL, FIELD_PASSWORD, FIELD_PASSWORD_CHECK, FIELD_PERSIST, FIELD_TERMS, FIELD_USERNAME,
    FormSubmission,
};
use crate::store::{CredentialStore, UserRecord};
use crate::validation::{
    LoginCandidate, RegistrationCandidate, validate_login, validate_registration,
};

/// Shown when a registration is accepted.
pub const MSG_REGISTRATION_OK: &str = "Registration successful!";
/// Shown when a login is accepted.
pub const MSG_LOGIN_OK: &str = "Login successful.";
/// Shown when a login with the persist flag is accepted.
pub const MSG_LOGIN_OK_PERSISTENT: &str = "Login successful (Persistent Login).";

/// Handles a registration form submission.
///
/// Validates the candidate against the store's current records and
/// appends a new record when every check passes. Returns `Err` only
/// when the store itself fails.
pub fn handle_registration(
    submission: &FormSubmission,
    store: &mut dyn CredentialStore,
) -> Result<SubmissionOutcome, StoreError> {
    // 1. Capture the candidate from the raw field values
    let candidate = RegistrationCandidate::new(
        submission.value(FIELD_USERNAME),
        submission.value(FIELD_EMAIL),
        submission.value(FIELD_PASSWORD),
        submission.value(FIELD_PASSWORD_CHECK),
        submission.flag(FIELD_TERMS),
    );

    // 2. Load existing records for the uniqueness check
    let records = store.load()?;
    let existing_usernames: Vec<String> = records.iter().map(|r| r.username.clone()).collect();

    // 3. Run the registration checks
    if let Err(error) = validate_registration(&candidate, &existing_usernames) {
        warn!(
            "Registration rejected for '{}': {}",
            candidate.username(),
            error
        );
        return Ok(SubmissionOutcome::from(error));
    }

    // 4. Append the new record
    let record = UserRecord {
        username: candidate.username().to_string(),
        email: candidate.email().to_string(),
        password: candidate.password().to_string(),
    };
    store.append(record)?;

    info!("Registered new user '{}'", candidate.username());
    Ok(SubmissionOutcome::ok(MSG_REGISTRATION_OK))
}

/// Handles a login form submission.
///
/// Checks the credentials against the store's records. Returns `Err`
/// only when the store itself fails.
pub fn handle_login(
    submission: &FormSubmission,
    store: &dyn CredentialStore,
) -> Result<SubmissionOutcome, StoreError> {
    // 1. Capture the candidate from the raw field values
    let candidate = LoginCandidate::new(
        submission.value(FIELD_USERNAME),
        submission.value(FIELD_PASSWORD),
        submission.flag(FIELD_PERSIST),
    );

    // 2. Load the records to check against
    let records = store.load()?;

    // 3. Run the login checks
    match validate_login(&candidate, &records) {
        Ok(success) => {
            if let Some(record) = store.find_by_username(candidate.username()) {
                info!("User '{}' logged in", record.username);
            }
            let message = if success.persistent {
                MSG_LOGIN_OK_PERSISTENT
            } else {
                MSG_LOGIN_OK
            };
            Ok(SubmissionOutcome::ok(message))
        }
        Err(error) => {
            warn!("Login rejected for '{}': {}", candidate.username(), error);
            Ok(SubmissionOutcome::from(error))
        }
    }
}
