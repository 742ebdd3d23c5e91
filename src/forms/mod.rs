//! Forms module
//!
//! Form submissions, their outcomes, and the handlers that connect
//! them to validation and storage.

pub mod handlers;
pub mod outcome;
pub mod submission;

pub use handlers::{
    MSG_LOGIN_OK, MSG_LOGIN_OK_PERSISTENT, MSG_REGISTRATION_OK, handle_login, handle_registration,
};
pub use outcome::SubmissionOutcome;
pub use submission::{
    FIELD_EMAIL, FIELD_PASSWORD, FIELD_PASSWORD_CHECK, FIELD_PERSIST, FIELD_TERMS, FIELD_USERNAME,
    FormSubmission,
};
