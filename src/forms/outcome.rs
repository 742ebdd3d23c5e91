//! Submission outcomes
//!
//! What the UI should show after a form is handled: either a success
//! message, or an error message with the field that should regain
//! focus.

use crate::error::ValidationError;
use crate::validation::Field;

/// The user-visible result of handling a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The form was accepted; show `message`.
    Ok { message: String },
    /// The form was rejected; show `message` and focus `field`.
    Error { message: String, field: Field },
}

impl SubmissionOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        SubmissionOutcome::Ok {
            message: message.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, SubmissionOutcome::Ok { .. })
    }
}

impl From<ValidationError> for SubmissionOutcome {
    fn from(error: ValidationError) -> Self {
        SubmissionOutcome::Error {
            message: error.message,
            field: error.field,
        }
    }
}
