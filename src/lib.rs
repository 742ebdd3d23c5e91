pub mod config;
pub mod console;
pub mod error;
pub mod forms;
pub mod store;
pub mod validation;

pub use forms::{FormSubmission, SubmissionOutcome, handle_login, handle_registration};
pub use store::{CredentialStore, FileStore, MemoryStore, UserRecord};
pub use validation::{validate_login, validate_registration};
