//! Error types
//!
//! Defines domain-specific error types for each module of credgate.

use std::fmt;
use std::io;

use crate::validation::Field;

/// A failed validation rule: the message shown to the user and the form
/// field that should receive input focus.
///
/// Every validation failure is recoverable by the user (fix the field
/// and resubmit); none is a system fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
    pub field: Field,
}

impl ValidationError {
    pub fn new(message: impl Into<String>, field: Field) -> Self {
        Self {
            message: message.into(),
            field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Credential store errors
///
/// Store reads and writes are the only fallible I/O in the system.
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Serialize(serde_json::Error),
    Corrupt { path: String, source: serde_json::Error },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "I/O error: {}", e),
            StoreError::Serialize(e) => {
                write!(f, "Failed to serialize credential records: {}", e)
            }
            StoreError::Corrupt { path, source } => {
                write!(f, "Corrupt credential file {}: {}", path, source)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(error: io::Error) -> Self {
        StoreError::Io(error)
    }
}

/// General application error that encompasses all error types
#[derive(Debug)]
pub enum AppError {
    Config(config::ConfigError),
    Store(StoreError),
    Io(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Store(e) => write!(f, "Credential store error: {}", e),
            AppError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

// Implement conversions from specific errors to AppError
impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        AppError::Store(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::Io(error)
    }
}
