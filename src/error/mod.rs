//! Error handling
//!
//! Defines error types and conversions for credgate.

pub mod types;

pub use types::*;
