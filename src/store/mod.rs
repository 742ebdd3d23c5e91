//! Credential storage
//!
//! An insertion-ordered sequence of user records behind a small
//! load/append/find contract, with file-backed and in-memory
//! implementations.

pub mod file;
pub mod memory;
pub mod record;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use record::UserRecord;

use crate::error::StoreError;

/// Ordered credential storage.
///
/// `append` never deduplicates; uniqueness is enforced by the
/// registration rule set before anything reaches the store.
pub trait CredentialStore {
    /// All records in insertion order; empty if nothing was ever
    /// persisted.
    fn load(&self) -> Result<Vec<UserRecord>, StoreError>;

    /// Appends a record and persists the updated sequence.
    fn append(&mut self, record: UserRecord) -> Result<(), StoreError>;

    /// The first record whose username matches case-insensitively.
    fn find_by_username(&self, name: &str) -> Option<UserRecord>;
}
