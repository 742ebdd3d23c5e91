//! In-memory credential store
//!
//! Keeps records for the process lifetime only. Used by tests and by
//! callers that do not want persistence.

use crate::error::StoreError;
use crate::store::CredentialStore;
use crate::store::record::UserRecord;

/// Volatile credential store backed by a plain vector.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<UserRecord>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Creates a store pre-populated with `records`, in order.
    pub fn with_records(records: Vec<UserRecord>) -> Self {
        Self { records }
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no records are held.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> Result<Vec<UserRecord>, StoreError> {
        Ok(self.records.clone())
    }

    fn append(&mut self, record: UserRecord) -> Result<(), StoreError> {
        self.records.push(record);
        Ok(())
    }

    fn find_by_username(&self, name: &str) -> Option<UserRecord> {
        self.records
            .iter()
            .find(|record| record.username_matches(name))
            .cloned()
    }
}
