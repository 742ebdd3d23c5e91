//! File-backed credential store
//!
//! Persists the record sequence as a JSON array at a fixed path, the
//! whole file rewritten on every append. A missing file is an empty
//! store; a file that exists but does not parse is an error, never
//! silently treated as empty.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;

use crate::error::StoreError;
use crate::store::CredentialStore;
use crate::store::record::UserRecord;

/// JSON-file credential store with an in-memory mirror.
///
/// The mirror is loaded once at open time and lives for the life of the
/// process; `append` updates the mirror and rewrites the file. A failed
/// write rolls the mirror back so memory and disk stay in step.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    records: Vec<UserRecord>,
}

impl FileStore {
    /// Opens the store at `path`, loading existing records if the file
    /// is present.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let records = match fs::read_to_string(&path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|e| StoreError::Corrupt {
                    path: path.display().to_string(),
                    source: e,
                })?
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(StoreError::Io(e)),
        };

        info!(
            "Opened credential store at {} ({} records)",
            path.display(),
            records.len()
        );

        Ok(Self { path, records })
    }

    /// Path of the persisted file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no records are held.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rewrites the whole file from the mirror.
    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string(&self.records).map_err(StoreError::Serialize)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl CredentialStore for FileStore {
    fn load(&self) -> Result<Vec<UserRecord>, StoreError> {
        Ok(self.records.clone())
    }

    fn append(&mut self, record: UserRecord) -> Result<(), StoreError> {
        self.records.push(record);
        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }

        info!(
            "Persisted {} records to {}",
            self.records.len(),
            self.path.display()
        );
        Ok(())
    }

    fn find_by_username(&self, name: &str) -> Option<UserRecord> {
        self.records
            .iter()
            .find(|record| record.username_matches(name))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn record(username: &str) -> UserRecord {
        UserRecord {
            username: username.to_string(),
            email: format!("{}@mail.com", username.to_lowercase()),
            password: "Str0ng&Secret".to_string(),
        }
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path().join("registered_users.json")).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.load().unwrap(), vec![]);
    }

    #[test]
    fn test_append_persists_across_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("registered_users.json");

        let mut store = FileStore::open(&path).unwrap();
        store.append(record("alice")).unwrap();
        store.append(record("bob")).unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.len(), 2);
        let records = reopened.load().unwrap();
        assert_eq!(records[0].username, "alice");
        assert_eq!(records[1].username, "bob");
    }

    #[test]
    fn test_file_holds_a_json_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("registered_users.json");

        let mut store = FileStore::open(&path).unwrap();
        store.append(record("alice")).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let parsed: Vec<UserRecord> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].username, "alice");
    }

    #[test]
    fn test_parent_directory_is_created() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("registered_users.json");

        let mut store = FileStore::open(&path).unwrap();
        store.append(record("alice")).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_find_by_username_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::open(dir.path().join("users.json")).unwrap();
        store.append(record("Alice")).unwrap();

        let found = store.find_by_username("alice").unwrap();
        assert_eq!(found.username, "Alice");
        assert!(store.find_by_username("ALICE").is_some());
        assert!(store.find_by_username("bob").is_none());
    }

    #[test]
    fn test_append_never_deduplicates() {
        // Uniqueness is the validator's job; the store takes what it
        // is given
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::open(dir.path().join("users.json")).unwrap();
        store.append(record("alice")).unwrap();
        store.append(record("alice")).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("registered_users.json");
        fs::write(&path, "not json at all").unwrap();

        let err = FileStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }
}
