//! Credential records
//!
//! The stored user record and its serialized shape.

use serde::{Deserialize, Serialize};

/// A registered user: the username as typed at registration, the
/// normalized email, and the password as submitted.
///
/// Passwords are stored in plain text - in production this would be a
/// salted hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserRecord {
    /// Case-insensitive username comparison, the contract every lookup
    /// in the system uses.
    pub fn username_matches(&self, name: &str) -> bool {
        self.username.to_lowercase() == name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_matches_ignores_case() {
        let record = UserRecord {
            username: "Alice".to_string(),
            email: "alice@mail.com".to_string(),
            password: "Str0ng&Secret".to_string(),
        };
        assert!(record.username_matches("alice"));
        assert!(record.username_matches("ALICE"));
        assert!(!record.username_matches("alicia"));
    }

    #[test]
    fn test_serialized_shape() {
        let record = UserRecord {
            username: "alice".to_string(),
            email: "alice@mail.com".to_string(),
            password: "Str0ng&Secret".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"username":"alice","email":"alice@mail.com","password":"Str0ng&Secret"}"#
        );
    }
}
