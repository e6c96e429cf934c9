//! User entity - an account that owns contacts

use chrono::{DateTime, Utc};

/// User account.
///
/// The password hash and session token are deliberately not part of the
/// entity; repositories expose them through dedicated methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Caller-chosen unique identifier
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the display name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.touch();
    }

    /// Bump the update timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
