//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

use super::ErrorKind;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Contact not found: {0}")]
    ContactNotFound(Uuid),

    #[error("Address not found: {0}")]
    AddressNotFound(Uuid),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("User already exists: {0}")]
    UserAlreadyExists(String),

    #[error("Duplicate record: {0}")]
    Duplicate(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Classify into the closed taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UserNotFound(_) | Self::ContactNotFound(_) | Self::AddressNotFound(_) => {
                ErrorKind::NotFound
            }
            Self::UserAlreadyExists(_) | Self::Duplicate(_) => ErrorKind::Conflict,
            Self::DatabaseError(_) => ErrorKind::Internal,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        self.kind() == ErrorKind::Conflict
    }
}
