//! Error handling utilities for repositories

use contact_core::error::DomainError;
use sqlx::Error as SqlxError;
use uuid::Uuid;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

pub fn user_not_found(id: &str) -> DomainError {
    DomainError::UserNotFound(id.to_string())
}

pub fn contact_not_found(id: Uuid) -> DomainError {
    DomainError::ContactNotFound(id)
}

pub fn address_not_found(id: Uuid) -> DomainError {
    DomainError::AddressNotFound(id)
}
