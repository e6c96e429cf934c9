//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use contact_core::value_objects::PageRequest;

// ============================================================================
// Envelope
// ============================================================================

/// Uniform envelope wrapping every response body
#[derive(Debug, Serialize)]
pub struct WebResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging: Option<PageMetadata>,
}

impl<T> WebResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            data: Some(data),
            errors: None,
            paging: None,
        }
    }
}

impl<T> WebResponse<Vec<T>> {
    pub fn paged(page: Paged<T>) -> Self {
        Self {
            data: Some(page.items),
            errors: None,
            paging: Some(page.paging),
        }
    }
}

impl WebResponse<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            data: None,
            errors: Some(message.into()),
            paging: None,
        }
    }
}

/// Paging metadata of a search result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub page: i64,
    pub size: i64,
    pub total_item: i64,
    pub total_page: i64,
}

impl PageMetadata {
    pub fn new(request: PageRequest, total_item: i64) -> Self {
        Self {
            page: request.page(),
            size: request.size(),
            total_item,
            total_page: request.total_pages(total_item),
        }
    }
}

/// One page of items plus its metadata
#[derive(Debug)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub paging: PageMetadata,
}

// ============================================================================
// User Responses
// ============================================================================

/// User profile, never carrying the password or token
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Session token issued by login
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

// ============================================================================
// Contact Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub id: Uuid,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Address Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AddressResponse {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health of each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
