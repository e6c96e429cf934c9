//! Test fixtures and data generators
//!
//! Request bodies sent by the tests and the shapes they read back.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    // The process id keeps runs against a shared database apart
    format!("{}{}", std::process::id(), COUNTER.fetch_add(1, Ordering::SeqCst))
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub id: String,
    pub password: String,
    pub name: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        Self {
            id: format!("user{}", unique_suffix()),
            password: "rahasia".to_string(),
            name: "Eko Khannedy".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub id: String,
    pub password: String,
}

impl From<&RegisterRequest> for LoginRequest {
    fn from(request: &RegisterRequest) -> Self {
        Self {
            id: request.id.clone(),
            password: request.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactRequest {
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ContactRequest {
    pub fn sample() -> Self {
        Self {
            first_name: "Eko".to_string(),
            last_name: Some("Khannedy".to_string()),
            email: Some("eko@example.com".to_string()),
            phone: Some("08999999999".to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AddressRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    pub country: String,
}

impl AddressRequest {
    pub fn sample() -> Self {
        Self {
            street: Some("Jalan Belum Jadi".to_string()),
            city: Some("Jakarta".to_string()),
            province: Some("DKI Jakarta".to_string()),
            postal_code: Some("343443".to_string()),
            country: "Indonesia".to_string(),
        }
    }
}

/// Response envelope
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub errors: Option<String>,
    pub paging: Option<Paging>,
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> Result<T> {
        self.data
            .ok_or_else(|| anyhow::anyhow!("Response without data: {:?}", self.errors))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Paging {
    pub page: i64,
    pub size: i64,
    pub total_item: i64,
    pub total_page: i64,
}

#[derive(Debug, Deserialize)]
pub struct UserBody {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct TokenBody {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct ContactBody {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddressBody {
    pub id: Uuid,
    pub street: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country: String,
}
