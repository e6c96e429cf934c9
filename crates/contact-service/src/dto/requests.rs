//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate`. Optional text
//! fields treat an empty string the same as an absent one; call
//! `normalize()` before `validate()`.

use serde::Deserialize;
use validator::Validate;

/// Turn `Some("")` into `None`
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

// ============================================================================
// User Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "id must be 1-100 characters"))]
    pub id: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "password must be 1-100 characters"))]
    pub password: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
}

/// User login request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginUserRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "id must be 1-100 characters"))]
    pub id: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "password must be 1-100 characters"))]
    pub password: String,
}

/// Update current user request; absent or empty fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(max = 100, message = "name must be at most 100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 100, message = "password must be at most 100 characters"))]
    pub password: Option<String>,
}

impl UpdateUserRequest {
    #[must_use]
    pub fn normalize(self) -> Self {
        Self {
            name: non_empty(self.name),
            password: non_empty(self.password),
        }
    }
}

// ============================================================================
// Contact Requests
// ============================================================================

/// Create contact request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateContactRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "first_name must be 1-100 characters"))]
    pub first_name: String,

    #[validate(length(max = 100, message = "last_name must be at most 100 characters"))]
    pub last_name: Option<String>,

    #[validate(
        length(max = 200, message = "email must be at most 200 characters"),
        email(message = "email must be a valid address")
    )]
    pub email: Option<String>,

    #[validate(length(max = 20, message = "phone must be at most 20 characters"))]
    pub phone: Option<String>,
}

impl CreateContactRequest {
    #[must_use]
    pub fn normalize(self) -> Self {
        Self {
            first_name: self.first_name,
            last_name: non_empty(self.last_name),
            email: non_empty(self.email),
            phone: non_empty(self.phone),
        }
    }
}

/// Update contact request; every mutable field is overwritten
pub type UpdateContactRequest = CreateContactRequest;

/// Contact search criteria, all optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl SearchContactRequest {
    #[must_use]
    pub fn normalize(self) -> Self {
        Self {
            name: non_empty(self.name),
            email: non_empty(self.email),
            phone: non_empty(self.phone),
            ..self
        }
    }
}

// ============================================================================
// Address Requests
// ============================================================================

/// Create address request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateAddressRequest {
    #[validate(length(max = 255, message = "street must be at most 255 characters"))]
    pub street: Option<String>,

    #[validate(length(max = 255, message = "city must be at most 255 characters"))]
    pub city: Option<String>,

    #[validate(length(max = 255, message = "province must be at most 255 characters"))]
    pub province: Option<String>,

    #[validate(length(max = 10, message = "postal_code must be at most 10 characters"))]
    pub postal_code: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "country must be 1-100 characters"))]
    pub country: String,
}

impl CreateAddressRequest {
    #[must_use]
    pub fn normalize(self) -> Self {
        Self {
            street: non_empty(self.street),
            city: non_empty(self.city),
            province: non_empty(self.province),
            postal_code: non_empty(self.postal_code),
            country: self.country,
        }
    }
}

/// Update address request; every mutable field is overwritten
pub type UpdateAddressRequest = CreateAddressRequest;
