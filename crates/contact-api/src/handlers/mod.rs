//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod addresses;
pub mod contacts;
pub mod health;
pub mod users;

use axum::http::Uri;

use crate::response::ApiError;

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound(uri.path().to_string())
}
