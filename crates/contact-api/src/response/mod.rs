//! Response types and error handling for API endpoints
//!
//! Every body leaves the server wrapped in the `WebResponse` envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contact_common::AppError;
use contact_core::ErrorKind;
use contact_service::dto::{Paged, WebResponse};
use contact_service::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// A path id that cannot name any entity
    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Invalid authorization header")]
    InvalidAuthFormat,

    #[error("No route for {0}")]
    RouteNotFound(String),

    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::App(e) => e.kind(),
            Self::Service(e) => e.kind(),
            Self::InvalidBody(_) => ErrorKind::BadRequest,
            Self::InvalidPath(_) | Self::RouteNotFound(_) => ErrorKind::NotFound,
            Self::MissingAuth | Self::InvalidAuthFormat => ErrorKind::Unauthorized,
            Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    pub fn invalid_path(msg: impl Into<String>) -> Self {
        Self::InvalidPath(msg.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let status = self.status_code();

        if kind.is_client_error() {
            warn!(error = %self, code = kind.code(), "Request rejected");
        } else {
            error!(error = ?self, code = kind.code(), "Server error occurred");
        }

        (status, Json(WebResponse::error(kind.message()))).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Successful response with `data` set to the payload
pub struct ApiJson<T>(pub T);

impl<T: Serialize> IntoResponse for ApiJson<T> {
    fn into_response(self) -> Response {
        Json(WebResponse::data(self.0)).into_response()
    }
}

/// Successful page of results with `paging` metadata
pub struct PagedJson<T>(pub Paged<T>);

impl<T: Serialize> IntoResponse for PagedJson<T> {
    fn into_response(self) -> Response {
        Json(WebResponse::paged(self.0)).into_response()
    }
}

/// Created response (201)
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
