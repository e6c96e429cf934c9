//! Authentication extractor
//!
//! Resolves the session token in the Authorization header to a user.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use contact_core::AuthenticatedIdentity;
use contact_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Authenticated caller
///
/// A handler that takes `AuthUser` never runs for an anonymous request.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthenticatedIdentity);

impl AuthUser {
    pub fn identity(&self) -> &AuthenticatedIdentity {
        &self.0
    }

    pub fn user_id(&self) -> &str {
        &self.0.user_id
    }
}

/// Token carried by an Authorization header value, raw or `Bearer <token>`
pub fn bearer_token(value: &str) -> &str {
    value.strip_prefix(BEARER_PREFIX).unwrap_or(value).trim()
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(ApiError::MissingAuth)?
            .to_str()
            .map_err(|_| ApiError::InvalidAuthFormat)?;

        let token = bearer_token(value);
        if token.is_empty() {
            return Err(ApiError::InvalidAuthFormat);
        }

        let app_state = AppState::from_ref(state);
        let identity = AuthService::new(app_state.service_context())
            .authenticate(token)
            .await?;

        Ok(AuthUser(identity))
    }
}
