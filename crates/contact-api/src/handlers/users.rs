//! User handlers
//!
//! Registration, login, and the caller's own profile.

use axum::extract::State;
use contact_service::dto::{
    LoginUserRequest, RegisterUserRequest, TokenResponse, UpdateUserRequest, UserResponse,
};
use contact_service::UserService;

use crate::extractors::{AuthUser, JsonBody};
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /api/users
pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterUserRequest>,
) -> ApiResult<Created<ApiJson<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(ApiJson(response)))
}

/// Log in and receive a session token
///
/// POST /api/users/_login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginUserRequest>,
) -> ApiResult<ApiJson<TokenResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(ApiJson(response))
}

/// Get current user
///
/// GET /api/users/_current
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<ApiJson<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.current(auth.identity()).await?;
    Ok(ApiJson(response))
}

/// Update current user
///
/// PATCH /api/users/_current
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(request): JsonBody<UpdateUserRequest>,
) -> ApiResult<ApiJson<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update(auth.identity(), request).await?;
    Ok(ApiJson(response))
}

/// Log out, revoking the current token
///
/// DELETE /api/users
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> ApiResult<ApiJson<bool>> {
    let service = UserService::new(state.service_context());
    let response = service.logout(auth.identity()).await?;
    Ok(ApiJson(response))
}
