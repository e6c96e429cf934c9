//! Address handlers
//!
//! Addresses are nested under the contact that owns them.

use axum::extract::State;
use contact_service::dto::{AddressResponse, CreateAddressRequest, UpdateAddressRequest};
use contact_service::AddressService;
use uuid::Uuid;

use crate::extractors::{AddressPath, AuthUser, IdPath, JsonBody};
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

/// POST /api/contacts/{contact_id}/addresses
pub async fn create_address(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(contact_id): IdPath<Uuid>,
    JsonBody(request): JsonBody<CreateAddressRequest>,
) -> ApiResult<Created<ApiJson<AddressResponse>>> {
    let service = AddressService::new(state.service_context());
    let response = service.create(auth.identity(), contact_id, request).await?;
    Ok(Created(ApiJson(response)))
}

/// GET /api/contacts/{contact_id}/addresses
pub async fn list_addresses(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(contact_id): IdPath<Uuid>,
) -> ApiResult<ApiJson<Vec<AddressResponse>>> {
    let service = AddressService::new(state.service_context());
    let response = service.list(auth.identity(), contact_id).await?;
    Ok(ApiJson(response))
}

/// GET /api/contacts/{contact_id}/addresses/{address_id}
pub async fn get_address(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<AddressPath>,
) -> ApiResult<ApiJson<AddressResponse>> {
    let service = AddressService::new(state.service_context());
    let response = service
        .get(auth.identity(), path.contact_id, path.address_id)
        .await?;
    Ok(ApiJson(response))
}

/// PUT /api/contacts/{contact_id}/addresses/{address_id}
pub async fn update_address(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<AddressPath>,
    JsonBody(request): JsonBody<UpdateAddressRequest>,
) -> ApiResult<ApiJson<AddressResponse>> {
    let service = AddressService::new(state.service_context());
    let response = service
        .update(auth.identity(), path.contact_id, path.address_id, request)
        .await?;
    Ok(ApiJson(response))
}

/// DELETE /api/contacts/{contact_id}/addresses/{address_id}
pub async fn delete_address(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(path): IdPath<AddressPath>,
) -> ApiResult<ApiJson<bool>> {
    let service = AddressService::new(state.service_context());
    let response = service
        .delete(auth.identity(), path.contact_id, path.address_id)
        .await?;
    Ok(ApiJson(response))
}
