//! Contact handlers

use axum::extract::State;
use contact_service::dto::{ContactResponse, CreateContactRequest, UpdateContactRequest};
use contact_service::ContactService;
use uuid::Uuid;

use crate::extractors::{AuthUser, IdPath, JsonBody, SearchParams};
use crate::response::{ApiJson, ApiResult, Created, PagedJson};
use crate::state::AppState;

/// POST /api/contacts
pub async fn create_contact(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(request): JsonBody<CreateContactRequest>,
) -> ApiResult<Created<ApiJson<ContactResponse>>> {
    let service = ContactService::new(state.service_context());
    let response = service.create(auth.identity(), request).await?;
    Ok(Created(ApiJson(response)))
}

/// GET /api/contacts?name&email&phone&page&size
pub async fn search_contacts(
    State(state): State<AppState>,
    auth: AuthUser,
    SearchParams(request): SearchParams,
) -> ApiResult<PagedJson<ContactResponse>> {
    let service = ContactService::new(state.service_context());
    let page = service.search(auth.identity(), request).await?;
    Ok(PagedJson(page))
}

/// GET /api/contacts/{contact_id}
pub async fn get_contact(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(contact_id): IdPath<Uuid>,
) -> ApiResult<ApiJson<ContactResponse>> {
    let service = ContactService::new(state.service_context());
    let response = service.get(auth.identity(), contact_id).await?;
    Ok(ApiJson(response))
}

/// PUT /api/contacts/{contact_id}
pub async fn update_contact(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(contact_id): IdPath<Uuid>,
    JsonBody(request): JsonBody<UpdateContactRequest>,
) -> ApiResult<ApiJson<ContactResponse>> {
    let service = ContactService::new(state.service_context());
    let response = service.update(auth.identity(), contact_id, request).await?;
    Ok(ApiJson(response))
}

/// DELETE /api/contacts/{contact_id}
pub async fn delete_contact(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(contact_id): IdPath<Uuid>,
) -> ApiResult<ApiJson<bool>> {
    let service = ContactService::new(state.service_context());
    let response = service.delete(auth.identity(), contact_id).await?;
    Ok(ApiJson(response))
}
