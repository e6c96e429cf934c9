//! Path parameter extractors
//!
//! Entity ids are UUIDs. A segment that does not parse cannot name an
//! existing entity, so it is rejected as not found.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use uuid::Uuid;

use crate::response::ApiError;

/// Extract typed path parameters
#[derive(Debug, Clone)]
pub struct IdPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for IdPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(IdPath(inner))
    }
}

/// Path parameters with contact_id and address_id
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AddressPath {
    pub contact_id: Uuid,
    pub address_id: Uuid,
}
