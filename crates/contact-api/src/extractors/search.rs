//! Contact search query extractor
//!
//! Paging values that are missing or not numbers fall back to the defaults
//! instead of failing the request.

use std::collections::HashMap;

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use contact_service::dto::SearchContactRequest;

use crate::response::ApiError;

#[derive(Debug, Clone, Default)]
pub struct SearchParams(pub SearchContactRequest);

impl SearchParams {
    fn from_pairs(mut pairs: HashMap<String, String>) -> Self {
        let number = |key: &str| pairs.get(key).and_then(|v| v.trim().parse::<i64>().ok());
        let page = number("page");
        let size = number("size");

        SearchParams(SearchContactRequest {
            name: pairs.remove("name"),
            email: pairs.remove("email"),
            phone: pairs.remove("phone"),
            page,
            size,
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SearchParams
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_body(e.body_text()))?;

        Ok(Self::from_pairs(pairs))
    }
}
