//! Axum extractors for request handling
//!
//! Custom extractors for authentication, JSON bodies, path ids, and search
//! parameters.

mod auth;
mod json;
mod path;
mod search;

pub use auth::{bearer_token, AuthUser};
pub use json::JsonBody;
pub use path::{AddressPath, IdPath};
pub use search::SearchParams;
