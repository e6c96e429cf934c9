//! Shared fixtures for service tests

use std::sync::Arc;

use contact_core::entities::AuthenticatedIdentity;
use contact_db::MemoryStore;

use super::context::ServiceContext;
use super::user::UserService;
use crate::dto::{LoginUserRequest, RegisterUserRequest};

pub const PASSWORD: &str = "rahasia";

/// Context over a fresh in-memory store
pub fn test_context() -> (ServiceContext, MemoryStore) {
    let store = MemoryStore::new();
    let ctx = ServiceContext::builder()
        .transaction_manager(Arc::new(store.clone()))
        .build()
        .unwrap();
    (ctx, store)
}

/// Register a user and return its identity
pub async fn register(ctx: &ServiceContext, id: &str) -> AuthenticatedIdentity {
    UserService::new(ctx)
        .register(RegisterUserRequest {
            id: id.to_string(),
            password: PASSWORD.to_string(),
            name: format!("User {id}"),
        })
        .await
        .unwrap();
    AuthenticatedIdentity::new(id)
}

/// Log a registered user in and return the token
pub async fn login(ctx: &ServiceContext, id: &str) -> String {
    UserService::new(ctx)
        .login(LoginUserRequest {
            id: id.to_string(),
            password: PASSWORD.to_string(),
        })
        .await
        .unwrap()
        .token
}
