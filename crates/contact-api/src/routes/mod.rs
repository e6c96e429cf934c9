//! Route definitions
//!
//! API routes are mounted under /api, health probes at the root.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{self, addresses, contacts, health, users};
use crate::state::AppState;

/// Create the main API router (health probes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes())
        .fallback(handlers::not_found)
}

/// Health check routes (kept outside rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(user_routes())
        .merge(contact_routes())
        .merge(address_routes())
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::register).delete(users::logout))
        .route("/users/_login", post(users::login))
        .route(
            "/users/_current",
            get(users::get_current_user).patch(users::update_current_user),
        )
}

fn contact_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/contacts",
            post(contacts::create_contact).get(contacts::search_contacts),
        )
        .route(
            "/contacts/:contact_id",
            get(contacts::get_contact)
                .put(contacts::update_contact)
                .delete(contacts::delete_contact),
        )
}

fn address_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/contacts/:contact_id/addresses",
            post(addresses::create_address).get(addresses::list_addresses),
        )
        .route(
            "/contacts/:contact_id/addresses/:address_id",
            get(addresses::get_address)
                .put(addresses::update_address)
                .delete(addresses::delete_address),
        )
}
