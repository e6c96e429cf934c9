//! API Integration Tests
//!
//! Every test runs against an in-memory store except the PostgreSQL smoke
//! test, which needs DATABASE_URL.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::collections::HashSet;

use integration_tests::{
    assert_error, assert_json, postgres_available, AddressBody, AddressRequest, ContactBody,
    ContactRequest, Envelope, LoginRequest, Paging, RegisterRequest, TestServer, UserBody,
};
use reqwest::StatusCode;
use serde_json::json;
use uuid::Uuid;

async fn create_contact(server: &TestServer, token: &str, request: &ContactRequest) -> ContactBody {
    let response = server
        .post_auth("/api/contacts", token, request)
        .await
        .unwrap();
    let body: Envelope<ContactBody> = assert_json(response, StatusCode::CREATED).await.unwrap();
    body.into_data().unwrap()
}

async fn create_address(server: &TestServer, token: &str, contact_id: Uuid) -> AddressBody {
    let response = server
        .post_auth(
            &format!("/api/contacts/{contact_id}/addresses"),
            token,
            &AddressRequest::sample(),
        )
        .await
        .unwrap();
    let body: Envelope<AddressBody> = assert_json(response, StatusCode::CREATED).await.unwrap();
    body.into_data().unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = server.get("/health/ready").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_register_twice_is_conflict() {
    let server = TestServer::start().await.unwrap();
    let request = RegisterRequest::unique();

    let response = server.post("/api/users", &request).await.unwrap();
    let body: Envelope<UserBody> = assert_json(response, StatusCode::CREATED).await.unwrap();
    let user = body.into_data().unwrap();
    assert_eq!(user.id, request.id);
    assert_eq!(user.name, request.name);

    let response = server.post("/api/users", &request).await.unwrap();
    let message = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(message, "Conflict");

    let store = server.store.as_ref().unwrap();
    assert_eq!(store.user_count().await, 1);
}

#[tokio::test]
async fn test_register_validation() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/api/users", &json!({ "id": "", "password": "", "name": "" }))
        .await
        .unwrap();
    let message = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "Bad Request");
}

#[tokio::test]
async fn test_login_token_resolves_to_user() {
    let server = TestServer::start().await.unwrap();
    let request = RegisterRequest::unique();
    let token = server.register_and_login(&request).await.unwrap();

    let response = server.get_auth("/api/users/_current", &token).await.unwrap();
    let body: Envelope<UserBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.into_data().unwrap().id, request.id);

    // Bearer form resolves to the same user
    let response = server
        .get_auth("/api/users/_current", &format!("Bearer {token}"))
        .await
        .unwrap();
    let body: Envelope<UserBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.into_data().unwrap().id, request.id);
}

#[tokio::test]
async fn test_login_failures_are_unauthorized() {
    let server = TestServer::start().await.unwrap();
    let request = RegisterRequest::unique();
    server.register_and_login(&request).await.unwrap();

    let mut wrong_password = LoginRequest::from(&request);
    wrong_password.password = "salah".to_string();
    let response = server.post("/api/users/_login", &wrong_password).await.unwrap();
    let message = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(message, "Unauthorized");

    let unknown = LoginRequest {
        id: "nobody".to_string(),
        password: "rahasia".to_string(),
    };
    let response = server.post("/api/users/_login", &unknown).await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let server = TestServer::start().await.unwrap();
    let token = server
        .register_and_login(&RegisterRequest::unique())
        .await
        .unwrap();

    let response = server.delete_auth("/api/users", &token).await.unwrap();
    let body: Envelope<bool> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.into_data().unwrap());

    let response = server.get_auth("/api/users/_current", &token).await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_relogin_replaces_token() {
    let server = TestServer::start().await.unwrap();
    let request = RegisterRequest::unique();
    let first = server.register_and_login(&request).await.unwrap();

    let response = server
        .post("/api/users/_login", &LoginRequest::from(&request))
        .await
        .unwrap();
    let body: Envelope<integration_tests::TokenBody> =
        assert_json(response, StatusCode::OK).await.unwrap();
    let second = body.into_data().unwrap().token;

    assert_ne!(first, second);
    let response = server.get_auth("/api/users/_current", &first).await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    let response = server.get_auth("/api/users/_current", &second).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_update_current_user() {
    let server = TestServer::start().await.unwrap();
    let request = RegisterRequest::unique();
    let token = server.register_and_login(&request).await.unwrap();

    let response = server
        .patch_auth(
            "/api/users/_current",
            &token,
            &json!({ "name": "Budi", "password": "baru" }),
        )
        .await
        .unwrap();
    let body: Envelope<UserBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.into_data().unwrap().name, "Budi");

    let login = LoginRequest {
        id: request.id.clone(),
        password: "baru".to_string(),
    };
    let response = server.post("/api/users/_login", &login).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// ============================================================================
// Contact Tests
// ============================================================================

#[tokio::test]
async fn test_created_contact_ids_are_distinct() {
    let server = TestServer::start().await.unwrap();
    let token = server
        .register_and_login(&RegisterRequest::unique())
        .await
        .unwrap();

    let mut ids = HashSet::new();
    for _ in 0..5 {
        let contact = create_contact(&server, &token, &ContactRequest::sample()).await;
        assert!(!contact.id.is_nil());
        assert!(ids.insert(contact.id));
    }
}

#[tokio::test]
async fn test_search_paging() {
    let server = TestServer::start().await.unwrap();
    let token = server
        .register_and_login(&RegisterRequest::unique())
        .await
        .unwrap();

    for i in 0..20 {
        let request = ContactRequest {
            first_name: format!("Eko {i}"),
            ..ContactRequest::sample()
        };
        create_contact(&server, &token, &request).await;
    }

    let response = server.get_auth("/api/contacts", &token).await.unwrap();
    let body: Envelope<Vec<ContactBody>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        body.paging,
        Some(Paging {
            page: 1,
            size: 10,
            total_item: 20,
            total_page: 2
        })
    );
    assert_eq!(body.into_data().unwrap().len(), 10);

    let response = server
        .get_auth("/api/contacts?page=2&size=5", &token)
        .await
        .unwrap();
    let body: Envelope<Vec<ContactBody>> = assert_json(response, StatusCode::OK).await.unwrap();
    let paging = body.paging.unwrap();
    assert_eq!(paging.page, 2);
    assert_eq!(paging.total_page, 4);
    assert_eq!(body.into_data().unwrap().len(), 5);

    let response = server
        .get_auth("/api/contacts?page=abc&size=-3", &token)
        .await
        .unwrap();
    let body: Envelope<Vec<ContactBody>> = assert_json(response, StatusCode::OK).await.unwrap();
    let paging = body.paging.unwrap();
    assert_eq!((paging.page, paging.size), (1, 10));
}

#[tokio::test]
async fn test_search_filters() {
    let server = TestServer::start().await.unwrap();
    let token = server
        .register_and_login(&RegisterRequest::unique())
        .await
        .unwrap();

    create_contact(&server, &token, &ContactRequest::sample()).await;
    create_contact(
        &server,
        &token,
        &ContactRequest {
            first_name: "Budi".to_string(),
            email: Some("budi@example.com".to_string()),
            ..Default::default()
        },
    )
    .await;

    let response = server
        .get_auth("/api/contacts?name=KHANN", &token)
        .await
        .unwrap();
    let body: Envelope<Vec<ContactBody>> = assert_json(response, StatusCode::OK).await.unwrap();
    let contacts = body.into_data().unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].first_name, "Eko");

    let response = server
        .get_auth("/api/contacts?email=budi", &token)
        .await
        .unwrap();
    let body: Envelope<Vec<ContactBody>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.paging.unwrap().total_item, 1);
}

#[tokio::test]
async fn test_contact_get_update_delete() {
    let server = TestServer::start().await.unwrap();
    let token = server
        .register_and_login(&RegisterRequest::unique())
        .await
        .unwrap();
    let contact = create_contact(&server, &token, &ContactRequest::sample()).await;
    let path = format!("/api/contacts/{}", contact.id);

    let response = server.get_auth(&path, &token).await.unwrap();
    let body: Envelope<ContactBody> = assert_json(response, StatusCode::OK).await.unwrap();
    let fetched = body.into_data().unwrap();
    assert_eq!(fetched.last_name.as_deref(), Some("Khannedy"));
    assert_eq!(fetched.phone.as_deref(), Some("08999999999"));

    let update = ContactRequest {
        first_name: "Budi".to_string(),
        email: Some("budi@example.com".to_string()),
        ..Default::default()
    };
    let response = server.put_auth(&path, &token, &update).await.unwrap();
    let body: Envelope<ContactBody> = assert_json(response, StatusCode::OK).await.unwrap();
    let updated = body.into_data().unwrap();
    assert_eq!(updated.id, contact.id);
    assert_eq!(updated.first_name, "Budi");
    assert_eq!(updated.last_name, None);
    assert_eq!(updated.email.as_deref(), Some("budi@example.com"));

    let response = server.delete_auth(&path, &token).await.unwrap();
    let body: Envelope<bool> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.into_data().unwrap());

    let response = server.delete_auth(&path, &token).await.unwrap();
    let message = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(message, "Not Found");
}

#[tokio::test]
async fn test_invalid_contact_is_bad_request() {
    let server = TestServer::start().await.unwrap();
    let token = server
        .register_and_login(&RegisterRequest::unique())
        .await
        .unwrap();

    let request = ContactRequest {
        first_name: String::new(),
        email: Some("salah".to_string()),
        ..Default::default()
    };
    let response = server
        .post_auth("/api/contacts", &token, &request)
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_other_users_contact_is_not_found() {
    let server = TestServer::start().await.unwrap();
    let alice = server
        .register_and_login(&RegisterRequest::unique())
        .await
        .unwrap();
    let bob = server
        .register_and_login(&RegisterRequest::unique())
        .await
        .unwrap();
    let contact = create_contact(&server, &alice, &ContactRequest::sample()).await;
    let path = format!("/api/contacts/{}", contact.id);

    let response = server.get_auth(&path, &bob).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .put_auth(&path, &bob, &ContactRequest::sample())
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.delete_auth(&path, &bob).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();

    // Bob's search does not see it either
    let response = server.get_auth("/api/contacts", &bob).await.unwrap();
    let body: Envelope<Vec<ContactBody>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.paging.unwrap().total_item, 0);

    let response = server.get_auth(&path, &alice).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/contacts").await.unwrap();
    let message = assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(message, "Unauthorized");

    let response = server.get_auth("/api/contacts", "salah").await.unwrap();
    assert_error(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

// ============================================================================
// Address Tests
// ============================================================================

#[tokio::test]
async fn test_address_crud() {
    let server = TestServer::start().await.unwrap();
    let token = server
        .register_and_login(&RegisterRequest::unique())
        .await
        .unwrap();
    let contact = create_contact(&server, &token, &ContactRequest::sample()).await;
    let address = create_address(&server, &token, contact.id).await;
    assert_eq!(address.postal_code.as_deref(), Some("343443"));

    let list_path = format!("/api/contacts/{}/addresses", contact.id);
    let response = server.get_auth(&list_path, &token).await.unwrap();
    let body: Envelope<Vec<AddressBody>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.into_data().unwrap().len(), 1);

    let path = format!("{list_path}/{}", address.id);
    let update = AddressRequest {
        city: Some("Bandung".to_string()),
        country: "Indonesia".to_string(),
        ..Default::default()
    };
    let response = server.put_auth(&path, &token, &update).await.unwrap();
    let body: Envelope<AddressBody> = assert_json(response, StatusCode::OK).await.unwrap();
    let updated = body.into_data().unwrap();
    assert_eq!(updated.city.as_deref(), Some("Bandung"));
    assert_eq!(updated.street, None);
    assert_eq!(updated.country, "Indonesia");

    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let response = server.get_auth(&path, &token).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_overlong_postal_code_persists_nothing() {
    let server = TestServer::start().await.unwrap();
    let token = server
        .register_and_login(&RegisterRequest::unique())
        .await
        .unwrap();
    let contact = create_contact(&server, &token, &ContactRequest::sample()).await;

    let request = AddressRequest {
        postal_code: Some("12345678901".to_string()),
        ..AddressRequest::sample()
    };
    let response = server
        .post_auth(
            &format!("/api/contacts/{}/addresses", contact.id),
            &token,
            &request,
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(server.store.as_ref().unwrap().address_count().await, 0);
}

#[tokio::test]
async fn test_other_users_address_is_not_found() {
    let server = TestServer::start().await.unwrap();
    let alice = server
        .register_and_login(&RegisterRequest::unique())
        .await
        .unwrap();
    let bob = server
        .register_and_login(&RegisterRequest::unique())
        .await
        .unwrap();
    let contact = create_contact(&server, &alice, &ContactRequest::sample()).await;
    let address = create_address(&server, &alice, contact.id).await;
    let path = format!("/api/contacts/{}/addresses/{}", contact.id, address.id);

    let response = server.get_auth(&path, &bob).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .put_auth(&path, &bob, &AddressRequest::sample())
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.delete_auth(&path, &bob).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();

    // Right owner, wrong parent contact
    let sibling = create_contact(&server, &alice, &ContactRequest::sample()).await;
    let response = server
        .get_auth(
            &format!("/api/contacts/{}/addresses/{}", sibling.id, address.id),
            &alice,
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_non_uuid_ids_are_not_found() {
    let server = TestServer::start().await.unwrap();
    let token = server
        .register_and_login(&RegisterRequest::unique())
        .await
        .unwrap();

    let response = server.get_auth("/api/contacts/abc", &token).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// PostgreSQL
// ============================================================================

#[tokio::test]
async fn test_postgres_round_trip() {
    if !postgres_available() {
        return;
    }

    let server = TestServer::start_postgres()
        .await
        .expect("Failed to start server");
    let token = server
        .register_and_login(&RegisterRequest::unique())
        .await
        .unwrap();

    let contact = create_contact(&server, &token, &ContactRequest::sample()).await;
    let address = create_address(&server, &token, contact.id).await;

    let response = server
        .get_auth("/api/contacts?name=khannedy&size=1", &token)
        .await
        .unwrap();
    let body: Envelope<Vec<ContactBody>> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.into_data().unwrap().len(), 1);

    let path = format!("/api/contacts/{}", contact.id);
    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let response = server.delete_auth(&path, &token).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert!(!address.id.is_nil());
}
