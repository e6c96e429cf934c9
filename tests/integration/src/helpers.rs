//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and making HTTP requests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use contact_api::server::{create_app_state, serve};
use contact_api::{create_app, AppState};
use contact_common::AppConfig;
use contact_db::MemoryStore;
use contact_service::ServiceContext;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::{Envelope, LoginRequest, RegisterRequest, TokenBody, UserBody};

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    /// Set when the server runs over the in-memory store
    pub store: Option<MemoryStore>,
    handle: JoinHandle<()>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl TestServer {
    /// Start a test server over a fresh in-memory store
    pub async fn start() -> Result<Self> {
        let store = MemoryStore::new();
        let ctx = ServiceContext::builder()
            .transaction_manager(Arc::new(store.clone()))
            .build()?;
        let state = AppState::new(ctx, memory_config()?);

        Self::spawn(state, Some(store)).await
    }

    /// Start a test server over PostgreSQL from `DATABASE_URL`
    pub async fn start_postgres() -> Result<Self> {
        dotenvy::dotenv().ok();
        let mut config =
            AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        config.database.migrations_dir =
            concat!(env!("CARGO_MANIFEST_DIR"), "/../../migrations").to_string();

        let state = create_app_state(config).await?;
        Self::spawn(state, None).await
    }

    async fn spawn(state: AppState, store: Option<MemoryStore>) -> Result<Self> {
        let app = create_app(state);

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            let _ = serve(listener, app, std::future::pending()).await;
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            store,
            handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    fn request(&self, method: reqwest::Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let url = format!("{}{}", self.base_url(), path);
        let builder = self.client.request(method, url);
        match token {
            Some(token) => builder.header("Authorization", token),
            None => builder,
        }
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.request(reqwest::Method::GET, path, None).send().await?)
    }

    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .request(reqwest::Method::GET, path, Some(token))
            .send()
            .await?)
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self
            .request(reqwest::Method::POST, path, None)
            .json(body)
            .send()
            .await?)
    }

    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .request(reqwest::Method::POST, path, Some(token))
            .json(body)
            .send()
            .await?)
    }

    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .request(reqwest::Method::PATCH, path, Some(token))
            .json(body)
            .send()
            .await?)
    }

    pub async fn put_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        Ok(self
            .request(reqwest::Method::PUT, path, Some(token))
            .json(body)
            .send()
            .await?)
    }

    pub async fn delete_auth(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .request(reqwest::Method::DELETE, path, Some(token))
            .send()
            .await?)
    }

    /// Register `request` and log it in, returning the session token
    pub async fn register_and_login(&self, request: &RegisterRequest) -> Result<String> {
        let response = self.post("/api/users", request).await?;
        let _: Envelope<UserBody> = assert_json(response, StatusCode::CREATED).await?;

        let response = self
            .post("/api/users/_login", &LoginRequest::from(request))
            .await?;
        let body: Envelope<TokenBody> = assert_json(response, StatusCode::OK).await?;
        Ok(body.into_data()?.token)
    }
}

/// Configuration for a server that never touches PostgreSQL
pub fn memory_config() -> Result<AppConfig> {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("API_PORT", "0"),
        ("DATABASE_URL", "postgres://unused"),
        ("DATABASE_RUN_MIGRATIONS", "false"),
    ]);
    AppConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_string()))
        .map_err(|e| anyhow::anyhow!("Config error: {e}"))
}

/// Whether PostgreSQL-backed tests can run
pub fn postgres_available() -> bool {
    dotenvy::dotenv().ok();
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!("Expected status {expected_status}, got {status}. Body: {body}");
    }
    Ok(response.json().await?)
}

/// Assert response status and return the error message from the envelope
pub async fn assert_error(response: Response, expected_status: StatusCode) -> Result<String> {
    let body: Envelope<serde_json::Value> = assert_json(response, expected_status).await?;
    if body.data.is_some() {
        anyhow::bail!("Error response carried data");
    }
    body.errors
        .ok_or_else(|| anyhow::anyhow!("Error response without errors field"))
}
