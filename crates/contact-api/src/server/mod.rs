//! Server setup and initialization
//!
//! Provides the application builder and the server runner.

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware::from_fn, Router};
use contact_common::{AppConfig, AppError, PasswordService};
use contact_db::{create_pool, run_migrations, PgTransactionManager};
use contact_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::middleware::{apply_middleware, apply_middleware_with_config, envelope_bare_errors};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

fn request_timeout(config: &AppConfig) -> Duration {
    Duration::from_secs(config.http.request_timeout_secs)
}

/// Build the application with request id, tracing, and timeout layers.
///
/// Used by tests; `run` adds CORS and rate limiting on top.
pub fn create_app(state: AppState) -> Router {
    let timeout = request_timeout(state.config());
    let router = create_router().merge(health_routes());
    apply_middleware(router, timeout)
        .layer(from_fn(envelope_bare_errors))
        .with_state(state)
}

/// Build the application with the complete middleware stack from configuration
pub fn create_app_with_config(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let timeout = request_timeout(config);

    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        timeout,
        config.app.env.is_production(),
    )?;
    // Probes bypass rate limiting
    let health = apply_middleware(health_routes(), timeout);

    Ok(api
        .merge(health)
        .layer(from_fn(envelope_bare_errors))
        .with_state(state))
}

/// Connect to PostgreSQL, apply migrations, and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = contact_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool, &config.database.migrations_dir)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    let service_context = ServiceContext::builder()
        .transaction_manager(Arc::new(PgTransactionManager::new(pool)))
        .password_service(PasswordService::new())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Serve `app` on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), AppError>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!("Server listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(AppError::internal)
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app_with_config(state)?;

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    serve(listener, app, shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
