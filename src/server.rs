//! HTTP server initialization and lifecycle.
//!
//! Opens the SQLite database, builds the router, and serves until a
//! shutdown signal arrives.

use crate::config::Config;
use crate::routes::app_router;
use crate::state::{AdminCredentials, AppState};
use crate::storage::SqliteUrlRepository;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::path::Path;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The database cannot be opened or its schema cannot be created
/// - The listener cannot bind
/// - A server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let storage = SqliteUrlRepository::connect(Path::new(&config.storage_path)).await?;
    tracing::info!(path = %config.storage_path, "storage ready");

    let state = AppState::new(
        Arc::new(storage),
        AdminCredentials {
            user: config.admin_user.clone(),
            password: config.admin_password.clone(),
        },
    );

    let app = app_router(state, config.request_timeout);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("listening on http://{}", config.listen_addr);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install SIGINT handler");
    tracing::info!("shutdown signal received");
}
