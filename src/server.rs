//! HTTP server initialization and runtime setup.
//!
//! Opens the storage, builds the router and runs the Axum server until a
//! shutdown signal arrives.

use crate::config::Config;
use crate::infrastructure::persistence::SqliteStorage;
use crate::routes::app_router;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite storage (schema created if missing)
/// - Axum HTTP server with the middleware stack
///
/// # Errors
///
/// Returns an error if:
/// - Storage initialization fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let storage = SqliteStorage::open(&config.storage_path, config.db_max_connections)
        .await
        .context("Failed to initialize storage")?;
    tracing::info!(storage_path = %config.storage_path, "Storage ready");

    let storage = Arc::new(storage);
    let app = app_router(Arc::clone(&storage), config.router_options());

    let listener = tokio::net::TcpListener::bind(config.listen_addr.as_str())
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr))?;
    let addr: SocketAddr = listener.local_addr()?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    storage.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}
