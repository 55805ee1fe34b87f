//! # Stock API Server
//!
//! ## Startup
//! ```text
//! init_tracing()
//!      │
//!      ▼
//! ApiConfig::load() ──── MONGODB_URI missing? ──► exit with error
//!      │
//!      ▼
//! Database::new(config)
//!      │
//!      ▼
//! warm_up(&db) ──── URI unparsable? ──► exit with error
//!      │            (other failures retry on the first request)
//!      ▼
//! axum::serve(...).with_graceful_shutdown(Ctrl+C | SIGTERM)
//! ```

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use stock_api::{build_router, init_tracing, warm_up, ApiConfig, AppState};
use stock_db::{Database, DbConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting Stock API server...");

    let config = ApiConfig::load().context("Failed to load configuration")?;
    info!(
        database = %config.database_name,
        collection = %config.collection_name,
        addr = %config.socket_addr(),
        "Configuration loaded"
    );

    let db = Database::new(
        DbConfig::new(config.mongodb_uri.clone())
            .database(config.database_name.clone())
            .collection(config.collection_name.clone())
            .app_name("stock-api"),
    );

    warm_up(&db).await.context("Invalid MONGODB_URI")?;

    let state = AppState::new(Arc::new(db.products()));
    let app = build_router(state, config.cors_origin.as_deref());

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!(%addr, "Stock API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
