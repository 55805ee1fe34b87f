//! # Stock API
//!
//! HTTP server for the stock inventory.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stock API Server                                 │
//! │                                                                         │
//! │  Browser ───► axum (3000) ───► routes ───► dyn InventoryStore          │
//! │                  │                              │                       │
//! │            CorsLayer                            ├── ProductRepository   │
//! │            TraceLayer                           │   (MongoDB)           │
//! │                                                 └── MemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Endpoints
//! | Method | Path            | Handler                             |
//! |--------|-----------------|-------------------------------------|
//! | GET    | `/api/product`  | [`routes::product::list_products`]  |
//! | POST   | `/api/product`  | [`routes::product::create_product`] |
//! | GET    | `/api/search`   | [`routes::search::search_products`] |
//! | POST   | `/api/action`   | [`routes::action::adjust_quantity`] |
//! | GET    | `/health`       | [`routes::health::health`]          |

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use stock_db::{Database, DbError, InventoryStore};

pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn InventoryStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn InventoryStore>) -> Self {
        AppState { store }
    }
}

/// Builds the application router.
///
/// `cors_origin` restricts CORS to one origin; `None` allows any.
pub fn build_router(state: AppState, cors_origin: Option<&str>) -> Router {
    Router::new()
        .route(
            "/api/product",
            get(routes::product::list_products).post(routes::product::create_product),
        )
        .route("/api/search", get(routes::search::search_products))
        .route("/api/action", post(routes::action::adjust_quantity))
        .route("/health", get(routes::health::health))
        .layer(cors_layer(cors_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let allow_origin = match origin.and_then(|o| HeaderValue::from_str(o).ok()) {
        Some(value) => AllowOrigin::exact(value),
        None => AllowOrigin::from(Any),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Builds the MongoDB client ahead of the first request.
///
/// A connection string the driver cannot parse is returned as an error so
/// startup can abort. Any other failure is logged and left for the first
/// request to retry.
pub async fn warm_up(db: &Database) -> Result<(), DbError> {
    match db.client().await {
        Ok(_) => Ok(()),
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            warn!(error = %e, "MongoDB client not ready yet");
            Ok(())
        }
    }
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` for verbose output
/// - `RUST_LOG=stock=trace` for our crates only
/// - Default: `info,stock=debug,mongodb=warn`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stock=debug,mongodb=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
