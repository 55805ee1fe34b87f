//! # Search Route
//!
//! ```text
//! GET /api/search?query=wid
//!        │
//!        ▼
//! SlugQuery::from_param(Some("wid"))  ← missing param behaves like ""
//!        │
//!        ▼
//! store.search(&query)                ← case-insensitive literal substring on slug
//!        │
//!        ▼
//! { "success": true, "products": [...] }
//! ```

use std::time::Instant;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::debug;

use stock_core::wire::ProductsEnvelope;
use stock_core::SlugQuery;
use stock_db::ProductDocument;

use crate::error::ApiError;
use crate::AppState;

/// Query string of `GET /api/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// `GET /api/search?query=<string>`
pub async fn search_products(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<ProductsEnvelope<ProductDocument>>, ApiError> {
    let Query(params) = params?;
    let start = Instant::now();
    let query = SlugQuery::from_param(params.query);

    let products = state.store.search(&query).await?;

    debug!(
        query = %query.as_str(),
        results = products.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Search completed"
    );
    Ok(Json(ProductsEnvelope::ok(products)))
}
