//! # Product Routes
//!
//! List and insert. Documents pass through untouched, so fields the
//! handlers do not know about are stored and returned as-is.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;
use tracing::{debug, info};

use stock_core::wire::{ProductEnvelope, ProductsEnvelope};
use stock_db::ProductDocument;

use crate::error::ApiError;
use crate::AppState;

/// `GET /api/product` - every document, store order.
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ProductsEnvelope<ProductDocument>>, ApiError> {
    let products = state.store.list().await?;
    debug!(count = products.len(), "Listed products");
    Ok(Json(ProductsEnvelope::ok(products)))
}

/// `POST /api/product` - inserts the body and returns it with its `_id`.
///
/// Any JSON object is accepted. Arrays, scalars and non-JSON bodies are 400.
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ProductEnvelope<ProductDocument>>, ApiError> {
    let Json(body) = payload?;
    let Value::Object(doc) = body else {
        return Err(ApiError::BadRequest(
            "Product must be a JSON object".to_string(),
        ));
    };

    let product = state.store.insert(doc).await?;
    info!(id = ?product.get("_id"), "Product created");
    Ok(Json(ProductEnvelope::ok(product)))
}
