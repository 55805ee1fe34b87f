//! # Quantity Adjustment Route
//!
//! ## Adjustment Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /api/action { action: "minus", slug: "widget", initialQuantity: 5 }│
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  target = 5 - 1 = 4         (below zero? ──► 400, store untouched)     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  updateOne({ slug: "widget" }, { $set: { quantity: 4 } })              │
//! │       │                                                                 │
//! │       ├── matched 0 ──► 404                                            │
//! │       └── matched 1 ──► { success, matched, modified, quantity: 4 }    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The write is absolute, not `$inc`: two clients adjusting from the same
//! `initialQuantity` both write the same value. Last write wins.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::info;

use stock_core::wire::AdjustEnvelope;
use stock_core::{AdjustRequest, CoreError};

use crate::error::ApiError;
use crate::AppState;

/// `POST /api/action`
pub async fn adjust_quantity(
    State(state): State<AppState>,
    payload: Result<Json<AdjustRequest>, JsonRejection>,
) -> Result<Json<AdjustEnvelope>, ApiError> {
    let Json(request) = payload?;
    let quantity = request.target_quantity()?;

    let outcome = state.store.set_quantity(&request.slug, quantity).await?;
    if outcome.matched == 0 {
        return Err(CoreError::ProductNotFound(request.slug).into());
    }

    info!(
        slug = %request.slug,
        action = %request.action,
        quantity,
        modified = outcome.modified,
        "Quantity adjusted"
    );

    Ok(Json(AdjustEnvelope {
        success: true,
        matched: outcome.matched,
        modified: outcome.modified,
        quantity,
    }))
}
