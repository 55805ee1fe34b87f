//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Stock API                          │
//! │                                                                         │
//! │  Handler: Result<Json<_>, ApiError>                                    │
//! │         │                                                               │
//! │         ├── body or query string rejected ──► BadRequest   (400)       │
//! │         ├── CoreError::InsufficientStock ───► BadRequest   (400)       │
//! │         ├── CoreError::ProductNotFound ─────► NotFound     (404)       │
//! │         └── DbError::* ─────────────────────► Internal     (500)       │
//! │                                                                         │
//! │  Every variant answers { "success": false, "error": "<message>" }      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Store failures are logged here and returned with the underlying message.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use stock_core::wire::ErrorEnvelope;
use stock_core::CoreError;
use stock_db::DbError;

/// Error returned from HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body or parameters are unusable (400).
    #[error("{0}")]
    BadRequest(String),

    /// The addressed product does not exist (404).
    #[error("{0}")]
    NotFound(String),

    /// The store failed (500).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorEnvelope::new(self.to_string()))).into_response()
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        tracing::error!(error = %err, "Store operation failed");
        ApiError::Internal(err.to_string())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(_) => ApiError::NotFound(err.to_string()),
            CoreError::InsufficientStock { .. } => ApiError::BadRequest(err.to_string()),
        }
    }
}

/// Converts a rejected JSON body into a 400.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Converts a rejected query string into a 400.
impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
