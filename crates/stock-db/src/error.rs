//! # Database Error Types
//!
//! Error types for store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  mongodb::error::Error / bson ser/de errors                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError (this module) ← Adds context and categorization               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (stock-api) ← { success: false, error } + status code        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use mongodb::error::{ErrorKind, WriteFailure};
use thiserror::Error;

/// Duplicate key error code reported by the server.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// The connection string cannot be parsed.
    ///
    /// Retrying will not help; the server treats this as a startup error.
    #[error("Invalid connection string: {0}")]
    InvalidUri(String),

    /// Unique index violation.
    ///
    /// ## When This Occurs
    /// - An operator created a unique index on `slug` and a duplicate was
    ///   inserted. The application itself does not enforce uniqueness.
    #[error("Duplicate key: {message}")]
    UniqueViolation { message: String },

    /// The driver could not reach a suitable server.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The server rejected or failed the operation.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A document could not be converted between JSON and BSON.
    #[error("Document conversion failed: {0}")]
    Conversion(String),

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Maps a failure from `ClientOptions::parse`.
    ///
    /// A malformed string is `InvalidUri`. Anything else (an SRV lookup
    /// that timed out, say) is a `ConnectionFailed` worth retrying.
    pub(crate) fn from_parse(err: mongodb::error::Error) -> Self {
        match err.kind.as_ref() {
            ErrorKind::InvalidArgument { .. } => DbError::InvalidUri(err.to_string()),
            _ => DbError::ConnectionFailed(err.to_string()),
        }
    }

    /// Returns true when retrying the operation cannot succeed.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DbError::InvalidUri(_))
    }
}

/// Convert driver errors to DbError.
///
/// ## Error Mapping
/// ```text
/// ErrorKind::ServerSelection           → DbError::ConnectionFailed
/// ErrorKind::InvalidArgument           → DbError::ConnectionFailed
/// ErrorKind::Write(code 11000)         → DbError::UniqueViolation
/// ErrorKind::Command / Write (other)   → DbError::QueryFailed
/// Other                                → DbError::Internal
/// ```
impl From<mongodb::error::Error> for DbError {
    fn from(err: mongodb::error::Error) -> Self {
        match err.kind.as_ref() {
            ErrorKind::ServerSelection { .. } | ErrorKind::InvalidArgument { .. } => {
                DbError::ConnectionFailed(err.to_string())
            }
            ErrorKind::Write(WriteFailure::WriteError(write_error))
                if write_error.code == DUPLICATE_KEY_CODE =>
            {
                DbError::UniqueViolation {
                    message: write_error.message.clone(),
                }
            }
            ErrorKind::Write(_) | ErrorKind::Command(_) => DbError::QueryFailed(err.to_string()),
            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<mongodb::bson::ser::Error> for DbError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        DbError::Conversion(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
