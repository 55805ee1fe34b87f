//! # Error Types
//!
//! Domain-specific error types for stock-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stock-core errors (this file)                                         │
//! │  ├── CoreError        - Domain rule violations                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  stock-db errors (separate crate)                                      │
//! │  └── DbError          - Store operation failures                       │
//! │                                                                         │
//! │  stock-api errors (server)                                             │
//! │  └── ApiError         - What HTTP callers see ({ success, error })     │
//! │                                                                         │
//! │  Flow: CoreError | DbError → ApiError → ClientError → Alert            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No product carries the given slug.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A decrement would take the quantity below zero.
    ///
    /// ## User Workflow
    /// ```text
    /// Click "-" on widget (quantity: 0)
    ///      │
    ///      ▼
    /// AdjustAction::Minus.checked_apply(0)
    ///      │
    ///      ▼
    /// InsufficientStock { slug: "widget", available: 0 }
    ///      │
    ///      ▼
    /// Alert: "Insufficient stock for widget: available 0"
    /// ```
    #[error("Insufficient stock for {slug}: available {available}")]
    InsufficientStock { slug: String, available: i64 },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is below its floor.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Invalid format (e.g. a quantity that is not an integer).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            slug: "widget".to_string(),
            available: 0,
        };
        assert_eq!(err.to_string(), "Insufficient stock for widget: available 0");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "slug".to_string(),
        };
        assert_eq!(err.to_string(), "slug is required");

        let err = ValidationError::Negative {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must not be negative");
    }
}
