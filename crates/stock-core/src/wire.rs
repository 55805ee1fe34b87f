//! # Wire Envelopes
//!
//! Every endpoint answers with a JSON object carrying a `success` flag.
//!
//! ```text
//! GET  /api/product  ──► { "success": true,  "products": [...] }
//! POST /api/product  ──► { "success": true,  "product":  {...} }
//! GET  /api/search   ──► { "success": true,  "products": [...] }
//! POST /api/action   ──► { "success": true,  "matched": 1, "modified": 1, "quantity": 6 }
//! any failure        ──► { "success": false, "error": "..." }
//! ```
//!
//! The server fills the generic envelopes with raw documents so unknown
//! fields survive; the client decodes them into [`crate::Product`].

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// `{ success, products }`
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductsEnvelope<T> {
    pub success: bool,
    pub products: Vec<T>,
}

impl<T> ProductsEnvelope<T> {
    pub fn ok(products: Vec<T>) -> Self {
        ProductsEnvelope {
            success: true,
            products,
        }
    }
}

/// `{ success, product }`
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductEnvelope<T> {
    pub success: bool,
    pub product: T,
}

impl<T> ProductEnvelope<T> {
    pub fn ok(product: T) -> Self {
        ProductEnvelope {
            success: true,
            product,
        }
    }
}

/// Result of a quantity adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AdjustEnvelope {
    pub success: bool,
    /// Documents matching the slug.
    #[ts(type = "number")]
    pub matched: u64,
    /// Documents actually changed (0 when the quantity was already the target).
    #[ts(type = "number")]
    pub modified: u64,
    /// Quantity written to the store.
    #[ts(type = "number")]
    pub quantity: i64,
}

/// `{ success: false, error }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorEnvelope {
            success: false,
            error: error.into(),
        }
    }
}
