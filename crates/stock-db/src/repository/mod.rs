//! # Repository Module
//!
//! Store implementations for the inventory collection.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  state.store.search(&SlugQuery::new("wid"))                     │
//! │       ▼                                                                 │
//! │  dyn InventoryStore                                                    │
//! │  ├── list()                                                            │
//! │  ├── insert(doc)                                                       │
//! │  ├── search(query)                                                     │
//! │  ├── set_quantity(slug, quantity)                                      │
//! │  └── health_check()                                                    │
//! │       │                                                                 │
//! │       ├──► ProductRepository  (MongoDB, production)                    │
//! │       └──► MemoryStore        (in-process, tests and local demos)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each method is a single store round trip. No method coordinates with
//! another; concurrent callers rely on the driver's own multiplexing.

pub mod memory;
pub mod product;

use async_trait::async_trait;
use stock_core::SlugQuery;

use crate::document::ProductDocument;
use crate::error::DbResult;

/// Outcome of a quantity update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdjustOutcome {
    /// Documents whose slug matched.
    pub matched: u64,
    /// Documents whose quantity actually changed.
    pub modified: u64,
}

/// Access to the inventory collection.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    /// Every document, in store-default order.
    async fn list(&self) -> DbResult<Vec<ProductDocument>>;

    /// Inserts the document as-is and returns it merged with the assigned `_id`.
    async fn insert(&self, doc: ProductDocument) -> DbResult<ProductDocument>;

    /// Documents whose `slug` contains the query, ignoring case.
    async fn search(&self, query: &SlugQuery) -> DbResult<Vec<ProductDocument>>;

    /// Sets `quantity` on the first document with the given slug.
    async fn set_quantity(&self, slug: &str, quantity: i64) -> DbResult<AdjustOutcome>;

    /// True when the store answers.
    async fn health_check(&self) -> bool;
}
