//! # stock-db: Database Layer for Stock Inventory
//!
//! This crate provides database access for the stock inventory. Products
//! live in a MongoDB collection; the driver is reached through a single,
//! lazily-created client per process.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stock Inventory Data Flow                        │
//! │                                                                         │
//! │  HTTP handler (GET /api/search)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     stock-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐   ┌───────────────┐  │   │
//! │  │   │   Database    │    │ InventoryStore │   │   document    │  │   │
//! │  │   │   (pool.rs)   │    │   (trait)      │   │  BSON <-> JSON│  │   │
//! │  │   │               │    │                │   │               │  │   │
//! │  │   │ OnceCell<     │◄───│ ProductRepo    │   │ _id → hex     │  │   │
//! │  │   │   Client>     │    │ MemoryStore    │   │               │  │   │
//! │  │   └───────────────┘    └────────────────┘   └───────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            MongoDB: database "stock", collection "inventory"    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection configuration and the memoized client
//! - [`document`] - Conversion between BSON documents and JSON objects
//! - [`error`] - Database error types
//! - [`repository`] - The `InventoryStore` trait and its implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stock_db::{Database, DbConfig, InventoryStore};
//!
//! let db = Database::new(DbConfig::new("mongodb://localhost:27017"));
//! let products = db.products().search(&SlugQuery::new("wid")).await?;
//! ```

pub mod document;
pub mod error;
pub mod pool;
pub mod repository;

pub use document::ProductDocument;
pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::memory::MemoryStore;
pub use repository::product::ProductRepository;
pub use repository::{AdjustOutcome, InventoryStore};
