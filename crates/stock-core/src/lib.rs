//! # stock-core: Pure Domain Logic for Stock Inventory
//!
//! This crate holds the domain model shared by the API server and the client
//! state controller. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Stock Inventory Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              stock-client (InventoryView)                       │   │
//! │  │    Stock list ──► Add form ──► Search dropdown ──► +/- buttons  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTP / JSON                            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    stock-api (axum)                             │   │
//! │  │    /api/product, /api/search, /api/action                       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stock-core (THIS CRATE) ★                       │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  search   │  │   wire    │  │ validation│  │   │
//! │  │   │  Product  │  │ SlugQuery │  │ envelopes │  │   rules   │  │   │
//! │  │   │ AdjustAct │  │           │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    stock-db (MongoDB)                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, NewProduct, AdjustAction, ...)
//! - [`search`] - Slug search query
//! - [`wire`] - JSON envelopes returned by every endpoint
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use stock_core::{AdjustAction, SlugQuery};
//!
//! let query = SlugQuery::new("wid");
//! assert!(query.matches("Widget-Blue"));
//!
//! assert_eq!(AdjustAction::Plus.apply(5), 6);
//! ```

pub mod error;
pub mod search;
pub mod types;
pub mod validation;
pub mod wire;

pub use error::{CoreError, CoreResult, ValidationError};
pub use search::SlugQuery;
pub use types::*;

/// Database holding the inventory collection unless configured otherwise.
pub const DEFAULT_DATABASE: &str = "stock";

/// Collection holding product documents.
pub const INVENTORY_COLLECTION: &str = "inventory";

/// Minimum number of characters the client requires before searching.
pub const MIN_SEARCH_CHARS: usize = 3;
