//! # stock-client: Inventory Page Controller
//!
//! Client-side state for the inventory page and the HTTP calls behind it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stock Inventory Data Flow                        │
//! │                                                                         │
//! │  UI events (click "+", type in search, submit form)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   stock-client (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   InventoryView ──────────► dyn InventoryApi                   │   │
//! │  │   products, dropdown,          HttpInventoryApi (reqwest)       │   │
//! │  │   form, query, alert                                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  stock-api  (/api/product, /api/search, /api/action)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,ignore
//! use stock_client::{HttpInventoryApi, InventoryView};
//! use stock_core::AdjustAction;
//!
//! let mut view = InventoryView::new(HttpInventoryApi::new("http://localhost:3000"));
//! view.fetch_products().await;
//! view.adjust_quantity(AdjustAction::Plus, "widget", 5).await;
//! ```

pub mod api;
pub mod error;
pub mod view;

pub use api::{HttpInventoryApi, InventoryApi};
pub use error::{ClientError, ClientResult};
pub use view::{Alert, AlertKind, FormField, InventoryView, ProductForm};
