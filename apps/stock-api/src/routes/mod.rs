//! # HTTP Routes
//!
//! ## Route Organization
//! ```text
//! routes/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── GET/POST /api/product
//! ├── search.rs   ◄─── GET /api/search?query=
//! ├── action.rs   ◄─── POST /api/action
//! └── health.rs   ◄─── GET /health
//! ```
//!
//! Every handler takes [`AppState`](crate::AppState) and performs at most
//! one store round trip.

pub mod action;
pub mod health;
pub mod product;
pub mod search;
