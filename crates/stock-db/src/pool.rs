//! # Database Connection
//!
//! The process-wide, lazily-initialized MongoDB client.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Memoized Connection Handle                         │
//! │                                                                         │
//! │  Server startup                                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbConfig::new(uri) ← Requires a connection string                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config) ← No I/O yet                                    │
//! │       │                                                                 │
//! │       │ cloned into every request                                      │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │  OnceCell<Client>                       │                           │
//! │  │                                         │                           │
//! │  │  request 1 ──► get_or_try_init ──► connect (runs once)             │
//! │  │  request 2 ──► get_or_try_init ──► waits, then shares it           │
//! │  │  request N ──► get                ──► same Client                  │
//! │  └─────────────────────────────────────────┘                           │
//! │                                                                         │
//! │  A failed initialization is not stored; the next caller retries.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The driver's `Client` pools and multiplexes connections internally, so
//! no extra locking happens here. A connection string that does not parse
//! fails with [`DbError::InvalidUri`], which no retry can fix.

use std::sync::Arc;

use mongodb::bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::error::{DbError, DbResult};
use crate::repository::product::ProductRepository;
use stock_core::{DEFAULT_DATABASE, INVENTORY_COLLECTION};

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust
/// use stock_db::DbConfig;
///
/// let config = DbConfig::new("mongodb://localhost:27017")
///     .database("stock_test")
///     .collection("inventory");
/// assert_eq!(config.database_name, "stock_test");
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// MongoDB connection string.
    pub uri: String,

    /// Database name. Default: `stock`
    pub database_name: String,

    /// Collection name. Default: `inventory`
    pub collection_name: String,

    /// Application name reported to the server.
    pub app_name: Option<String>,
}

impl DbConfig {
    /// Creates a configuration for the given connection string.
    pub fn new(uri: impl Into<String>) -> Self {
        DbConfig {
            uri: uri.into(),
            database_name: DEFAULT_DATABASE.to_string(),
            collection_name: INVENTORY_COLLECTION.to_string(),
            app_name: None,
        }
    }

    /// Sets the database name.
    pub fn database(mut self, name: impl Into<String>) -> Self {
        self.database_name = name.into();
        self
    }

    /// Sets the collection name.
    pub fn collection(mut self, name: impl Into<String>) -> Self {
        self.collection_name = name.into();
        self
    }

    /// Sets the application name reported in server logs.
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = Some(name.into());
        self
    }
}

// =============================================================================
// Database
// =============================================================================

struct DatabaseInner {
    config: DbConfig,
    client: OnceCell<Client>,
}

/// Cheaply clonable handle to the memoized MongoDB client.
///
/// Every clone shares the same `OnceCell`, so the whole process connects at
/// most once.
#[derive(Clone)]
pub struct Database {
    inner: Arc<DatabaseInner>,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("database", &self.inner.config.database_name)
            .field("collection", &self.inner.config.collection_name)
            .field("connected", &self.is_connected())
            .finish()
    }
}

impl Database {
    /// Creates the handle. Does not connect.
    pub fn new(config: DbConfig) -> Self {
        Database {
            inner: Arc::new(DatabaseInner {
                config,
                client: OnceCell::new(),
            }),
        }
    }

    /// The configuration this handle was built with.
    pub fn config(&self) -> &DbConfig {
        &self.inner.config
    }

    /// True once the client has been created.
    pub fn is_connected(&self) -> bool {
        self.inner.client.initialized()
    }

    /// Returns the shared client, connecting on first use.
    pub async fn client(&self) -> DbResult<&Client> {
        self.inner
            .client
            .get_or_try_init(|| connect(&self.inner.config))
            .await
    }

    /// Returns the inventory collection handle.
    pub async fn inventory(&self) -> DbResult<Collection<Document>> {
        let config = &self.inner.config;
        let client = self.client().await?;
        Ok(client
            .database(&config.database_name)
            .collection::<Document>(&config.collection_name))
    }

    /// Returns the product repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.clone())
    }

    /// Checks if the server answers a ping.
    pub async fn health_check(&self) -> bool {
        let client = match self.client().await {
            Ok(client) => client,
            Err(e) => {
                warn!(error = %e, "Health check could not obtain a client");
                return false;
            }
        };

        client
            .database(&self.inner.config.database_name)
            .run_command(doc! { "ping": 1 })
            .await
            .is_ok()
    }
}

async fn connect(config: &DbConfig) -> DbResult<Client> {
    info!(
        database = %config.database_name,
        collection = %config.collection_name,
        "Initializing MongoDB client"
    );

    let mut options = ClientOptions::parse(&config.uri)
        .await
        .map_err(DbError::from_parse)?;
    if let Some(app_name) = &config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;
    debug!("MongoDB client created");
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::future::join_all;

    #[test]
    fn test_config_builder() {
        let config = DbConfig::new("mongodb://localhost:27017")
            .database("other")
            .collection("things")
            .app_name("stock-test");

        assert_eq!(config.uri, "mongodb://localhost:27017");
        assert_eq!(config.database_name, "other");
        assert_eq!(config.collection_name, "things");
        assert_eq!(config.app_name.as_deref(), Some("stock-test"));
    }

    #[test]
    fn test_config_defaults() {
        let config = DbConfig::new("mongodb://localhost:27017");
        assert_eq!(config.database_name, "stock");
        assert_eq!(config.collection_name, "inventory");
    }

    #[tokio::test]
    async fn test_client_is_memoized_across_clones() {
        // Client creation is lazy in the driver: no server is contacted here.
        let db = Database::new(DbConfig::new("mongodb://127.0.0.1:1"));
        let clone = db.clone();
        assert!(!db.is_connected());

        let first = db.client().await.unwrap() as *const Client;
        let second = clone.client().await.unwrap() as *const Client;

        assert!(clone.is_connected());
        assert_eq!(first, second);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_client_is_shared_by_concurrent_callers() {
        let db = Database::new(DbConfig::new("mongodb://127.0.0.1:1"));

        let clients = join_all((0..16).map(|_| {
            let db = db.clone();
            async move { db.client().await.map(|c| c as *const Client as usize) }
        }))
        .await;

        let first = *clients[0].as_ref().unwrap();
        for client in &clients {
            assert_eq!(*client.as_ref().unwrap(), first);
        }
        assert_eq!(db.client().await.unwrap() as *const Client as usize, first);
    }

    #[tokio::test]
    async fn test_invalid_uri_is_not_memoized() {
        let db = Database::new(DbConfig::new("not-a-uri"));

        let err = db.client().await.unwrap_err();
        assert!(matches!(err, DbError::InvalidUri(_)));
        assert!(err.is_fatal());
        assert!(!db.is_connected());
    }
}
