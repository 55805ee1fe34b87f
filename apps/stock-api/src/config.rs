//! Stock API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Only the connection string is required.

use std::env;
use std::net::{IpAddr, SocketAddr};

use axum::http::HeaderValue;
use stock_core::{DEFAULT_DATABASE, INVENTORY_COLLECTION};

/// Stock API configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// MongoDB connection string
    pub mongodb_uri: String,

    /// Database name
    pub database_name: String,

    /// Collection holding product documents
    pub collection_name: String,

    /// Listen address
    pub bind_addr: IpAddr,

    /// Listen port
    pub port: u16,

    /// Allowed CORS origin; any origin when unset
    pub cors_origin: Option<String>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mongodb_uri = lookup("MONGODB_URI")
            .filter(|uri| !uri.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingRequired("MONGODB_URI".to_string()))?;

        let config = ApiConfig {
            mongodb_uri,

            database_name: lookup("STOCK_DB_NAME").unwrap_or_else(|| DEFAULT_DATABASE.to_string()),

            collection_name: lookup("STOCK_COLLECTION")
                .unwrap_or_else(|| INVENTORY_COLLECTION.to_string()),

            bind_addr: lookup("STOCK_BIND_ADDR")
                .unwrap_or_else(|| "0.0.0.0".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STOCK_BIND_ADDR".to_string()))?,

            port: lookup("STOCK_PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STOCK_PORT".to_string()))?,

            cors_origin: lookup("STOCK_CORS_ORIGIN"),
        };

        if let Some(origin) = &config.cors_origin {
            if HeaderValue::from_str(origin).is_err() {
                return Err(ConfigError::InvalidValue("STOCK_CORS_ORIGIN".to_string()));
            }
        }

        Ok(config)
    }

    /// Address the server binds to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::from_lookup(lookup(&[("MONGODB_URI", "mongodb://localhost")])).unwrap();

        assert_eq!(config.database_name, "stock");
        assert_eq!(config.collection_name, "inventory");
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
        assert!(config.cors_origin.is_none());
    }

    #[test]
    fn test_missing_uri_is_fatal() {
        let err = ApiConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired(ref v) if v == "MONGODB_URI"));

        let err = ApiConfig::from_lookup(lookup(&[("MONGODB_URI", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired(_)));
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_lookup(lookup(&[
            ("MONGODB_URI", "mongodb://db:27017"),
            ("STOCK_DB_NAME", "shop"),
            ("STOCK_COLLECTION", "items"),
            ("STOCK_BIND_ADDR", "127.0.0.1"),
            ("STOCK_PORT", "8080"),
            ("STOCK_CORS_ORIGIN", "http://localhost:5173"),
        ]))
        .unwrap();

        assert_eq!(config.database_name, "shop");
        assert_eq!(config.collection_name, "items");
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.cors_origin.as_deref(), Some("http://localhost:5173"));
    }

    #[test]
    fn test_invalid_port() {
        let err = ApiConfig::from_lookup(lookup(&[
            ("MONGODB_URI", "mongodb://localhost"),
            ("STOCK_PORT", "abc"),
        ]))
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for STOCK_PORT");
    }
}
