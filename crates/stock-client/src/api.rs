//! # Inventory API
//!
//! The four calls the controller makes, behind a trait so the controller can
//! be driven without a server.
//!
//! ```text
//! InventoryView ──► dyn InventoryApi
//!                     ├── HttpInventoryApi  ──reqwest──► stock-api
//!                     └── (test doubles)
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use stock_core::wire::{AdjustEnvelope, ErrorEnvelope, ProductEnvelope, ProductsEnvelope};
use stock_core::{AdjustRequest, NewProduct, Product};

use crate::error::{ClientError, ClientResult};

/// Calls the controller issues against the server.
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// `GET /api/product`
    async fn list_products(&self) -> ClientResult<Vec<Product>>;

    /// `POST /api/product`
    async fn add_product(&self, product: &NewProduct) -> ClientResult<Product>;

    /// `GET /api/search?query=`
    async fn search(&self, query: &str) -> ClientResult<Vec<Product>>;

    /// `POST /api/action`
    async fn adjust(&self, request: &AdjustRequest) -> ClientResult<AdjustEnvelope>;
}

// =============================================================================
// HTTP implementation
// =============================================================================

/// [`InventoryApi`] over HTTP.
///
/// ## Example
/// ```rust,ignore
/// let api = HttpInventoryApi::new("http://localhost:3000");
/// let products = api.list_products().await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpInventoryApi {
    base_url: String,
    http: Client,
}

impl HttpInventoryApi {
    /// Creates a client for the server at `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Creates a client reusing an existing `reqwest::Client`.
    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        HttpInventoryApi { base_url, http }
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Decodes a success body, or turns `{ success: false, error }` into
/// [`ClientError::Api`].
async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    let body = response.bytes().await?;

    if status.is_success() {
        return Ok(serde_json::from_slice(&body)?);
    }

    let message = match serde_json::from_slice::<ErrorEnvelope>(&body) {
        Ok(envelope) => envelope.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
    };

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Converts listed documents one by one.
///
/// The store accepts any JSON object, so a single document may lack a slug
/// or carry a quantity that is not a number. Such documents are skipped
/// and the rest of the list is kept.
fn products_from(documents: Vec<Value>) -> Vec<Product> {
    documents
        .into_iter()
        .filter_map(|document| match serde_json::from_value::<Product>(document) {
            Ok(product) => Some(product),
            Err(e) => {
                warn!(error = %e, "Skipping undecodable product");
                None
            }
        })
        .collect()
}

#[async_trait]
impl InventoryApi for HttpInventoryApi {
    async fn list_products(&self) -> ClientResult<Vec<Product>> {
        debug!("GET /api/product");
        let response = self.http.get(self.url("/api/product")).send().await?;
        let envelope: ProductsEnvelope<Value> = decode(response).await?;
        Ok(products_from(envelope.products))
    }

    async fn add_product(&self, product: &NewProduct) -> ClientResult<Product> {
        debug!(slug = %product.slug, "POST /api/product");
        let response = self
            .http
            .post(self.url("/api/product"))
            .json(product)
            .send()
            .await?;
        let envelope: ProductEnvelope<Product> = decode(response).await?;
        Ok(envelope.product)
    }

    async fn search(&self, query: &str) -> ClientResult<Vec<Product>> {
        debug!(query = %query, "GET /api/search");
        let response = self
            .http
            .get(self.url("/api/search"))
            .query(&[("query", query)])
            .send()
            .await?;
        let envelope: ProductsEnvelope<Value> = decode(response).await?;
        Ok(products_from(envelope.products))
    }

    async fn adjust(&self, request: &AdjustRequest) -> ClientResult<AdjustEnvelope> {
        debug!(slug = %request.slug, action = %request.action, "POST /api/action");
        let response = self
            .http
            .post(self.url("/api/action"))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = HttpInventoryApi::new("http://localhost:3000/");
        assert_eq!(api.base_url(), "http://localhost:3000");
        assert_eq!(api.url("/api/product"), "http://localhost:3000/api/product");
    }

    #[test]
    fn test_loose_documents_do_not_hide_the_rest() {
        let products = products_from(vec![
            json!({ "_id": "a1", "slug": "widget", "quantity": 5, "price": 100 }),
            json!({ "_id": "b2", "slug": "bolt", "quantity": 3 }),
            json!({ "_id": "c3", "slug": "nut", "quantity": null, "price": 1 }),
            json!({ "_id": { "$oid": "652f1c2e9b1d8a0012345678" }, "slug": "odd", "quantity": 1, "price": 1 }),
            json!({ "quantity": 1, "price": 1 }),
        ]);

        let slugs: Vec<&str> = products.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["widget", "bolt"]);
        assert_eq!(products[1].price, 0.0);
    }
}
