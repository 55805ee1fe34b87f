//! # In-Memory Store
//!
//! An [`InventoryStore`] kept in process memory. Matches the MongoDB
//! repository's observable behavior: insertion order, generated hex ids,
//! case-insensitive slug search, and `updateOne` semantics.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::document::{slug_of, ProductDocument, ID_FIELD, QUANTITY_FIELD};
use crate::error::{DbError, DbResult};
use crate::repository::{AdjustOutcome, InventoryStore};
use stock_core::SlugQuery;

/// Process-local product collection.
#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: RwLock<Vec<ProductDocument>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    /// True when nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }
}

#[async_trait]
impl InventoryStore for MemoryStore {
    async fn list(&self) -> DbResult<Vec<ProductDocument>> {
        Ok(self.docs.read().await.clone())
    }

    async fn insert(&self, mut doc: ProductDocument) -> DbResult<ProductDocument> {
        if !doc.contains_key(ID_FIELD) {
            doc.insert(ID_FIELD.to_string(), Value::String(ObjectId::new().to_hex()));
        }

        debug!(slug = ?slug_of(&doc), "Inserting product in memory");
        self.docs.write().await.push(doc.clone());
        Ok(doc)
    }

    async fn search(&self, query: &SlugQuery) -> DbResult<Vec<ProductDocument>> {
        let regex = query
            .to_regex()
            .map_err(|e| DbError::QueryFailed(e.to_string()))?;

        let docs = self.docs.read().await;
        Ok(docs
            .iter()
            .filter(|doc| slug_of(doc).is_some_and(|slug| regex.is_match(slug)))
            .cloned()
            .collect())
    }

    async fn set_quantity(&self, slug: &str, quantity: i64) -> DbResult<AdjustOutcome> {
        let mut docs = self.docs.write().await;
        let Some(doc) = docs.iter_mut().find(|doc| slug_of(doc) == Some(slug)) else {
            return Ok(AdjustOutcome {
                matched: 0,
                modified: 0,
            });
        };

        let next = Value::from(quantity);
        let modified = if doc.get(QUANTITY_FIELD) == Some(&next) {
            0
        } else {
            doc.insert(QUANTITY_FIELD.to_string(), next);
            1
        };

        Ok(AdjustOutcome {
            matched: 1,
            modified,
        })
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(slug: &str, quantity: i64) -> ProductDocument {
        match json!({ "slug": slug, "quantity": quantity, "price": 100 }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_lists_in_order() {
        let store = MemoryStore::new();
        let first = store.insert(product("widget", 5)).await.unwrap();
        store.insert(product("gadget", 1)).await.unwrap();

        let id = first["_id"].as_str().unwrap();
        assert_eq!(id.len(), 24);

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0]["slug"], "widget");
        assert_eq!(listed[1]["slug"], "gadget");
    }

    #[tokio::test]
    async fn test_insert_keeps_caller_id() {
        let store = MemoryStore::new();
        let mut doc = product("widget", 5);
        doc.insert("_id".into(), json!("custom-id"));

        let stored = store.insert(doc).await.unwrap();
        assert_eq!(stored["_id"], "custom-id");
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let store = MemoryStore::new();
        store.insert(product("Widget-Blue", 2)).await.unwrap();
        store.insert(product("gadget", 9)).await.unwrap();

        let hits = store.search(&SlugQuery::new("wid")).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0]["slug"], "Widget-Blue");

        let all = store.search(&SlugQuery::new("")).await.unwrap();
        assert_eq!(all.len(), 2);

        let none = store.search(&SlugQuery::new("zzz")).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_set_quantity_updates_first_match_only() {
        let store = MemoryStore::new();
        store.insert(product("widget", 5)).await.unwrap();
        store.insert(product("widget", 7)).await.unwrap();

        let outcome = store.set_quantity("widget", 6).await.unwrap();
        assert_eq!(outcome, AdjustOutcome { matched: 1, modified: 1 });

        let listed = store.list().await.unwrap();
        assert_eq!(listed[0]["quantity"], 6);
        assert_eq!(listed[1]["quantity"], 7);
    }

    #[tokio::test]
    async fn test_set_quantity_reports_no_match_and_no_change() {
        let store = MemoryStore::new();
        store.insert(product("widget", 5)).await.unwrap();

        let missing = store.set_quantity("gadget", 1).await.unwrap();
        assert_eq!(missing.matched, 0);

        let unchanged = store.set_quantity("widget", 5).await.unwrap();
        assert_eq!(unchanged, AdjustOutcome { matched: 1, modified: 0 });
    }
}
