//! # Product Repository
//!
//! MongoDB-backed [`InventoryStore`].
//!
//! ## Slug Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Slug Search Works                                │
//! │                                                                         │
//! │  User types: "wid"                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SlugQuery::pattern() → "wid" (metacharacters escaped)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  aggregate([{ $match: { $or: [                                         │
//! │      { slug: { $regex: "wid", $options: "i" } }                        │
//! │  ] } }])                                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │ inventory                               │                           │
//! │  │ widget       | 5  | 100                 │ ← MATCH                   │
//! │  │ Widget-Blue  | 2  | 120                 │ ← MATCH                   │
//! │  │ gadget       | 9  | 40                  │                           │
//! │  └─────────────────────────────────────────┘                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! An empty query produces an empty pattern, which matches every document
//! with a string slug.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use tracing::debug;

use crate::document::{self, ProductDocument, ID_FIELD};
use crate::error::DbResult;
use crate::pool::Database;
use crate::repository::{AdjustOutcome, InventoryStore};
use stock_core::SlugQuery;

/// Repository for product documents in MongoDB.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let everything = repo.list().await?;
/// let widgets = repo.search(&SlugQuery::new("wid")).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    db: Database,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(db: Database) -> Self {
        ProductRepository { db }
    }

    /// Counts documents in the collection (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<u64> {
        let collection = self.db.inventory().await?;
        Ok(collection.count_documents(doc! {}).await?)
    }
}

/// Builds the aggregate `$match` stage for a slug query.
pub fn search_pipeline(query: &SlugQuery) -> Vec<Document> {
    vec![doc! {
        "$match": {
            "$or": [
                { "slug": { "$regex": query.pattern(), "$options": "i" } },
            ]
        }
    }]
}

#[async_trait]
impl InventoryStore for ProductRepository {
    async fn list(&self) -> DbResult<Vec<ProductDocument>> {
        debug!("Listing products");

        let collection = self.db.inventory().await?;
        let documents: Vec<Document> = collection.find(doc! {}).await?.try_collect().await?;

        debug!(count = documents.len(), "List returned products");
        Ok(documents.into_iter().map(document::from_bson).collect())
    }

    async fn insert(&self, mut doc: ProductDocument) -> DbResult<ProductDocument> {
        debug!(slug = ?document::slug_of(&doc), "Inserting product");

        let collection = self.db.inventory().await?;
        let bson_doc = document::to_bson(&doc)?;
        let result = collection.insert_one(bson_doc).await?;

        doc.insert(ID_FIELD.to_string(), document::id_to_json(result.inserted_id));
        Ok(doc)
    }

    async fn search(&self, query: &SlugQuery) -> DbResult<Vec<ProductDocument>> {
        debug!(query = %query.as_str(), "Searching products");

        let collection = self.db.inventory().await?;
        let documents: Vec<Document> = collection
            .aggregate(search_pipeline(query))
            .await?
            .try_collect()
            .await?;

        debug!(count = documents.len(), "Search returned products");
        Ok(documents.into_iter().map(document::from_bson).collect())
    }

    async fn set_quantity(&self, slug: &str, quantity: i64) -> DbResult<AdjustOutcome> {
        debug!(slug = %slug, quantity = %quantity, "Updating quantity");

        let collection = self.db.inventory().await?;
        let result = collection
            .update_one(
                doc! { "slug": slug },
                doc! { "$set": { "quantity": quantity } },
            )
            .await?;

        Ok(AdjustOutcome {
            matched: result.matched_count,
            modified: result.modified_count,
        })
    }

    async fn health_check(&self) -> bool {
        self.db.health_check().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_pipeline_escapes_query() {
        let pipeline = search_pipeline(&SlugQuery::new("a.b"));
        assert_eq!(pipeline.len(), 1);

        let stage = pipeline[0].get_document("$match").unwrap();
        let clauses = stage.get_array("$or").unwrap();
        let clause = clauses[0].as_document().unwrap();
        let slug = clause.get_document("slug").unwrap();

        assert_eq!(slug.get_str("$regex").unwrap(), r"a\.b");
        assert_eq!(slug.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_search_pipeline_empty_query_is_empty_pattern() {
        let pipeline = search_pipeline(&SlugQuery::default());
        let stage = pipeline[0].get_document("$match").unwrap();
        let clause = stage.get_array("$or").unwrap()[0].as_document().unwrap().clone();
        assert_eq!(clause.get_document("slug").unwrap().get_str("$regex").unwrap(), "");
    }
}
