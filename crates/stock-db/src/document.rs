//! # Document Conversion
//!
//! Products are schema-free. Handlers pass them around as JSON objects and
//! the Mongo repository converts at the edge.
//!
//! ```text
//! JSON object ──bson::to_document──► BSON Document ──► insert_one
//! BSON Document ──_id ObjectId → hex──► relaxed extended JSON ──► JSON object
//! ```

use mongodb::bson::{self, Bson, Document};
use serde_json::{Map, Value};

use crate::error::DbResult;

/// A product as stored: any JSON object, usually with `slug`, `quantity`, `price`.
pub type ProductDocument = Map<String, Value>;

/// Field holding the store-assigned identifier.
pub const ID_FIELD: &str = "_id";

/// Field holding the product slug.
pub const SLUG_FIELD: &str = "slug";

/// Field holding the quantity in stock.
pub const QUANTITY_FIELD: &str = "quantity";

/// Converts a JSON object into a BSON document for writing.
pub fn to_bson(doc: &ProductDocument) -> DbResult<Document> {
    Ok(bson::to_document(doc)?)
}

/// Converts a stored BSON document into a JSON object.
///
/// An ObjectId `_id` becomes its hex string; every other value uses relaxed
/// extended JSON.
pub fn from_bson(mut doc: Document) -> ProductDocument {
    let hex_id = match doc.get(ID_FIELD) {
        Some(Bson::ObjectId(oid)) => Some(oid.to_hex()),
        _ => None,
    };
    if let Some(hex) = hex_id {
        doc.insert(ID_FIELD, hex);
    }

    match Bson::Document(doc).into_relaxed_extjson() {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Renders a store-assigned id the way [`from_bson`] renders `_id`.
pub fn id_to_json(id: Bson) -> Value {
    match id {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        other => other.into_relaxed_extjson(),
    }
}

/// Returns the slug of a document when it is a string.
pub fn slug_of(doc: &ProductDocument) -> Option<&str> {
    doc.get(SLUG_FIELD).and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};
    use serde_json::json;

    #[test]
    fn test_from_bson_renders_object_id_as_hex() {
        let oid = ObjectId::new();
        let stored = doc! { "_id": oid, "slug": "widget", "quantity": 5_i64, "price": 100.5 };

        let json = from_bson(stored);

        assert_eq!(json["_id"], json!(oid.to_hex()));
        assert_eq!(json["slug"], json!("widget"));
        assert_eq!(json["quantity"], json!(5));
        assert_eq!(json["price"], json!(100.5));
    }

    #[test]
    fn test_to_bson_keeps_extra_fields() {
        let input = json!({ "slug": "widget", "quantity": "5", "tags": ["a", "b"] });
        let Value::Object(map) = input else {
            panic!("expected object");
        };

        let document = to_bson(&map).unwrap();

        assert_eq!(document.get_str("slug").unwrap(), "widget");
        assert_eq!(document.get_str("quantity").unwrap(), "5");
        assert_eq!(document.get_array("tags").unwrap().len(), 2);
    }

    #[test]
    fn test_id_to_json() {
        let oid = ObjectId::new();
        assert_eq!(id_to_json(Bson::ObjectId(oid)), json!(oid.to_hex()));
        assert_eq!(id_to_json(Bson::String("custom".into())), json!("custom"));
    }
}
