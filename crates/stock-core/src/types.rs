//! # Domain Types
//!
//! Core domain types used throughout the stock inventory.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   NewProduct    │   │  AdjustRequest  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  _id (store)    │   │  slug           │   │  action         │       │
//! │  │  slug           │   │  quantity       │   │  slug           │       │
//! │  │  quantity       │   │  price          │   │  initialQuantity│       │
//! │  │  price          │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                        ┌─────────────────┐                              │
//! │                        │  AdjustAction   │                              │
//! │                        │  Plus | Minus   │                              │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Loose Documents
//! Products live in a document store without a schema. The web form
//! posted every field as a string, so `quantity` and `price` decode from
//! either a JSON number or a numeric string. A document missing either
//! field decodes with zero in its place.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Product
// =============================================================================

/// A product record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Store-assigned identifier (hex ObjectId for store-generated ids).
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Human-readable product identifier.
    pub slug: String,

    /// Units in stock; zero when the document has none.
    #[serde(default, deserialize_with = "lenient_i64")]
    #[ts(type = "number")]
    pub quantity: i64,

    /// Unit price; zero when the document has none.
    #[serde(default, deserialize_with = "lenient_f64")]
    #[ts(type = "number")]
    pub price: f64,
}

// =============================================================================
// New Product
// =============================================================================

/// A validated product payload ready to be posted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewProduct {
    pub slug: String,
    #[ts(type = "number")]
    pub quantity: i64,
    pub price: f64,
}

// =============================================================================
// Adjust Action
// =============================================================================

/// Direction of a single-unit quantity adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum AdjustAction {
    Plus,
    Minus,
}

impl AdjustAction {
    /// Applies the action to a quantity without any floor.
    #[inline]
    pub fn apply(self, quantity: i64) -> i64 {
        match self {
            AdjustAction::Plus => quantity.saturating_add(1),
            AdjustAction::Minus => quantity.saturating_sub(1),
        }
    }

    /// Applies the action, refusing to go below zero.
    pub fn checked_apply(self, slug: &str, quantity: i64) -> CoreResult<i64> {
        let next = self.apply(quantity);
        if next < 0 {
            return Err(CoreError::InsufficientStock {
                slug: slug.to_string(),
                available: quantity,
            });
        }
        Ok(next)
    }
}

impl std::fmt::Display for AdjustAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdjustAction::Plus => write!(f, "plus"),
            AdjustAction::Minus => write!(f, "minus"),
        }
    }
}

// =============================================================================
// Adjust Request
// =============================================================================

/// Body of `POST /api/action`.
///
/// `initial_quantity` is the quantity the client saw before its optimistic
/// update; the server writes `initial_quantity ± 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AdjustRequest {
    pub action: AdjustAction,
    pub slug: String,
    #[serde(deserialize_with = "lenient_i64")]
    #[ts(type = "number")]
    pub initial_quantity: i64,
}

impl AdjustRequest {
    /// Quantity the store should hold after this request.
    pub fn target_quantity(&self) -> CoreResult<i64> {
        self.action.checked_apply(&self.slug, self.initial_quantity)
    }
}

// =============================================================================
// Lenient numeric decoding
// =============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Int(i64),
    Float(f64),
    Text(String),
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Int(n) => Ok(n),
        NumberOrString::Float(f) if f.fract() == 0.0 && f.is_finite() => Ok(f as i64),
        NumberOrString::Float(f) => Err(D::Error::custom(format!("expected an integer, got {f}"))),
        NumberOrString::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("expected an integer, got {s:?}"))),
    }
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Int(n) => Ok(n as f64),
        NumberOrString::Float(f) => Ok(f),
        NumberOrString::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("expected a number, got {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_decodes_numbers_and_strings() {
        let from_numbers: Product = serde_json::from_value(json!({
            "_id": "652f1c2e9b1d8a0012345678",
            "slug": "widget",
            "quantity": 5,
            "price": 100
        }))
        .unwrap();
        assert_eq!(from_numbers.quantity, 5);
        assert_eq!(from_numbers.price, 100.0);
        assert_eq!(from_numbers.id.as_deref(), Some("652f1c2e9b1d8a0012345678"));

        let from_form: Product = serde_json::from_value(json!({
            "slug": "gadget",
            "quantity": "12",
            "price": "9.5",
            "colour": "red"
        }))
        .unwrap();
        assert_eq!(from_form.quantity, 12);
        assert_eq!(from_form.price, 9.5);
        assert_eq!(from_form.id, None);
    }

    #[test]
    fn test_product_rejects_non_numeric_quantity() {
        let result = serde_json::from_value::<Product>(json!({
            "slug": "widget",
            "quantity": "lots",
            "price": 1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_product_missing_numbers_default_to_zero() {
        let product: Product = serde_json::from_value(json!({
            "slug": "bolt",
            "quantity": 3
        }))
        .unwrap();
        assert_eq!(product.quantity, 3);
        assert_eq!(product.price, 0.0);

        let result = serde_json::from_value::<Product>(json!({
            "slug": "bolt",
            "quantity": null,
            "price": 1
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_adjust_action_apply() {
        assert_eq!(AdjustAction::Plus.apply(5), 6);
        assert_eq!(AdjustAction::Minus.apply(5), 4);
        assert_eq!(AdjustAction::Minus.apply(0), -1);
    }

    #[test]
    fn test_adjust_action_checked_apply_floors_at_zero() {
        assert_eq!(AdjustAction::Minus.checked_apply("widget", 1).unwrap(), 0);
        let err = AdjustAction::Minus.checked_apply("widget", 0).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock { available: 0, .. }
        ));
    }

    #[test]
    fn test_adjust_request_wire_shape() {
        let request: AdjustRequest = serde_json::from_value(json!({
            "action": "plus",
            "slug": "widget",
            "initialQuantity": 5
        }))
        .unwrap();
        assert_eq!(request.action, AdjustAction::Plus);
        assert_eq!(request.target_quantity().unwrap(), 6);

        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(encoded["initialQuantity"], 5);
        assert_eq!(encoded["action"], "plus");
    }

    #[test]
    fn test_product_serializes_id_as_underscore_id() {
        let product = Product {
            id: Some("abc".to_string()),
            slug: "widget".to_string(),
            quantity: 1,
            price: 2.0,
        };
        let encoded = serde_json::to_value(&product).unwrap();
        assert_eq!(encoded["_id"], "abc");
        assert!(encoded.get("id").is_none());
    }
}
