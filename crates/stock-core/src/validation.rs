//! # Validation Module
//!
//! Input validation for the add-product form.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Client controller (stock-client)                             │
//! │  ├── Form fields arrive as raw strings                                 │
//! │  └── THIS MODULE: parse + check before posting                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: API server (stock-api)                                       │
//! │  ├── Inserts are schema-free (any JSON object)                         │
//! │  └── Adjustments refuse to go below zero                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: MongoDB                                                      │
//! │  └── Indexes/validators, if an operator configures them                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stock_core::validation::parse_product_form;
//!
//! let product = parse_product_form("widget", "5", "100").unwrap();
//! assert_eq!(product.quantity, 5);
//! assert!(parse_product_form("", "5", "100").is_err());
//! ```

use crate::error::ValidationError;
use crate::types::NewProduct;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest slug the form accepts.
pub const MAX_SLUG_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a slug: non-empty after trimming, at most [`MAX_SLUG_LEN`] chars.
pub fn validate_slug(slug: &str) -> ValidationResult<()> {
    let slug = slug.trim();

    if slug.is_empty() {
        return Err(ValidationError::Required {
            field: "slug".to_string(),
        });
    }

    if slug.chars().count() > MAX_SLUG_LEN {
        return Err(ValidationError::TooLong {
            field: "slug".to_string(),
            max: MAX_SLUG_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a quantity field: a non-negative integer.
pub fn parse_quantity(raw: &str) -> ValidationResult<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    let qty: i64 = raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "quantity".to_string(),
        reason: "must be a whole number".to_string(),
    })?;

    validate_quantity(qty)?;
    Ok(qty)
}

/// Validates a quantity value (zero allowed).
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }
    Ok(())
}

/// Parses a price field: a finite, non-negative number.
pub fn parse_price(raw: &str) -> ValidationResult<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    let price: f64 = raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: "must be a number".to_string(),
    })?;

    if !price.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    Ok(price)
}

// =============================================================================
// Form
// =============================================================================

/// Validates the three raw form fields and builds a [`NewProduct`].
pub fn parse_product_form(slug: &str, quantity: &str, price: &str) -> ValidationResult<NewProduct> {
    validate_slug(slug)?;
    let quantity = parse_quantity(quantity)?;
    let price = parse_price(price)?;

    Ok(NewProduct {
        slug: slug.trim().to_string(),
        quantity,
        price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_slug() {
        assert!(validate_slug("widget").is_ok());
        assert!(validate_slug("blue widget").is_ok());

        assert!(validate_slug("").is_err());
        assert!(validate_slug("   ").is_err());
        assert!(validate_slug(&"a".repeat(MAX_SLUG_LEN + 1)).is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("0").unwrap(), 0);
        assert_eq!(parse_quantity(" 42 ").unwrap(), 42);

        assert_eq!(
            parse_quantity("-1").unwrap_err(),
            ValidationError::Negative {
                field: "quantity".to_string()
            }
        );
        assert!(parse_quantity("1.5").is_err());
        assert!(parse_quantity("").is_err());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("0").unwrap(), 0.0);
        assert_eq!(parse_price("19.99").unwrap(), 19.99);

        assert!(parse_price("-0.5").is_err());
        assert!(parse_price("NaN").is_err());
        assert!(parse_price("inf").is_err());
        assert!(parse_price("ten").is_err());
    }

    #[test]
    fn test_parse_product_form_trims_slug() {
        let product = parse_product_form("  widget ", "5", "100").unwrap();
        assert_eq!(product.slug, "widget");
        assert_eq!(product.quantity, 5);
        assert_eq!(product.price, 100.0);
    }
}
