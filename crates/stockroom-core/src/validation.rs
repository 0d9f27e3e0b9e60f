//! # Validation Module
//!
//! Input validation utilities for Stockroom.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Command layer (stockroom-app)                                │
//! │  ├── Text parsing (parse_quantity, parse_price)                        │
//! │  └── Picture format (is_jpeg)                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store (stockroom-db)                                         │
//! │  └── THIS MODULE: field rules before any write                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── CHECK (quantity >= 0)                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockroom_core::validation::{parse_quantity, validate_product_name};
//!
//! validate_product_name("Widget").unwrap();
//! assert_eq!(parse_quantity(" 12 ").unwrap(), 12);
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// JPEG start-of-image marker followed by the first marker prefix.
const JPEG_MAGIC: [u8; 3] = [0xFF, 0xD8, 0xFF];

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace only
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::required("name"));
    }

    Ok(())
}

/// Validates a stock quantity.
///
/// ## Rules
/// - Must be zero or more
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::negative("quantity"));
    }

    Ok(())
}

/// Validates a price typed on the editor screen.
///
/// The store itself accepts any price; only text input goes through this.
///
/// ## Example
/// ```rust
/// use stockroom_core::validation::validate_price;
///
/// assert!(validate_price(500).is_ok());
/// assert!(validate_price(0).is_ok());     // Free item
/// assert!(validate_price(-100).is_err());
/// ```
pub fn validate_price(price: i64) -> ValidationResult<()> {
    if price < 0 {
        return Err(ValidationError::negative("price"));
    }

    Ok(())
}

/// Validates picture bytes. An empty blob is treated as a missing picture.
pub fn validate_picture(picture: &[u8]) -> ValidationResult<()> {
    if picture.is_empty() {
        return Err(ValidationError::required("picture"));
    }

    Ok(())
}

/// Checks for the JPEG start-of-image marker.
pub fn is_jpeg(bytes: &[u8]) -> bool {
    bytes.starts_with(&JPEG_MAGIC)
}

// =============================================================================
// Text Input Parsing
// =============================================================================

/// Parses a quantity typed into a text field.
///
/// ## Rules
/// - Surrounding whitespace is ignored
/// - Empty input → `Required`
/// - Not a whole number → `InvalidFormat`
/// - Negative → `MustNotBeNegative`
pub fn parse_quantity(input: &str) -> ValidationResult<i64> {
    let quantity = parse_whole_number("quantity", input)?;
    validate_quantity(quantity)?;
    Ok(quantity)
}

/// Parses a price typed into a text field. Same rules as [`parse_quantity`].
pub fn parse_price(input: &str) -> ValidationResult<i64> {
    let price = parse_whole_number("price", input)?;
    validate_price(price)?;
    Ok(price)
}

fn parse_whole_number(field: &str, input: &str) -> ValidationResult<i64> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::required(field));
    }

    input
        .parse::<i64>()
        .map_err(|_| ValidationError::invalid_format(field, "must be a whole number"))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Widget").is_ok());
        assert!(validate_product_name(&"A".repeat(500)).is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(" \t ").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(0).is_ok());
        assert!(validate_quantity(i64::MAX).is_ok());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_picture() {
        assert!(validate_picture(&[0xFF, 0xD8, 0xFF, 0xE0]).is_ok());
        assert_eq!(
            validate_picture(&[]),
            Err(ValidationError::required("picture"))
        );
    }

    #[test]
    fn test_is_jpeg() {
        assert!(is_jpeg(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00]));
        assert!(!is_jpeg(&[0x89, b'P', b'N', b'G']));
        assert!(!is_jpeg(&[0xFF, 0xD8]));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("10"), Ok(10));
        assert_eq!(parse_quantity("  7 "), Ok(7));
        assert_eq!(parse_quantity(""), Err(ValidationError::required("quantity")));
        assert!(matches!(
            parse_quantity("ten"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert_eq!(
            parse_quantity("-3"),
            Err(ValidationError::negative("quantity"))
        );
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("500"), Ok(500));
        assert!(parse_price("5.00").is_err());
        assert_eq!(parse_price("   "), Err(ValidationError::required("price")));
        assert_eq!(parse_price("-1"), Err(ValidationError::negative("price")));
    }
}
