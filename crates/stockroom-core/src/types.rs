//! # Domain Types
//!
//! The product record and the two shapes used to write it.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Product      │   │   NewProduct    │   │   ProductChanges    │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id (i64)       │   │  name           │   │  name?              │   │
//! │  │  name           │   │  quantity       │   │  quantity?          │   │
//! │  │  quantity       │   │  price          │   │  price?             │   │
//! │  │  price          │   │  picture?       │   │  picture?           │   │
//! │  │  picture?       │   │                 │   │                     │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! │     read model            Create input           Update input          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `id` is assigned by the store on insert and never changes afterwards.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::validation::{
    validate_picture, validate_product_name, validate_quantity, ValidationResult,
};

/// Identifier assigned by the store (SQLite rowid, starts at 1).
pub type ProductId = i64;

// =============================================================================
// Product
// =============================================================================

/// A product row as stored in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Product {
    /// Store-assigned identifier.
    pub id: ProductId,

    /// Display name shown on the list and detail screens.
    pub name: String,

    /// Units in stock. Never negative.
    pub quantity: i64,

    /// Price in the smallest currency unit.
    pub price: i64,

    /// JPEG-encoded picture bytes.
    pub picture: Option<Vec<u8>>,
}

impl Product {
    /// Checks if the product carries a picture.
    #[inline]
    pub fn has_picture(&self) -> bool {
        self.picture.is_some()
    }

    /// Checks if the product is out of stock.
    #[inline]
    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }
}

// =============================================================================
// New Product
// =============================================================================

/// Everything needed to create a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewProduct {
    pub name: String,
    pub quantity: i64,
    pub price: i64,
    pub picture: Option<Vec<u8>>,
}

impl NewProduct {
    /// Creates a product without a picture.
    pub fn new(name: impl Into<String>, quantity: i64, price: i64) -> Self {
        NewProduct {
            name: name.into(),
            quantity,
            price,
            picture: None,
        }
    }

    /// Attaches picture bytes.
    pub fn with_picture(mut self, picture: Vec<u8>) -> Self {
        self.picture = Some(picture);
        self
    }

    /// Checks every field against the product rules.
    ///
    /// ## Rules
    /// - name must not be empty (after trimming)
    /// - quantity must not be negative
    /// - picture, when present, must not be empty
    ///
    /// Any price is accepted; discounts and credits may be negative.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_product_name(&self.name)?;
        validate_quantity(self.quantity)?;
        if let Some(picture) = &self.picture {
            validate_picture(picture)?;
        }
        Ok(())
    }
}

// =============================================================================
// Product Changes
// =============================================================================

/// A partial update. Only `Some` fields are written; the rest keep their
/// stored values.
///
/// ## Example
/// ```rust
/// use stockroom_core::ProductChanges;
///
/// // Quantity-only change from the list screen's sale button
/// let changes = ProductChanges::default().quantity(9);
/// assert!(changes.name.is_none());
/// assert_eq!(changes.quantity, Some(9));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<i64>,
    pub picture: Option<Vec<u8>>,
}

impl ProductChanges {
    /// Sets a new name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a new quantity.
    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Sets a new price.
    pub fn price(mut self, price: i64) -> Self {
        self.price = Some(price);
        self
    }

    /// Replaces the picture.
    pub fn picture(mut self, picture: Vec<u8>) -> Self {
        self.picture = Some(picture);
        self
    }

    /// Checks the supplied fields with the same rules as [`NewProduct::validate`].
    pub fn validate(&self) -> ValidationResult<()> {
        if let Some(name) = &self.name {
            validate_product_name(name)?;
        }
        if let Some(quantity) = self.quantity {
            validate_quantity(quantity)?;
        }
        if let Some(picture) = &self.picture {
            validate_picture(picture)?;
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
