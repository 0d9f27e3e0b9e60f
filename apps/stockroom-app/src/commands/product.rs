//! # Product Commands
//!
//! Commands behind the list, detail and editor screens.
//!
//! ## Editor Save Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Editor Save Flow                                     │
//! │                                                                         │
//! │  User fills: name "Widget", quantity "10", price "500", picture        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  create_product(CreateProductInput)                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  name trimmed, must not be blank          │──► VALIDATION_ERROR     │
//! │  │  quantity / price parsed as whole >= 0    │──► VALIDATION_ERROR     │
//! │  │  picture required, must be a JPEG         │──► VALIDATION_ERROR     │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductRepository::create ──► ProductDto { id: 1, ... }               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, DbState};
use stockroom_core::validation::{is_jpeg, parse_price, parse_quantity, validate_product_name};
use stockroom_core::{CoreError, NewProduct, Product, ProductChanges, ProductId, ValidationError};

// =============================================================================
// DTOs
// =============================================================================

/// Full product for the detail and editor screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: ProductId,
    pub name: String,
    pub quantity: i64,
    /// Price in the smallest currency unit
    pub price: i64,
    /// JPEG bytes, if a picture was saved
    pub picture: Option<Vec<u8>>,
    pub out_of_stock: bool,
}

impl From<Product> for ProductDto {
    fn from(p: Product) -> Self {
        ProductDto {
            out_of_stock: p.is_out_of_stock(),
            id: p.id,
            name: p.name,
            quantity: p.quantity,
            price: p.price,
            picture: p.picture,
        }
    }
}

/// One row of the list screen.
///
/// The picture is left out; rows only show text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListItemDto {
    pub id: ProductId,
    pub name: String,
    pub quantity: i64,
    /// Formatted for display, e.g. `$5.00`
    pub price: String,
    pub out_of_stock: bool,
}

impl ProductListItemDto {
    pub fn new(product: Product, config: &ConfigState) -> Self {
        ProductListItemDto {
            id: product.id,
            price: config.format_price(product.price),
            quantity: product.quantity,
            out_of_stock: product.is_out_of_stock(),
            name: product.name,
        }
    }
}

/// Editor screen input, exactly as typed. The picture is required.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductInput {
    pub name: String,
    pub quantity: String,
    pub price: String,
    #[serde(default)]
    pub picture: Option<Vec<u8>>,
}

/// Detail screen save: the adjusted quantity and an optional new picture.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveDetailInput {
    pub quantity: i64,
    #[serde(default)]
    pub picture: Option<Vec<u8>>,
}

/// Partial update; absent fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub picture: Option<Vec<u8>>,
}

impl From<UpdateProductInput> for ProductChanges {
    fn from(input: UpdateProductInput) -> Self {
        ProductChanges {
            name: input.name,
            quantity: input.quantity,
            price: input.price,
            picture: input.picture,
        }
    }
}

// =============================================================================
// Shared helpers
// =============================================================================

/// Loads a product or reports it as not found.
pub(crate) async fn fetch_product(db: &DbState, id: ProductId) -> Result<Product, ApiError> {
    db.products()
        .get_by_id(id)
        .await?
        .ok_or_else(|| CoreError::ProductNotFound(id).into())
}

/// Applies `changes`, then returns the stored row.
pub(crate) async fn apply_changes(
    db: &DbState,
    id: ProductId,
    changes: &ProductChanges,
) -> Result<Product, ApiError> {
    let rows = db.products().update(id, changes).await?;
    if rows == 0 {
        return Err(CoreError::ProductNotFound(id).into());
    }
    fetch_product(db, id).await
}

fn check_picture(picture: Option<&[u8]>) -> Result<(), ApiError> {
    match picture {
        Some(bytes) if !is_jpeg(bytes) => Err(ApiError::validation("picture must be a JPEG image")),
        _ => Ok(()),
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Lists all products for the list screen, in insertion order.
pub async fn list_products(
    db: &DbState,
    config: &ConfigState,
) -> Result<Vec<ProductListItemDto>, ApiError> {
    let start = Instant::now();

    let rows: Vec<ProductListItemDto> = db
        .products()
        .list()
        .await?
        .into_iter()
        .map(|p| ProductListItemDto::new(p, config))
        .collect();

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = rows.len(),
        "list_products complete"
    );

    Ok(rows)
}

/// Loads one product for the detail screen.
///
/// ## Returns
/// The product if found, or a `NOT_FOUND` error
pub async fn get_product(db: &DbState, id: ProductId) -> Result<ProductDto, ApiError> {
    debug!(id, "get_product command");
    Ok(fetch_product(db, id).await?.into())
}

/// Saves a new product from the editor screen.
///
/// Fields are checked in screen order (name, quantity, price, picture) and
/// the first problem is reported. Nothing is written unless all pass.
pub async fn create_product(
    db: &DbState,
    input: CreateProductInput,
) -> Result<ProductDto, ApiError> {
    debug!(name = %input.name, "create_product command");

    let name = input.name.trim();
    validate_product_name(name)?;
    let quantity = parse_quantity(&input.quantity)?;
    let price = parse_price(&input.price)?;
    let picture = input.picture.ok_or_else(|| ValidationError::required("picture"))?;
    check_picture(Some(picture.as_slice()))?;

    let product = NewProduct::new(name, quantity, price).with_picture(picture);

    let id = db.products().create(&product).await?;
    info!(id, name = %product.name, "Product created");

    Ok(Product {
        id,
        name: product.name,
        quantity: product.quantity,
        price: product.price,
        picture: product.picture,
    }
    .into())
}

/// Saves the detail screen: the quantity shown after any +/- presses, and
/// a new picture if one was picked.
pub async fn save_product_detail(
    db: &DbState,
    id: ProductId,
    input: SaveDetailInput,
) -> Result<ProductDto, ApiError> {
    debug!(id, quantity = input.quantity, "save_product_detail command");

    check_picture(input.picture.as_deref())?;

    let mut changes = ProductChanges::default().quantity(input.quantity);
    if let Some(picture) = input.picture {
        changes = changes.picture(picture);
    }

    Ok(apply_changes(db, id, &changes).await?.into())
}

/// Generic partial update.
pub async fn update_product(
    db: &DbState,
    id: ProductId,
    input: UpdateProductInput,
) -> Result<ProductDto, ApiError> {
    debug!(id, "update_product command");

    check_picture(input.picture.as_deref())?;

    let changes = ProductChanges::from(input);
    Ok(apply_changes(db, id, &changes).await?.into())
}

/// Deletes one product.
///
/// Deleting an id that is already gone reports `NOT_FOUND`.
pub async fn delete_product(db: &DbState, id: ProductId) -> Result<(), ApiError> {
    debug!(id, "delete_product command");

    if db.products().delete(id).await? == 0 {
        return Err(CoreError::ProductNotFound(id).into());
    }

    info!(id, "Product deleted");
    Ok(())
}

/// Deletes every product. Returns how many were removed (0 when already empty).
pub async fn delete_all_products(db: &DbState) -> Result<u64, ApiError> {
    let removed = db.products().delete_all().await?;
    info!(removed, "All products deleted");
    Ok(removed)
}
