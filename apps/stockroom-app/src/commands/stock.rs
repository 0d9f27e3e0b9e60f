//! # Stock Commands
//!
//! The list row's sale button and the detail screen's +/- buttons.
//! Both persist immediately.
//!
//! ```text
//! quantity 3 ── sell_one ──► 2 ── sell_one ──► 1 ── sell_one ──► 0
//!                                                                │
//!                                     sell_one ──► 0 (no write) ◄┘
//! ```
//!
//! The new quantity is computed from the stored row, never from what the
//! screen last displayed, and clamped at zero before it is written.

use tracing::{debug, info};

use super::product::{apply_changes, fetch_product, ProductDto, ProductListItemDto};
use crate::error::ApiError;
use crate::state::{ConfigState, DbState};
use stockroom_core::stock::{adjust_quantity, decrement};
use stockroom_core::{ProductChanges, ProductId, StockAdjustment};

/// Sells one unit from the list screen.
///
/// A product already at 0 is returned unchanged and nothing is written.
pub async fn sell_one(
    db: &DbState,
    config: &ConfigState,
    id: ProductId,
) -> Result<ProductListItemDto, ApiError> {
    let product = fetch_product(db, id).await?;

    if product.is_out_of_stock() {
        debug!(id, "sell_one on out-of-stock product");
        return Ok(ProductListItemDto::new(product, config));
    }

    let quantity = decrement(product.quantity);
    let updated = apply_changes(db, id, &ProductChanges::default().quantity(quantity)).await?;

    info!(id, quantity = updated.quantity, "Sold one unit");
    Ok(ProductListItemDto::new(updated, config))
}

/// Applies one +/- press from the detail screen.
pub async fn adjust_stock(
    db: &DbState,
    id: ProductId,
    adjustment: StockAdjustment,
) -> Result<ProductDto, ApiError> {
    let product = fetch_product(db, id).await?;
    let quantity = adjust_quantity(product.quantity, adjustment);

    debug!(id, ?adjustment, from = product.quantity, to = quantity, "adjust_stock command");

    if quantity == product.quantity {
        return Ok(product.into());
    }

    let updated = apply_changes(db, id, &ProductChanges::default().quantity(quantity)).await?;
    Ok(updated.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::state;
    use crate::error::ErrorCode;
    use stockroom_core::NewProduct;

    async fn seed(db: &DbState, quantity: i64) -> ProductId {
        db.products()
            .create(&NewProduct::new("Widget", quantity, 500))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_sell_one_persists() {
        let (db, config) = state().await;
        let id = seed(&db, 2).await;

        let row = sell_one(&db, &config, id).await.unwrap();
        assert_eq!(row.quantity, 1);
        assert_eq!(row.price, "$5.00");
        assert_eq!(db.products().get_by_id(id).await.unwrap().unwrap().quantity, 1);

        let row = sell_one(&db, &config, id).await.unwrap();
        assert_eq!(row.quantity, 0);
        assert!(row.out_of_stock);
    }

    #[tokio::test]
    async fn test_sell_one_at_zero_stays_zero() {
        let (db, config) = state().await;
        let id = seed(&db, 0).await;

        let row = sell_one(&db, &config, id).await.unwrap();
        assert_eq!(row.quantity, 0);
        assert_eq!(db.products().get_by_id(id).await.unwrap().unwrap().quantity, 0);
    }

    #[tokio::test]
    async fn test_sell_one_reads_stored_quantity() {
        let (db, config) = state().await;
        let id = seed(&db, 10).await;

        // Another screen changed the quantity since the list was drawn
        db.products()
            .update(id, &ProductChanges::default().quantity(4))
            .await
            .unwrap();

        let row = sell_one(&db, &config, id).await.unwrap();
        assert_eq!(row.quantity, 3);
    }

    #[tokio::test]
    async fn test_sell_one_unknown() {
        let (db, config) = state().await;
        let err = sell_one(&db, &config, 5).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_adjust_stock() {
        let (db, _) = state().await;
        let id = seed(&db, 1).await;

        let dto = adjust_stock(&db, id, StockAdjustment::Increase).await.unwrap();
        assert_eq!(dto.quantity, 2);

        adjust_stock(&db, id, StockAdjustment::Decrease).await.unwrap();
        adjust_stock(&db, id, StockAdjustment::Decrease).await.unwrap();
        let dto = adjust_stock(&db, id, StockAdjustment::Decrease).await.unwrap();
        assert_eq!(dto.quantity, 0);

        assert_eq!(db.products().get_by_id(id).await.unwrap().unwrap().quantity, 0);

        let err = adjust_stock(&db, id + 1, StockAdjustment::Increase)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
