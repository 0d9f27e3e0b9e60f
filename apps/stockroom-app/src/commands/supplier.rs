//! # Supplier Commands
//!
//! Builds the "order more" email for a product. The presentation layer
//! opens `uri` with the platform's mail handler.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::product::fetch_product;
use crate::error::ApiError;
use crate::state::{ConfigState, DbState};
use stockroom_core::{ProductId, SupplierOrder};

/// A composed supplier email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierOrderDto {
    pub product_id: ProductId,
    pub recipient: String,
    pub subject: String,
    pub uri: String,
}

/// Composes the order email for a product.
///
/// ## Returns
/// * `Ok(dto)` - `mailto:` link addressed to the configured supplier
/// * `NOT_FOUND` - Unknown product
/// * `VALIDATION_ERROR` - The configured supplier address is unusable
pub async fn order_from_supplier(
    db: &DbState,
    config: &ConfigState,
    id: ProductId,
) -> Result<SupplierOrderDto, ApiError> {
    let product = fetch_product(db, id).await?;
    let order = SupplierOrder::for_product(&config.supplier_email, &product.name)?;

    debug!(id, uri = %order.uri, "order_from_supplier command");

    Ok(SupplierOrderDto {
        product_id: id,
        recipient: order.recipient,
        subject: order.subject,
        uri: order.uri,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::state;
    use crate::error::ErrorCode;
    use stockroom_core::NewProduct;

    #[tokio::test]
    async fn test_order_email() {
        let (db, mut config) = state().await;
        config.supplier_email = "orders@acme.test".to_string();

        let id = db
            .products()
            .create(&NewProduct::new("Blue Widget", 0, 500))
            .await
            .unwrap();

        let order = order_from_supplier(&db, &config, id).await.unwrap();
        assert_eq!(
            order,
            SupplierOrderDto {
                product_id: id,
                recipient: "orders@acme.test".to_string(),
                subject: "Blue Widget".to_string(),
                uri: "mailto:orders@acme.test?subject=Blue%20Widget".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_order_errors() {
        let (db, mut config) = state().await;

        let err = order_from_supplier(&db, &config, 1).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let id = db
            .products()
            .create(&NewProduct::new("Widget", 1, 1))
            .await
            .unwrap();
        config.supplier_email = String::new();

        let err = order_from_supplier(&db, &config, id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }
}
