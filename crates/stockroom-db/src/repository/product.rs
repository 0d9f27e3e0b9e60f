//! # Product Repository
//!
//! Database operations for the `products` table.
//!
//! ## Key Operations
//! - Create / get / list / stream
//! - Partial update (only supplied fields change)
//! - Delete by id and bulk delete
//!
//! ## Not-Found Convention
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  get_by_id(99)        → Ok(None)       absence is a normal result      │
//! │  update(99, changes)  → Ok(0)          caller decides what to report   │
//! │  delete(99)           → Ok(0)          second delete of an id too      │
//! │  delete_all() (empty) → Ok(0)                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every method issues exactly one SQL statement, so each call is atomic
//! for the row (or table) it touches. Dropping a future before the
//! statement commits leaves the table untouched.

use sqlx::SqlitePool;
use tokio_stream::{Stream, StreamExt};
use tracing::debug;

use crate::error::{DbError, DbResult};
use stockroom_core::{NewProduct, Product, ProductChanges, ProductId};

const SELECT_ALL: &str = r#"
    SELECT id, name, quantity, price, picture
    FROM products
    ORDER BY id
"#;

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// let id = repo.create(&NewProduct::new("Widget", 10, 500)).await?;
/// repo.update(id, &ProductChanges::default().quantity(9)).await?;
/// let widget = repo.get_by_id(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// * `Ok(id)` - The store-assigned id (never reused)
    /// * `Err(DbError::Validation)` - A field broke the product rules; nothing was written
    /// * `Err(_)` - The write itself failed
    pub async fn create(&self, product: &NewProduct) -> DbResult<ProductId> {
        product.validate()?;

        debug!(
            name = %product.name,
            quantity = product.quantity,
            price = product.price,
            has_picture = product.picture.is_some(),
            "Creating product"
        );

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, quantity, price, picture)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(product.name.as_str())
        .bind(product.quantity)
        .bind(product.price)
        .bind(product.picture.as_deref())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Product created");

        Ok(id)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - Product not found
    pub async fn get_by_id(&self, id: ProductId) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, quantity, price, picture
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Lists every product in id (insertion) order.
    ///
    /// An empty table gives an empty vector; only a failed read is an error.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Streams every product in id order without buffering the table.
    ///
    /// Each call starts a fresh scan.
    ///
    /// ## Example
    /// ```rust,ignore
    /// use tokio_stream::StreamExt;
    ///
    /// let mut rows = repo.stream();
    /// while let Some(product) = rows.next().await {
    ///     let product = product?;
    /// }
    /// ```
    pub fn stream(&self) -> impl Stream<Item = DbResult<Product>> + Send + Unpin + '_ {
        sqlx::query_as::<_, Product>(SELECT_ALL)
            .fetch(&self.pool)
            .map(|row| row.map_err(DbError::from))
    }

    /// Applies a partial update.
    ///
    /// Fields left as `None` in `changes` keep their stored values.
    ///
    /// ## Returns
    /// * `Ok(1)` - The product exists (and was updated)
    /// * `Ok(0)` - No product has this id
    /// * `Err(DbError::Validation)` - A supplied field broke the product rules
    pub async fn update(&self, id: ProductId, changes: &ProductChanges) -> DbResult<u64> {
        changes.validate()?;

        debug!(
            id,
            name = changes.name.is_some(),
            quantity = ?changes.quantity,
            price = ?changes.price,
            picture = changes.picture.is_some(),
            "Updating product"
        );

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = COALESCE(?2, name),
                quantity = COALESCE(?3, quantity),
                price = COALESCE(?4, price),
                picture = COALESCE(?5, picture)
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(changes.name.as_deref())
        .bind(changes.quantity)
        .bind(changes.price)
        .bind(changes.picture.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes a product.
    ///
    /// ## Returns
    /// * `Ok(1)` - Deleted
    /// * `Ok(0)` - No product has this id
    pub async fn delete(&self, id: ProductId) -> DbResult<u64> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Deletes every product and returns how many rows were removed.
    pub async fn delete_all(&self) -> DbResult<u64> {
        let result = sqlx::query("DELETE FROM products")
            .execute(&self.pool)
            .await?;

        debug!(rows = result.rows_affected(), "Deleted all products");
        Ok(result.rows_affected())
    }

    /// Counts products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use stockroom_core::ValidationError;

    const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];

    async fn repo() -> ProductRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().products()
    }

    #[tokio::test]
    async fn test_widget_scenario() {
        let repo = repo().await;

        let id = repo.create(&NewProduct::new("Widget", 10, 500)).await.unwrap();
        assert_eq!(id, 1);

        let widget = repo.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(
            widget,
            Product {
                id: 1,
                name: "Widget".to_string(),
                quantity: 10,
                price: 500,
                picture: None,
            }
        );

        let rows = repo
            .update(1, &ProductChanges::default().quantity(9))
            .await
            .unwrap();
        assert_eq!(rows, 1);
        assert_eq!(repo.get_by_id(1).await.unwrap().unwrap().quantity, 9);

        assert_eq!(repo.delete(1).await.unwrap(), 1);
        assert!(repo.get_by_id(1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips_fields() {
        let repo = repo().await;
        let samples = [
            NewProduct::new("Free sample", 0, 0),
            NewProduct::new("  Padded name  ", 3, 1),
            NewProduct::new("Crate", i64::MAX, i64::MAX).with_picture(JPEG.to_vec()),
        ];

        for sample in samples {
            let id = repo.create(&sample).await.unwrap();
            let stored = repo.get_by_id(id).await.unwrap().unwrap();

            assert_eq!(stored.id, id);
            assert_eq!(stored.name, sample.name);
            assert_eq!(stored.quantity, sample.quantity);
            assert_eq!(stored.price, sample.price);
            assert_eq!(stored.picture, sample.picture);
        }
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input_without_writing() {
        let repo = repo().await;

        let err = repo.create(&NewProduct::new("", 10, 500)).await.unwrap_err();
        assert!(matches!(
            err,
            DbError::Validation(ValidationError::Required { ref field }) if field == "name"
        ));
        assert!(!err.is_storage());

        assert!(repo.create(&NewProduct::new("Widget", -1, 500)).await.is_err());
        assert!(repo
            .create(&NewProduct::new("Widget", 1, 500).with_picture(Vec::new()))
            .await
            .is_err());

        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_negative_price_is_stored() {
        let repo = repo().await;

        let id = repo.create(&NewProduct::new("Discount", 1, -500)).await.unwrap();
        let stored = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.price, -500);

        let rows = repo
            .update(id, &ProductChanges::default().price(i64::MIN))
            .await
            .unwrap();
        assert_eq!(rows, 1);
        assert_eq!(repo.get_by_id(id).await.unwrap().unwrap().price, i64::MIN);
    }

    #[tokio::test]
    async fn test_quantity_update_leaves_other_fields() {
        let repo = repo().await;
        let id = repo
            .create(&NewProduct::new("Widget", 10, 500).with_picture(JPEG.to_vec()))
            .await
            .unwrap();

        repo.update(id, &ProductChanges::default().quantity(0))
            .await
            .unwrap();

        let stored = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.quantity, 0);
        assert_eq!(stored.name, "Widget");
        assert_eq!(stored.price, 500);
        assert_eq!(stored.picture.as_deref(), Some(JPEG));
    }

    #[tokio::test]
    async fn test_picture_only_update() {
        let repo = repo().await;
        let id = repo.create(&NewProduct::new("Widget", 10, 500)).await.unwrap();

        let mut replacement = JPEG.to_vec();
        replacement.push(0xD9);
        repo.update(id, &ProductChanges::default().picture(replacement.clone()))
            .await
            .unwrap();

        let stored = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.picture, Some(replacement));
        assert_eq!(stored.quantity, 10);
    }

    #[tokio::test]
    async fn test_update_all_fields() {
        let repo = repo().await;
        let id = repo.create(&NewProduct::new("Widget", 10, 500)).await.unwrap();

        let changes = ProductChanges::default()
            .name("Gadget")
            .quantity(3)
            .price(750)
            .picture(JPEG.to_vec());
        assert_eq!(repo.update(id, &changes).await.unwrap(), 1);

        let stored = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Gadget");
        assert_eq!(stored.quantity, 3);
        assert_eq!(stored.price, 750);
        assert!(stored.has_picture());
    }

    #[tokio::test]
    async fn test_empty_update_reports_existence() {
        let repo = repo().await;
        let id = repo.create(&NewProduct::new("Widget", 10, 500)).await.unwrap();

        assert_eq!(repo.update(id, &ProductChanges::default()).await.unwrap(), 1);
        assert_eq!(repo.update(id + 1, &ProductChanges::default()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_invalid_update_is_rejected() {
        let repo = repo().await;
        let id = repo.create(&NewProduct::new("Widget", 10, 500)).await.unwrap();

        let err = repo
            .update(id, &ProductChanges::default().quantity(-1))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));
        assert_eq!(repo.get_by_id(id).await.unwrap().unwrap().quantity, 10);
    }

    #[tokio::test]
    async fn test_missing_id_is_not_an_error() {
        let repo = repo().await;
        let id = repo.create(&NewProduct::new("Widget", 10, 500)).await.unwrap();

        assert_eq!(
            repo.update(999, &ProductChanges::default().quantity(1))
                .await
                .unwrap(),
            0
        );
        assert_eq!(repo.delete(999).await.unwrap(), 0);
        assert!(repo.get_by_id(999).await.unwrap().is_none());

        // Table unchanged
        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].quantity, 10);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = repo().await;
        let id = repo.create(&NewProduct::new("Widget", 10, 500)).await.unwrap();

        assert_eq!(repo.delete(id).await.unwrap(), 1);
        assert_eq!(repo.delete(id).await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_all() {
        let repo = repo().await;
        assert_eq!(repo.delete_all().await.unwrap(), 0);

        for name in ["A", "B", "C"] {
            repo.create(&NewProduct::new(name, 1, 1)).await.unwrap();
        }

        assert_eq!(repo.delete_all().await.unwrap(), 3);
        assert!(repo.list().await.unwrap().is_empty());
        assert_eq!(repo.delete_all().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let repo = repo().await;
        let first = repo.create(&NewProduct::new("A", 1, 1)).await.unwrap();
        let second = repo.create(&NewProduct::new("B", 1, 1)).await.unwrap();
        assert_eq!((first, second), (1, 2));

        repo.delete(second).await.unwrap();
        let third = repo.create(&NewProduct::new("C", 1, 1)).await.unwrap();
        assert_eq!(third, 3);

        repo.delete_all().await.unwrap();
        let fourth = repo.create(&NewProduct::new("D", 1, 1)).await.unwrap();
        assert_eq!(fourth, 4);
    }

    #[tokio::test]
    async fn test_list_is_in_id_order() {
        let repo = repo().await;
        assert!(repo.list().await.unwrap().is_empty());

        for name in ["Zebra", "Apple", "Mango"] {
            repo.create(&NewProduct::new(name, 1, 1)).await.unwrap();
        }

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Zebra", "Apple", "Mango"]);
    }

    #[tokio::test]
    async fn test_stream_matches_list_and_restarts() {
        let repo = repo().await;
        for i in 0..5 {
            repo.create(&NewProduct::new(format!("Item {}", i), i, i * 100))
                .await
                .unwrap();
        }

        let expected = repo.list().await.unwrap();

        for _ in 0..2 {
            let mut streamed = Vec::new();
            let mut rows = repo.stream();
            while let Some(product) = rows.next().await {
                streamed.push(product.unwrap());
            }
            assert_eq!(streamed, expected);
        }
    }

    #[tokio::test]
    async fn test_stream_on_empty_table() {
        let repo = repo().await;
        let mut rows = repo.stream();
        assert!(rows.next().await.is_none());
    }

    #[tokio::test]
    async fn test_check_constraint_backs_up_validation() {
        let repo = repo().await;

        let err = sqlx::query("INSERT INTO products (name, quantity, price) VALUES ('X', -1, 0)")
            .execute(&repo.pool)
            .await
            .map_err(DbError::from)
            .unwrap_err();

        assert!(matches!(err, DbError::ConstraintViolation(_)));
        assert!(err.is_storage());
    }

}
