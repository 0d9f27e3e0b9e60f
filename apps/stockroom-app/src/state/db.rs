//! # Database State
//!
//! Wraps the `Database` connection for use in commands.
//!
//! The `Database` from `stockroom-db` holds a `SqlitePool`, so several
//! commands can run queries concurrently without explicit locking.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! async fn get_product(db: &DbState, id: ProductId) -> Result<ProductDto, ApiError> {
//!     let product = db.inner().products().get_by_id(id).await?;
//!     // ...
//! }
//! ```

use stockroom_db::{Database, ProductRepository};

/// Wrapper around `Database` for command state.
#[derive(Debug, Clone)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }

    /// Shorthand for `inner().products()`.
    pub fn products(&self) -> ProductRepository {
        self.db.products()
    }
}
