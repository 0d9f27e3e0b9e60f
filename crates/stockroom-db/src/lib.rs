//! # stockroom-db: Inventory Store for Stockroom
//!
//! This crate provides durable storage for products. It uses SQLite for
//! local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Data Flow                              │
//! │                                                                         │
//! │  Command (sell_one, create_product, ...)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   stockroom-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────────┐  ┌─────────────┐  │   │
//! │  │   │   Database    │    │    Repository     │  │ Migrations  │  │   │
//! │  │   │   (pool.rs)   │◄───│   (product.rs)    │  │ (embedded)  │  │   │
//! │  │   │  SqlitePool   │    │ ProductRepository │  │ 001_*.sql   │  │   │
//! │  │   └───────────────┘    └───────────────────┘  └─────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │                     inventory.db                                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - The product repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_core::NewProduct;
//! use stockroom_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("inventory.db")).await?;
//!
//! let id = db.products().create(&NewProduct::new("Widget", 10, 500)).await?;
//! let widget = db.products().get_by_id(id).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::product::ProductRepository;
