//! # Repository Module
//!
//! Database repository implementations for Stockroom.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Command                                                               │
//! │       │  db.products().update(id, &changes)                            │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── create(&self, new_product)     → id                               │
//! │  ├── get_by_id(&self, id)           → Option<Product>                  │
//! │  ├── list(&self) / stream(&self)    → products in id order             │
//! │  ├── update(&self, id, changes)     → rows affected                    │
//! │  ├── delete(&self, id)              → rows affected                    │
//! │  └── delete_all(&self)              → rows affected                    │
//! │       │  SQL                                                            │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD

pub mod product;
