//! # Commands Module
//!
//! One async function per screen action.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── product.rs  ◄─── List, detail, editor, delete
//! ├── stock.rs    ◄─── Sale button and +/- buttons
//! └── supplier.rs ◄─── "Order more" email
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  UI action                                                              │
//! │       │  sell_one(&db, &config, id)                                     │
//! │       ▼                                                                 │
//! │  Command                                                                │
//! │    • parse/validate screen input (stockroom-core)                       │
//! │    • read or write the store (stockroom-db)                             │
//! │    • 0 rows affected → ApiError NOT_FOUND                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Result<Dto, ApiError>  (serde, camelCase)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store reports a missing row as `None` or zero affected rows; the
//! commands are where that becomes an error the screen can show.

pub mod product;
pub mod stock;
pub mod supplier;
