//! # State Module
//!
//! Application state handed to every command.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌─────────────────────┬─────────────────────┐                 │
//! │          ▼                     ▼                                        │
//! │  ┌──────────────┐     ┌──────────────────┐                             │
//! │  │   DbState    │     │   ConfigState    │                             │
//! │  │              │     │                  │                             │
//! │  │  Database    │     │  supplier_email  │                             │
//! │  │  (SQLite     │     │  price_format    │                             │
//! │  │   pool)      │     │                  │                             │
//! │  └──────────────┘     └──────────────────┘                             │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • DbState: Database has internal connection pool (thread-safe)        │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands declare exactly the state they need; only list rows and the
//! supplier order read `ConfigState`.

mod config;
mod db;

pub use config::ConfigState;
pub use db::DbState;
