//! # stockroom-core: Pure Domain Logic for Stockroom
//!
//! This crate holds the product model and every rule that does not need a
//! database: input validation, stock adjustment, price formatting and the
//! supplier order link.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stockroom Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation (any UI)                        │   │
//! │  │    List screen ──► Detail screen ──► Editor screen              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 stockroom-app (commands)                        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stockroom-core (THIS CRATE) ★                     │   │
//! │  │   types • validation • stock • format • supplier • error        │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 stockroom-db (Inventory Store)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Product`, `NewProduct`, `ProductChanges`
//! - [`validation`] - Field rules and text-input parsing
//! - [`stock`] - Quantity increase/decrease with a floor at zero
//! - [`format`] - Price display formatting
//! - [`supplier`] - `mailto:` links for ordering from the supplier
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use stockroom_core::stock::{adjust_quantity, StockAdjustment};
//! use stockroom_core::format::PriceFormat;
//!
//! // Selling the last unit never goes below zero
//! assert_eq!(adjust_quantity(0, StockAdjustment::Decrease), 0);
//!
//! let format = PriceFormat::default();
//! assert_eq!(format.format(500), "$5.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod format;
pub mod stock;
pub mod supplier;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, ValidationError};
pub use format::PriceFormat;
pub use stock::StockAdjustment;
pub use supplier::SupplierOrder;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Supplier address used when no other address is configured.
pub const DEFAULT_SUPPLIER_EMAIL: &str = "orders@supplier.example.com";
