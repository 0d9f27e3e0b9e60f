//! # Stock Adjustment
//!
//! Quantity changes made by the +/- buttons and the list-row sale button.
//!
//! The store has no "adjust" operation. Callers compute the new value here
//! and persist it with a quantity-only update.
//!
//! ```text
//! current ──► adjust_quantity(current, Decrease) ──► Update(id, {quantity})
//!   0      ─────────────────────────────────────►   0   (floor, never -1)
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Direction of a one-unit stock change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StockAdjustment {
    /// One more unit received.
    Increase,
    /// One unit sold or removed.
    Decrease,
}

/// Applies a one-unit adjustment, saturating at zero and at `i64::MAX`.
///
/// ## Example
/// ```rust
/// use stockroom_core::stock::{adjust_quantity, StockAdjustment};
///
/// assert_eq!(adjust_quantity(10, StockAdjustment::Decrease), 9);
/// assert_eq!(adjust_quantity(0, StockAdjustment::Decrease), 0);
/// assert_eq!(adjust_quantity(0, StockAdjustment::Increase), 1);
/// ```
pub fn adjust_quantity(current: i64, adjustment: StockAdjustment) -> i64 {
    // A negative stored value can only come from outside the store's rules;
    // clamp it rather than propagate it.
    let current = current.max(0);

    match adjustment {
        StockAdjustment::Increase => current.saturating_add(1),
        StockAdjustment::Decrease => current.saturating_sub(1).max(0),
    }
}

/// Shorthand for `adjust_quantity(current, Decrease)`.
#[inline]
pub fn decrement(current: i64) -> i64 {
    adjust_quantity(current, StockAdjustment::Decrease)
}

/// Shorthand for `adjust_quantity(current, Increase)`.
#[inline]
pub fn increment(current: i64) -> i64 {
    adjust_quantity(current, StockAdjustment::Increase)
}
