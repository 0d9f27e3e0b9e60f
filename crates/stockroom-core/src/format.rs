//! # Price Formatting
//!
//! Prices are stored as whole numbers in the smallest currency unit and
//! only turned into text for display. The format travels with the caller's
//! configuration; nothing here reads global state.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How a stored price is rendered, e.g. `$5.00` or `5 kr`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PriceFormat {
    /// Currency symbol placed before the amount.
    pub symbol: String,

    /// Number of minor-unit digits (2 for cents, 0 for whole units).
    pub decimals: u8,
}

impl Default for PriceFormat {
    fn default() -> Self {
        PriceFormat {
            symbol: "$".to_string(),
            decimals: 2,
        }
    }
}

impl PriceFormat {
    pub fn new(symbol: impl Into<String>, decimals: u8) -> Self {
        PriceFormat {
            symbol: symbol.into(),
            decimals,
        }
    }

    /// Formats a price as a display string.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_core::PriceFormat;
    ///
    /// let format = PriceFormat::default();
    /// assert_eq!(format.format(1234), "$12.34");
    /// assert_eq!(PriceFormat::new("€", 0).format(15), "€15");
    /// ```
    pub fn format(&self, price: i64) -> String {
        let sign = if price < 0 { "-" } else { "" };
        let amount = price.unsigned_abs();

        if self.decimals == 0 {
            return format!("{}{}{}", sign, self.symbol, amount);
        }

        let divisor = 10_u64.saturating_pow(u32::from(self.decimals));
        format!(
            "{}{}{}.{:0width$}",
            sign,
            self.symbol,
            amount / divisor,
            amount % divisor,
            width = self.decimals as usize
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_two_decimals() {
        let format = PriceFormat::default();
        assert_eq!(format.format(500), "$5.00");
        assert_eq!(format.format(1), "$0.01");
        assert_eq!(format.format(0), "$0.00");
        assert_eq!(format.format(123456789), "$1234567.89");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(PriceFormat::default().format(-1234), "-$12.34");
    }

    #[test]
    fn test_format_whole_units() {
        assert_eq!(PriceFormat::new("kr ", 0).format(500), "kr 500");
    }

    #[test]
    fn test_format_extreme_values() {
        let format = PriceFormat::default();
        assert_eq!(format.format(i64::MIN), "-$92233720368547758.08");
    }
}
