//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOCKROOM_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use stockroom_core::{PriceFormat, DEFAULT_SUPPLIER_EMAIL};
use tracing::warn;

/// Largest accepted `STOCKROOM_CURRENCY_DECIMALS`.
const MAX_CURRENCY_DECIMALS: u8 = 4;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Recipient of "order more" emails
    pub supplier_email: String,

    /// How prices are rendered on the list screen
    pub price_format: PriceFormat,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Supplier: `orders@supplier.example.com`
    /// - Currency: `$` with 2 decimals
    fn default() -> Self {
        ConfigState {
            supplier_email: DEFAULT_SUPPLIER_EMAIL.to_string(),
            price_format: PriceFormat::default(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOCKROOM_SUPPLIER_EMAIL`: Override supplier address
    /// - `STOCKROOM_CURRENCY_SYMBOL`: Override currency symbol (e.g., "€")
    /// - `STOCKROOM_CURRENCY_DECIMALS`: Override minor-unit digits (0-4)
    pub fn from_env() -> Self {
        ConfigState::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds configuration from any variable source.
    ///
    /// Blank or unparsable values are ignored and the default is kept.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(email) = var("STOCKROOM_SUPPLIER_EMAIL") {
            let email = email.trim();
            if !email.is_empty() {
                config.supplier_email = email.to_string();
            }
        }

        if let Some(symbol) = var("STOCKROOM_CURRENCY_SYMBOL") {
            config.price_format.symbol = symbol;
        }

        if let Some(decimals) = var("STOCKROOM_CURRENCY_DECIMALS") {
            match decimals.trim().parse::<u8>() {
                Ok(d) if d <= MAX_CURRENCY_DECIMALS => config.price_format.decimals = d,
                _ => warn!(value = %decimals, "Ignoring invalid STOCKROOM_CURRENCY_DECIMALS"),
            }
        }

        config
    }

    /// Formats a stored price with the configured currency.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_price(1234), "$12.34");
    /// ```
    pub fn format_price(&self, price: i64) -> String {
        self.price_format.format(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::from_vars(vars(&[]));
        assert_eq!(config, ConfigState::default());
        assert_eq!(config.format_price(500), "$5.00");
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_vars(vars(&[
            ("STOCKROOM_SUPPLIER_EMAIL", " buyer@acme.test "),
            ("STOCKROOM_CURRENCY_SYMBOL", "kr "),
            ("STOCKROOM_CURRENCY_DECIMALS", "0"),
        ]));

        assert_eq!(config.supplier_email, "buyer@acme.test");
        assert_eq!(config.format_price(500), "kr 500");
    }

    #[test]
    fn test_invalid_values_keep_defaults() {
        let config = ConfigState::from_vars(vars(&[
            ("STOCKROOM_SUPPLIER_EMAIL", "   "),
            ("STOCKROOM_CURRENCY_DECIMALS", "two"),
        ]));
        assert_eq!(config, ConfigState::default());

        let config = ConfigState::from_vars(vars(&[("STOCKROOM_CURRENCY_DECIMALS", "12")]));
        assert_eq!(config.price_format.decimals, 2);
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(ConfigState::default()).unwrap();
        assert_eq!(json["supplierEmail"], "orders@supplier.example.com");
        assert_eq!(json["priceFormat"]["symbol"], "$");
        assert_eq!(json["priceFormat"]["decimals"], 2);
    }
}
