//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SUNLINE_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use sunline_core::TierTable;

use crate::error::ConfigError;

/// Discount tier table in `TierTable::parse` form.
pub const ENV_DISCOUNT_TIERS: &str = "SUNLINE_DISCOUNT_TIERS";
/// Path to a JSON catalog of customer orders.
pub const ENV_CATALOG_PATH: &str = "SUNLINE_CATALOG_PATH";
pub const ENV_CURRENCY_SYMBOL: &str = "SUNLINE_CURRENCY_SYMBOL";
pub const ENV_FRANCHISE_NAME: &str = "SUNLINE_FRANCHISE_NAME";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the bulk order screen header
    pub franchise_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Decimal places shown: 0 (whole rupees) or 2
    pub currency_decimals: u8,

    /// Bulk discount schedule
    pub discount_tiers: TierTable,

    /// Catalog file; `None` uses the built-in sample catalog
    pub catalog_path: Option<PathBuf>,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Currency: INR (₹), 2 decimals
    /// - Tiers: ₹1000/₹1200/₹1500/₹2000 per kW from 5/10/15/20 orders
    /// - Catalog: built-in sample
    fn default() -> Self {
        ConfigState {
            franchise_name: "Sunline Franchise".to_string(),
            currency_code: "INR".to_string(),
            currency_symbol: "₹".to_string(),
            currency_decimals: 2,
            discount_tiers: TierTable::standard(),
            catalog_path: None,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an injectable variable source.
    ///
    /// An invalid tier table is an error, never a silent fallback to the
    /// defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(tiers) = lookup(ENV_DISCOUNT_TIERS) {
            config.discount_tiers =
                TierTable::parse(&tiers).map_err(|source| ConfigError::InvalidTiers {
                    var: ENV_DISCOUNT_TIERS,
                    source,
                })?;
        }

        if let Some(path) = lookup(ENV_CATALOG_PATH).filter(|p| !p.trim().is_empty()) {
            config.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            if symbol.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    var: ENV_CURRENCY_SYMBOL,
                    reason: "must not be empty".to_string(),
                });
            }
            config.currency_symbol = symbol;
        }

        if let Some(name) = lookup(ENV_FRANCHISE_NAME) {
            config.franchise_name = name;
        }

        Ok(config)
    }

    /// Formats a paise amount as a currency string.
    ///
    /// With `currency_decimals == 0` the amount is rounded to the nearest
    /// rupee; otherwise paise are shown.
    ///
    /// ## Example
    /// ```rust
    /// use sunline_bulk_order::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(73_500_000), "₹735000.00");
    /// ```
    pub fn format_currency(&self, paise: i64) -> String {
        let sign = if paise < 0 { "-" } else { "" };
        let abs = paise.unsigned_abs();

        if self.currency_decimals == 0 {
            format!("{}{}{}", sign, self.currency_symbol, (abs + 50) / 100)
        } else {
            format!("{}{}{}.{:02}", sign, self.currency_symbol, abs / 100, abs % 100)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use sunline_core::{Money, TierConfigError};

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = ConfigState::from_lookup(|_| None).unwrap();
        assert_eq!(config.currency_code, "INR");
        assert_eq!(config.discount_tiers, TierTable::standard());
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_tiers_from_env() {
        let config =
            ConfigState::from_lookup(lookup_from(&[(ENV_DISCOUNT_TIERS, "3-8:800,8+:1100")]))
                .unwrap();

        assert_eq!(config.discount_tiers.tiers().len(), 2);
        assert_eq!(
            config.discount_tiers.select(3).map(|t| t.per_kw_discount),
            Some(Money::from_rupees(800))
        );
    }

    #[test]
    fn test_invalid_tiers_fail_startup() {
        let err = ConfigState::from_lookup(lookup_from(&[(ENV_DISCOUNT_TIERS, "5-10:1000,12+:1500")]))
            .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidTiers {
                source: TierConfigError::Gap { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_catalog_path_and_symbol_from_env() {
        let config = ConfigState::from_lookup(lookup_from(&[
            (ENV_CATALOG_PATH, "/srv/sunline/orders.json"),
            (ENV_CURRENCY_SYMBOL, "Rs."),
        ]))
        .unwrap();

        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/srv/sunline/orders.json"))
        );
        assert_eq!(config.format_currency(150), "Rs.1.50");
    }

    #[test]
    fn test_empty_symbol_rejected() {
        let err = ConfigState::from_lookup(lookup_from(&[(ENV_CURRENCY_SYMBOL, " ")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(1234), "₹12.34");
        assert_eq!(config.format_currency(0), "₹0.00");
        assert_eq!(config.format_currency(-2_500_000), "-₹25000.00");
    }

    #[test]
    fn test_format_currency_without_decimals() {
        let config = ConfigState {
            currency_decimals: 0,
            ..ConfigState::default()
        };
        assert_eq!(config.format_currency(1_500_050), "₹15001");
        assert_eq!(config.format_currency(-1_500_049), "-₹15000");
    }
}
