//! # Catalog State
//!
//! The customer orders a franchisee can pull into a bulk order.
//!
//! The catalog is injected data: loaded once from a JSON file, or the
//! built-in sample set for development. Commands only ever read it.
//!
//! ## File Format
//! ```json
//! [
//!   { "id": "ORD-1001", "customer_name": "Anita Rao", "capacity": 3000, "price": 15000000 },
//!   { "id": "ORD-1002", "capacity": 5500, "price": 26500000 }
//! ]
//! ```
//! `capacity` is in watts and `price` in paise.

use std::collections::HashSet;
use std::path::Path;

use sunline_core::validation::validate_line_item;
use sunline_core::{Capacity, LineItem, Money};
use tracing::{debug, info};

use crate::error::ConfigError;
use crate::state::ConfigState;

/// Development data: (id, customer, kW, price in rupees).
const SAMPLE_ORDERS: &[(&str, &str, f64, i64)] = &[
    ("ORD-1001", "Anita Rao", 3.0, 150_000),
    ("ORD-1002", "Vikram Mehta", 5.0, 240_000),
    ("ORD-1003", "Sunita Iyer", 3.0, 152_000),
    ("ORD-1004", "Rahul Verma", 4.0, 198_000),
    ("ORD-1005", "Priya Nair", 10.0, 455_000),
    ("ORD-1006", "Arjun Singh", 3.0, 149_500),
    ("ORD-1007", "Kavya Reddy", 6.5, 305_000),
    ("ORD-1008", "Imran Sheikh", 3.0, 151_000),
    ("ORD-1009", "Meera Joshi", 5.0, 236_000),
    ("ORD-1010", "Deepak Gupta", 8.0, 372_000),
    ("ORD-1011", "Farah Khan", 3.0, 150_000),
    ("ORD-1012", "Suresh Pillai", 4.5, 214_000),
];

/// Read-only catalog of customer orders.
#[derive(Debug, Clone)]
pub struct CatalogState {
    items: Vec<LineItem>,
}

impl CatalogState {
    /// Builds a catalog, validating every entry and rejecting duplicate ids.
    pub fn new(items: Vec<LineItem>) -> Result<Self, ConfigError> {
        let mut seen = HashSet::with_capacity(items.len());

        for item in &items {
            validate_line_item(item).map_err(|source| ConfigError::InvalidCatalogEntry {
                id: item.id.clone(),
                source,
            })?;

            if !seen.insert(item.id.as_str()) {
                return Err(ConfigError::DuplicateOrderId(item.id.clone()));
            }
        }

        Ok(CatalogState { items })
    }

    /// The built-in sample catalog.
    pub fn sample() -> Self {
        let items = SAMPLE_ORDERS
            .iter()
            .map(|(id, customer, kw, rupees)| {
                LineItem::new(*id, Capacity::from_kw(*kw), Money::from_rupees(*rupees))
                    .with_customer_name(*customer)
            })
            .collect();

        CatalogState { items }
    }

    /// Parses a catalog from JSON. `origin` names the source in errors.
    pub fn from_json_str(json: &str, origin: &str) -> Result<Self, ConfigError> {
        let items: Vec<LineItem> =
            serde_json::from_str(json).map_err(|source| ConfigError::CatalogParse {
                origin: origin.to_string(),
                source,
            })?;

        Self::new(items)
    }

    /// Loads a catalog file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading catalog");

        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::CatalogRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&json, &path.display().to_string())
    }

    /// Loads the catalog named by the configuration, or the sample one.
    pub fn from_config(config: &ConfigState) -> Result<Self, ConfigError> {
        let catalog = match &config.catalog_path {
            Some(path) => Self::load(path)?,
            None => Self::sample(),
        };

        info!(
            orders = catalog.len(),
            source = config
                .catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "sample".to_string()),
            "Catalog loaded"
        );

        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
