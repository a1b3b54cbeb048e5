//! # Sunline Bulk Order
//!
//! State and commands behind the franchisee "Bulk Order" screen: a catalog
//! of customer orders, the franchisee's current selection, and the priced
//! summary recomputed on every change.
//!
//! ## Module Organization
//! ```text
//! sunline_bulk_order/
//! ├── lib.rs          ◄─── You are here (startup & logging)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Customer orders (read-only)
//! │   ├── selection.rs◄─── Selected orders (Arc<Mutex<_>>)
//! │   └── config.rs   ◄─── Configuration from env
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── selection.rs◄─── select / deselect / toggle / clear
//! │   ├── summary.rs  ◄─── Order summary panel
//! │   └── config.rs   ◄─── Config and tier legend
//! └── error.rs        ◄─── ApiError / ConfigError
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ConfigError;
use state::{CatalogState, ConfigState, SelectionState};

/// The three state objects a running screen needs.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. ConfigState::from_env ──► tier table validated here                 │
/// │  2. CatalogState::from_config ──► file or sample, entries validated     │
/// │  3. SelectionState::new ──► empty selection                             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug)]
pub struct BulkOrderApp {
    pub config: ConfigState,
    pub catalog: CatalogState,
    pub selection: SelectionState,
}

impl BulkOrderApp {
    /// Loads the catalog for `config` and starts with an empty selection.
    pub fn bootstrap(config: ConfigState) -> Result<Self, ConfigError> {
        info!(
            franchise = %config.franchise_name,
            tiers = %config.discount_tiers,
            "Starting bulk order session"
        );

        let catalog = CatalogState::from_config(&config)?;

        Ok(BulkOrderApp {
            config,
            catalog,
            selection: SelectionState::new(),
        })
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=sunline=trace` - Show trace for sunline crates only
/// - Default: `info,sunline=debug`
///
/// Logs go to stderr; stdout is reserved for command output.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sunline=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::commands::selection::{deselect_order, select_order};
    use crate::commands::summary::get_order_summary;

    #[test]
    fn test_bootstrap_with_sample_catalog() {
        let app = BulkOrderApp::bootstrap(ConfigState::default()).unwrap();
        assert!(!app.catalog.is_empty());
        assert!(app.selection.with_selection(|s| s.is_empty()));
    }

    #[test]
    fn test_bootstrap_fails_on_missing_catalog() {
        let config = ConfigState {
            catalog_path: Some("/nonexistent/sunline/orders.json".into()),
            ..ConfigState::default()
        };
        assert!(matches!(
            BulkOrderApp::bootstrap(config),
            Err(ConfigError::CatalogRead { .. })
        ));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_commands_keep_selection_consistent() {
        let app = Arc::new(BulkOrderApp::bootstrap(ConfigState::default()).unwrap());
        let ids: Vec<String> = app.catalog.items().iter().map(|i| i.id.clone()).collect();

        let mut handles = Vec::new();
        for id in ids.clone() {
            let app = Arc::clone(&app);
            handles.push(tokio::spawn(async move {
                select_order(&app.catalog, &app.selection, &app.config, &id).unwrap();
                get_order_summary(&app.selection, &app.config)
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let summary = get_order_summary(&app.selection, &app.config);
        assert_eq!(summary.summary.total_orders, ids.len());

        let mut handles = Vec::new();
        for id in ids.iter().skip(3).cloned() {
            let app = Arc::clone(&app);
            handles.push(tokio::spawn(async move {
                deselect_order(&app.selection, &app.config, &id).unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let summary = get_order_summary(&app.selection, &app.config);
        assert_eq!(summary.summary.total_orders, 3);
        assert!(summary.summary.applied_tier.is_none());
    }
}
