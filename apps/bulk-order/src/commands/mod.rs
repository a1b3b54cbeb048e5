//! # Commands Module
//!
//! Everything the bulk order screen calls.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── selection.rs  ◄─── Catalog listing, select / deselect / toggle / clear
//! ├── summary.rs    ◄─── Order summary panel
//! └── config.rs     ◄─── Configuration and tier legend
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs selection + config
//! fn get_order_summary(selection: &SelectionState, config: &ConfigState)
//!
//! // Needs the catalog to resolve the id
//! fn select_order(catalog: &CatalogState, selection: &SelectionState, config: &ConfigState, order_id: &str)
//! ```

pub mod config;
pub mod selection;
pub mod summary;
