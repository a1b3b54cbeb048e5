//! # State Module
//!
//! Application state for the bulk order screen.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐          │
//! │  │ CatalogState │  │  SelectionState  │  │   ConfigState    │          │
//! │  │              │  │                  │  │                  │          │
//! │  │  customer    │  │  Arc<Mutex<      │  │  tier table      │          │
//! │  │  orders      │  │    Selection     │  │  currency        │          │
//! │  │              │  │  >>              │  │  catalog path    │          │
//! │  └──────────────┘  └──────────────────┘  └──────────────────┘          │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState: Read-only after load                                  │
//! │  • SelectionState: Protected by Arc<Mutex<T>> for exclusive access     │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes only the state it needs.

mod catalog;
mod config;
mod selection;

pub use catalog::CatalogState;
pub use config::{
    ConfigState, ENV_CATALOG_PATH, ENV_CURRENCY_SYMBOL, ENV_DISCOUNT_TIERS, ENV_FRANCHISE_NAME,
};
pub use selection::{SelectedOrder, Selection, SelectionState};
