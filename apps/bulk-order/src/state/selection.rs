//! # Selection State
//!
//! The orders currently pulled into the bulk order.
//!
//! ## Thread Safety
//! The selection is wrapped in `Arc<Mutex<T>>` because several commands may
//! modify it and they can run concurrently.
//!
//! ## Selection Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Selection Operations                                 │
//! │                                                                         │
//! │  Frontend Action          Command                 State Change          │
//! │  ───────────────          ───────                 ────────────          │
//! │                                                                         │
//! │  Tick order row ─────────► select_order() ──────► orders.push(order)   │
//! │                                                                         │
//! │  Untick order row ───────► deselect_order() ────► orders.remove(i)     │
//! │                                                                         │
//! │  Click row ──────────────► toggle_order() ──────► push or remove       │
//! │                                                                         │
//! │  Click Clear ────────────► clear_selection() ───► orders.clear()       │
//! │                                                                         │
//! │  Summary panel ──────────► get_order_summary() ─► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rows are identified by order id passed from the frontend, never recovered
//! from rendered markup.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sunline_core::validation::validate_selection_size;
use sunline_core::{CoreError, CoreResult, LineItem, OrderSummary, TierTable};

/// An order in the current selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedOrder {
    /// Copy of the catalog entry at the time it was selected
    pub item: LineItem,

    pub selected_at: DateTime<Utc>,
}

/// The bulk order being assembled.
///
/// ## Invariants
/// - Orders are unique by id
/// - At most `MAX_SELECTED_ORDERS` orders
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub orders: Vec<SelectedOrder>,

    /// When the selection was created/last cleared
    pub created_at: DateTime<Utc>,
}

impl Selection {
    pub fn new() -> Self {
        Selection {
            orders: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds an order to the selection.
    pub fn select(&mut self, item: &LineItem) -> CoreResult<()> {
        if self.contains(&item.id) {
            return Err(CoreError::AlreadySelected(item.id.clone()));
        }
        validate_selection_size(self.orders.len())?;

        self.orders.push(SelectedOrder {
            item: item.clone(),
            selected_at: Utc::now(),
        });
        Ok(())
    }

    /// Removes an order from the selection by id.
    pub fn deselect(&mut self, id: &str) -> CoreResult<()> {
        let initial_len = self.orders.len();
        self.orders.retain(|o| o.item.id != id);

        if self.orders.len() == initial_len {
            Err(CoreError::NotSelected(id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Selects the order if absent, deselects it if present.
    ///
    /// Returns whether the order is selected afterwards.
    pub fn toggle(&mut self, item: &LineItem) -> CoreResult<bool> {
        if self.contains(&item.id) {
            self.deselect(&item.id)?;
            Ok(false)
        } else {
            self.select(item)?;
            Ok(true)
        }
    }

    pub fn clear(&mut self) {
        self.orders.clear();
        self.created_at = Utc::now();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.orders.iter().any(|o| o.item.id == id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn line_items(&self) -> Vec<LineItem> {
        self.orders.iter().map(|o| o.item.clone()).collect()
    }

    /// Prices the current selection against `tiers`.
    pub fn summarize(&self, tiers: &TierTable) -> OrderSummary {
        tiers.summarize(&self.line_items())
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared selection state.
///
/// ## Why Not RwLock?
/// Most selection commands write, and every one of them is quick.
#[derive(Debug)]
pub struct SelectionState {
    selection: Arc<Mutex<Selection>>,
}

impl SelectionState {
    pub fn new() -> Self {
        SelectionState {
            selection: Arc::new(Mutex::new(Selection::new())),
        }
    }

    /// Executes a function with read access to the selection.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let summary = selection_state.with_selection(|s| s.summarize(&config.discount_tiers));
    /// ```
    pub fn with_selection<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Selection) -> R,
    {
        let selection = self.selection.lock().expect("Selection mutex poisoned");
        f(&selection)
    }

    /// Executes a function with write access to the selection.
    pub fn with_selection_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Selection) -> R,
    {
        let mut selection = self.selection.lock().expect("Selection mutex poisoned");
        f(&mut selection)
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}
