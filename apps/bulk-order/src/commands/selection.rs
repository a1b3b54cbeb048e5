//! # Selection Commands
//!
//! Commands behind the order list on the bulk order screen. Every mutation
//! returns the new selection together with a freshly computed summary, so
//! the panel never shows totals for a stale selection.
//!
//! ## Selection Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐     ┌──────────────┐     ┌───────────────────┐           │
//! │  │  Empty   │────►│  Selecting   │────►│  Tier unlocked    │           │
//! │  │          │     │  (< 5 orders)│     │  (>= 5 orders)    │           │
//! │  └──────────┘     └──────────────┘     └───────────────────┘           │
//! │       ▲                  │                      │                       │
//! │       │             select_order           deselect_order               │
//! │       │             toggle_order           toggle_order                 │
//! │       │                  │                      │                       │
//! │       └──────────── clear_selection ◄───────────┘                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use sunline_core::validation::validate_order_id;
use sunline_core::{CoreError, LineItem};
use tracing::{debug, info};

use crate::commands::summary::OrderSummaryView;
use crate::error::ApiError;
use crate::state::{CatalogState, ConfigState, SelectedOrder, Selection, SelectionState};

/// A catalog row with its checkbox state.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    #[serde(flatten)]
    pub item: LineItem,
    pub selected: bool,
}

/// Selection contents and the summary priced from them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResponse {
    pub orders: Vec<SelectedOrder>,
    pub summary: OrderSummaryView,
}

impl SelectionResponse {
    fn build(selection: &Selection, config: &ConfigState) -> Self {
        SelectionResponse {
            orders: selection.orders.clone(),
            summary: OrderSummaryView::new(selection.summarize(&config.discount_tiers), config),
        }
    }
}

/// Lists every catalog order, marking the selected ones.
pub fn list_catalog(catalog: &CatalogState, selection: &SelectionState) -> Vec<CatalogEntry> {
    debug!("list_catalog command");

    selection.with_selection(|s| {
        catalog
            .items()
            .iter()
            .map(|item| CatalogEntry {
                item: item.clone(),
                selected: s.contains(&item.id),
            })
            .collect()
    })
}

/// Gets the current selection and its summary.
pub fn get_selection(selection: &SelectionState, config: &ConfigState) -> SelectionResponse {
    debug!("get_selection command");
    selection.with_selection(|s| SelectionResponse::build(s, config))
}

/// Adds a catalog order to the selection.
///
/// ## Errors
/// - `VALIDATION_ERROR`: malformed order id
/// - `NOT_FOUND`: id not in the catalog
/// - `SELECTION_ERROR`: already selected, or the selection is full
pub fn select_order(
    catalog: &CatalogState,
    selection: &SelectionState,
    config: &ConfigState,
    order_id: &str,
) -> Result<SelectionResponse, ApiError> {
    debug!(order_id = %order_id, "select_order command");

    let item = find_order(catalog, order_id)?;

    let response = selection.with_selection_mut(|s| {
        s.select(item)?;
        Ok::<_, CoreError>(SelectionResponse::build(s, config))
    })?;

    log_selection_update(&response);
    Ok(response)
}

/// Removes an order from the selection.
pub fn deselect_order(
    selection: &SelectionState,
    config: &ConfigState,
    order_id: &str,
) -> Result<SelectionResponse, ApiError> {
    debug!(order_id = %order_id, "deselect_order command");

    validate_order_id(order_id)?;

    let response = selection.with_selection_mut(|s| {
        s.deselect(order_id)?;
        Ok::<_, CoreError>(SelectionResponse::build(s, config))
    })?;

    log_selection_update(&response);
    Ok(response)
}

/// Flips the selection state of a catalog order (row click).
pub fn toggle_order(
    catalog: &CatalogState,
    selection: &SelectionState,
    config: &ConfigState,
    order_id: &str,
) -> Result<SelectionResponse, ApiError> {
    debug!(order_id = %order_id, "toggle_order command");

    let item = find_order(catalog, order_id)?;

    let response = selection.with_selection_mut(|s| {
        s.toggle(item)?;
        Ok::<_, CoreError>(SelectionResponse::build(s, config))
    })?;

    log_selection_update(&response);
    Ok(response)
}

/// Empties the selection.
pub fn clear_selection(selection: &SelectionState, config: &ConfigState) -> SelectionResponse {
    debug!("clear_selection command");

    selection.with_selection_mut(|s| {
        s.clear();
        SelectionResponse::build(s, config)
    })
}

fn find_order<'a>(catalog: &'a CatalogState, order_id: &str) -> Result<&'a LineItem, ApiError> {
    validate_order_id(order_id)?;
    catalog
        .get(order_id)
        .ok_or_else(|| CoreError::OrderNotFound(order_id.to_string()).into())
}

fn log_selection_update(response: &SelectionResponse) {
    let summary = &response.summary;
    info!(
        orders = summary.summary.total_orders,
        tier = %summary.tier_label,
        payable = %summary.formatted.final_price,
        "Selection updated"
    );
}
