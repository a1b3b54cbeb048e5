//! # Summary Commands
//!
//! The order summary panel shown beside the order list.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ORDER SUMMARY                                                          │
//! │  ──────────────────────────────────────────────────────────────────    │
//! │  Selected orders                                  5                     │
//! │  Total capacity                                   15 kW                 │
//! │  Base price                                       ₹750000.00            │
//! │  ₹1000/kW discount (5–9 Orders)                   -₹15000.00 (2.00%)    │
//! │  ──────────────────────────────────────────────────────────────────    │
//! │  PAYABLE                                          ₹735000.00            │
//! │                                                                         │
//! │  Add 5 more orders to unlock ₹1200/kW discount (10–14 Orders)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use sunline_core::{OrderSummary, TierProgress};
use tracing::{debug, warn};

use crate::state::{ConfigState, SelectionState};

/// Label shown when no tier applies.
pub const NO_DISCOUNT_LABEL: &str = "No bulk discount";

/// Display strings for the summary panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedSummary {
    pub total_capacity: String,
    pub base_price: String,
    pub discount_amount: String,
    pub final_price: String,
    pub discount_percent: String,
}

/// Order summary plus everything the panel renders as text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummaryView {
    pub summary: OrderSummary,
    pub formatted: FormattedSummary,
    pub tier_label: String,
    pub next_tier_hint: Option<String>,
    /// Discount exceeds the base price; the payable amount is negative.
    pub over_discounted: bool,
}

impl OrderSummaryView {
    pub fn new(summary: OrderSummary, config: &ConfigState) -> Self {
        let formatted = FormattedSummary {
            total_capacity: summary.total_capacity.to_string(),
            base_price: config.format_currency(summary.base_price.paise()),
            discount_amount: config.format_currency(summary.discount_amount.paise()),
            final_price: config.format_currency(summary.final_price.paise()),
            discount_percent: format!("{:.2}%", summary.discount_percent),
        };

        let tier_label = summary
            .applied_tier
            .map(|tier| tier.label())
            .unwrap_or_else(|| NO_DISCOUNT_LABEL.to_string());

        OrderSummaryView {
            formatted,
            tier_label,
            next_tier_hint: summary.next_tier.as_ref().map(next_tier_hint),
            over_discounted: summary.is_over_discounted(),
            summary,
        }
    }
}

fn next_tier_hint(progress: &TierProgress) -> String {
    let noun = if progress.orders_needed == 1 { "order" } else { "orders" };
    format!(
        "Add {} more {} to unlock {}",
        progress.orders_needed,
        noun,
        progress.tier.label()
    )
}

/// Prices the current selection.
///
/// A negative payable amount is reported as-is and logged; it is never
/// clamped to zero.
pub fn get_order_summary(selection: &SelectionState, config: &ConfigState) -> OrderSummaryView {
    debug!("get_order_summary command");

    let summary = selection.with_selection(|s| s.summarize(&config.discount_tiers));
    let view = OrderSummaryView::new(summary, config);

    if view.over_discounted {
        warn!(
            total_orders = view.summary.total_orders,
            base_price = %view.formatted.base_price,
            discount = %view.formatted.discount_amount,
            "Discount exceeds base price; payable amount is negative"
        );
    }

    view
}
