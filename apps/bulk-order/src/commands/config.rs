//! # Config Commands
//!
//! Read-only access to configuration for the frontend.

use serde::Serialize;
use sunline_core::DiscountTier;
use tracing::debug;

use crate::state::ConfigState;

/// A discount tier with its display label.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierView {
    #[serde(flatten)]
    pub tier: DiscountTier,
    pub label: String,
}

/// Gets the current application configuration.
///
/// ## When Used
/// - Screen startup (currency symbol, franchise name)
/// - Rendering the discount schedule legend
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

/// Lists the discount tiers in ascending order, labelled for display.
pub fn get_discount_tiers(config: &ConfigState) -> Vec<TierView> {
    debug!("get_discount_tiers command");

    config
        .discount_tiers
        .tiers()
        .iter()
        .map(|tier| TierView {
            tier: *tier,
            label: tier.label(),
        })
        .collect()
}
