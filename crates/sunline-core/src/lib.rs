//! # sunline-core: Pure Business Logic for Sunline
//!
//! Pricing rules behind the franchisee "Bulk Order" screen, written as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Sunline Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Dashboard Frontend                           │   │
//! │  │    Order list ──► Select / deselect ──► Order summary panel     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    bulk-order commands                          │   │
//! │  │    select_order, deselect_order, get_order_summary, ...         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ sunline-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   tiers   │  │  pricing  │  │   │
//! │  │   │ LineItem  │  │   Money   │  │ TierTable │  │  compute_ │  │   │
//! │  │   │ Capacity  │  │  per_kw   │  │  parse    │  │  summary  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Capacity, LineItem, DiscountTier, OrderSummary)
//! - [`money`] - Money type with integer arithmetic in paise
//! - [`tiers`] - Validated, data-driven discount tier table
//! - [`pricing`] - The order aggregation and tiered discount engine
//! - [`error`] - Domain error types
//! - [`validation`] - Caller-side input checks
//!
//! ## Example Usage
//!
//! ```rust
//! use sunline_core::{Capacity, LineItem, Money, TierTable};
//!
//! let items: Vec<LineItem> = (0..5)
//!     .map(|i| LineItem::new(format!("ORD-{i}"), Capacity::from_kw(3.0), Money::from_rupees(150_000)))
//!     .collect();
//!
//! let summary = TierTable::standard().summarize(&items);
//!
//! assert_eq!(summary.total_orders, 5);
//! assert_eq!(summary.discount_amount, Money::from_rupees(15_000));
//! assert_eq!(summary.final_price, Money::from_rupees(735_000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod tiers;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, TierConfigError, ValidationError};
pub use money::Money;
pub use pricing::{compute_summary, select_tier};
pub use tiers::TierTable;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum number of orders a franchisee can select into one bulk order.
pub const MAX_SELECTED_ORDERS: usize = 500;

/// Largest single installation accepted on a line item (1 MW, in watts).
///
/// Residential and small commercial installs are well below this; anything
/// larger is almost certainly a unit mix-up (watts typed as kW).
pub const MAX_LINE_CAPACITY_WATTS: i64 = 1_000_000;

/// Largest quoted price accepted on a line item (₹10 crore, in paise).
///
/// A full selection at this price sums to 5 × 10^12 paise, far inside i64.
pub const MAX_LINE_PRICE_PAISE: i64 = 10_000_000_000;

/// Largest per-kW rate a discount tier may carry (₹1,00,000/kW, in paise).
///
/// With full capacity on every selected line the discount stays below
/// 5 × 10^12 paise.
pub const MAX_PER_KW_DISCOUNT_PAISE: i64 = 10_000_000;
