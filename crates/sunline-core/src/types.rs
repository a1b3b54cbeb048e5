//! # Domain Types
//!
//! Core domain types for bulk order pricing.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    LineItem     │   │  DiscountTier   │   │  OrderSummary   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  min_orders     │   │  total_orders   │       │
//! │  │  customer_name  │   │  max_orders     │   │  total_capacity │       │
//! │  │  capacity (W)   │   │  per_kw_discount│   │  base_price     │       │
//! │  │  price (paise)  │   └─────────────────┘   │  applied_tier   │       │
//! │  └─────────────────┘                         │  discount_amount│       │
//! │                                              │  final_price    │       │
//! │  ┌─────────────────┐   ┌─────────────────┐   │  discount_%     │       │
//! │  │    Capacity     │   │  TierProgress   │   │  next_tier      │       │
//! │  │  watts (i64)    │   │  tier           │   └─────────────────┘       │
//! │  │  3500 = 3.5 kW  │   │  orders_needed  │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! Line items belong to the caller's catalog and are only borrowed by the
//! engine. A summary is built fresh on every call and never updated in place.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Capacity
// =============================================================================

/// Installed capacity of a solar system, held in whole watts.
///
/// ## Why Watts?
/// Quotations are written in kW with at most one or two decimals (3 kW,
/// 3.5 kW, 10.25 kW). Watts keep those exact as integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Capacity(i64);

impl Capacity {
    /// Creates a capacity from watts.
    #[inline]
    pub const fn from_watts(watts: i64) -> Self {
        Capacity(watts)
    }

    /// Creates a capacity from kilowatts, rounded to the nearest watt.
    pub fn from_kw(kw: f64) -> Self {
        Capacity((kw * 1000.0).round() as i64)
    }

    /// Returns the capacity in watts.
    #[inline]
    pub const fn watts(&self) -> i64 {
        self.0
    }

    /// Returns the capacity in kilowatts (for display).
    #[inline]
    pub fn kw(&self) -> f64 {
        self.0 as f64 / 1000.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Capacity(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kW", self.kw())
    }
}

impl Add for Capacity {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Capacity(self.0 + other.0)
    }
}

impl Sum for Capacity {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Capacity::zero(), Add::add)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A customer order that can be pulled into a bulk order.
///
/// The engine never validates or mutates these; see
/// [`crate::validation::validate_line_item`] for the caller-side checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Order identifier, unique within a catalog (e.g. "ORD-1042").
    pub id: String,

    /// Customer the installation is for (display only).
    #[serde(default)]
    pub customer_name: Option<String>,

    /// Installation size.
    pub capacity: Capacity,

    /// Quoted price for the installation.
    pub price: Money,
}

impl LineItem {
    pub fn new(id: impl Into<String>, capacity: Capacity, price: Money) -> Self {
        LineItem {
            id: id.into(),
            customer_name: None,
            capacity,
            price,
        }
    }

    pub fn with_customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }
}

// =============================================================================
// Discount Tier
// =============================================================================

/// One bracket of the bulk discount table.
///
/// ## Matching
/// A tier applies when `min_orders <= n < max_orders`. The last tier of a
/// table is open-ended: its `max_orders` is ignored.
///
/// ```text
///   orders:  0 ─── 5 ──────── 10 ──────── 15 ──────── 20 ─────────► ∞
///   tier:    none  │ ₹1000/kW  │ ₹1200/kW  │ ₹1500/kW  │ ₹2000/kW
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountTier {
    /// Inclusive lower bound on the number of selected orders.
    pub min_orders: usize,

    /// Exclusive upper bound; `None` for an open-ended tier.
    pub max_orders: Option<usize>,

    /// Amount taken off per kW of total selected capacity.
    pub per_kw_discount: Money,
}

impl DiscountTier {
    pub const fn new(min_orders: usize, max_orders: usize, per_kw_discount: Money) -> Self {
        DiscountTier {
            min_orders,
            max_orders: Some(max_orders),
            per_kw_discount,
        }
    }

    /// A tier with no upper bound.
    pub const fn open_ended(min_orders: usize, per_kw_discount: Money) -> Self {
        DiscountTier {
            min_orders,
            max_orders: None,
            per_kw_discount,
        }
    }

    /// Checks whether `total_orders` falls in this tier.
    ///
    /// `is_last` marks the final tier of a table, which has no upper bound
    /// whatever its `max_orders` says.
    pub fn contains(&self, total_orders: usize, is_last: bool) -> bool {
        if total_orders < self.min_orders {
            return false;
        }
        if is_last {
            return true;
        }
        self.max_orders.map_or(true, |max| total_orders < max)
    }

    /// Human-readable description shown next to the order summary.
    ///
    /// ## Example
    /// ```rust
    /// use sunline_core::{DiscountTier, Money};
    ///
    /// let tier = DiscountTier::new(5, 10, Money::from_rupees(1000));
    /// assert_eq!(tier.label(), "₹1000/kW discount (5–9 Orders)");
    ///
    /// let top = DiscountTier::open_ended(20, Money::from_rupees(2000));
    /// assert_eq!(top.label(), "₹2000/kW discount (20+ Orders)");
    /// ```
    pub fn label(&self) -> String {
        let rate = if self.per_kw_discount.paise_part() == 0 {
            format!("₹{}", self.per_kw_discount.rupees())
        } else {
            self.per_kw_discount.to_string()
        };

        let range = match self.max_orders {
            Some(max) if max > self.min_orders + 1 => {
                format!("{}–{} Orders", self.min_orders, max - 1)
            }
            Some(_) => format!("{} Orders", self.min_orders),
            None => format!("{}+ Orders", self.min_orders),
        };

        format!("{}/kW discount ({})", rate, range)
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// How far the current selection is from the next discount tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TierProgress {
    /// The tier that would apply next.
    pub tier: DiscountTier,

    /// Additional orders to select before it applies.
    pub orders_needed: usize,
}

/// Totals and discount for the current selection.
///
/// Recomputed from scratch on every selection change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderSummary {
    pub total_orders: usize,
    pub total_capacity: Capacity,
    /// Sum of line item prices before discount.
    pub base_price: Money,
    /// `None` when the order count is below every tier.
    pub applied_tier: Option<DiscountTier>,
    /// `total_capacity × per_kw_discount` of the applied tier.
    pub discount_amount: Money,
    /// `base_price - discount_amount`. Not clamped: may be negative.
    pub final_price: Money,
    /// `discount_amount / base_price × 100`, or 0 when the base price is 0.
    pub discount_percent: f64,
    pub next_tier: Option<TierProgress>,
}

impl OrderSummary {
    /// Summary of an empty selection.
    pub fn empty() -> Self {
        OrderSummary {
            total_orders: 0,
            total_capacity: Capacity::zero(),
            base_price: Money::zero(),
            applied_tier: None,
            discount_amount: Money::zero(),
            final_price: Money::zero(),
            discount_percent: 0.0,
            next_tier: None,
        }
    }

    /// True when the discount exceeds the base price.
    pub fn is_over_discounted(&self) -> bool {
        self.final_price.is_negative()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_from_kw() {
        assert_eq!(Capacity::from_kw(3.0).watts(), 3000);
        assert_eq!(Capacity::from_kw(3.5).watts(), 3500);
        assert_eq!(Capacity::from_kw(10.25).watts(), 10_250);
        assert!((Capacity::from_watts(2750).kw() - 2.75).abs() < 1e-9);
    }

    #[test]
    fn test_capacity_display() {
        assert_eq!(Capacity::from_kw(15.0).to_string(), "15 kW");
        assert_eq!(Capacity::from_kw(3.5).to_string(), "3.5 kW");
    }

    #[test]
    fn test_capacity_sum() {
        let total: Capacity = [3.0, 3.5, 5.0].iter().map(|kw| Capacity::from_kw(*kw)).sum();
        assert_eq!(total.watts(), 11_500);
    }

    #[test]
    fn test_tier_contains_bounds() {
        let tier = DiscountTier::new(5, 10, Money::from_rupees(1000));
        assert!(!tier.contains(4, false));
        assert!(tier.contains(5, false));
        assert!(tier.contains(9, false));
        assert!(!tier.contains(10, false));
    }

    #[test]
    fn test_last_tier_is_unbounded() {
        let tier = DiscountTier::new(20, 25, Money::from_rupees(2000));
        assert!(!tier.contains(30, false));
        assert!(tier.contains(30, true));
        assert!(!tier.contains(19, true));
    }

    #[test]
    fn test_tier_label_single_order_range() {
        let tier = DiscountTier::new(3, 4, Money::from_paise(50_050));
        assert_eq!(tier.label(), "₹500.50/kW discount (3 Orders)");
    }

    #[test]
    fn test_line_item_deserializes_without_customer_name() {
        let json = r#"{"id":"ORD-1","capacity":3000,"price":15000000}"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "ORD-1");
        assert_eq!(item.customer_name, None);
        assert_eq!(item.capacity, Capacity::from_kw(3.0));
        assert_eq!(item.price, Money::from_rupees(150_000));
    }

    #[test]
    fn test_empty_summary() {
        let summary = OrderSummary::empty();
        assert_eq!(summary.total_orders, 0);
        assert!(summary.applied_tier.is_none());
        assert!(!summary.is_over_discounted());
    }
}
