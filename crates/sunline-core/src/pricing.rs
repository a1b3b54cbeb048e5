//! # Pricing Engine
//!
//! Order aggregation and tiered discount calculation for bulk orders.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  selected items ──┬──► total_orders ──► select_tier ──► per_kw_discount │
//! │                   │                                          │          │
//! │                   ├──► total_capacity ───────────────────────┤          │
//! │                   │                                          ▼          │
//! │                   │                              discount_amount        │
//! │                   │                                          │          │
//! │                   └──► base_price ───────────────────────────┤          │
//! │                                                              ▼          │
//! │                                         final_price = base - discount   │
//! │                                         discount_percent                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is a pure function of its arguments: no state, no I/O,
//! no errors. Item order does not affect the result.

use crate::money::Money;
use crate::types::{Capacity, DiscountTier, LineItem, OrderSummary, TierProgress};

/// Computes the order summary for the selected `items`.
///
/// `tiers` should be sorted ascending by `min_orders` and non-overlapping
/// (a [`crate::TierTable`] guarantees this). On a malformed slice the first
/// matching tier wins; the function still never fails.
///
/// The final price is not clamped at zero.
///
/// ## Example
/// ```rust
/// use sunline_core::{compute_summary, Capacity, LineItem, Money, TierTable};
///
/// let items = vec![LineItem::new("ORD-1", Capacity::from_kw(3.0), Money::from_rupees(150_000))];
/// let summary = compute_summary(&items, TierTable::standard().tiers());
///
/// assert!(summary.applied_tier.is_none());
/// assert_eq!(summary.final_price, Money::from_rupees(150_000));
/// ```
pub fn compute_summary(items: &[LineItem], tiers: &[DiscountTier]) -> OrderSummary {
    let total_orders = items.len();
    let total_capacity: Capacity = items.iter().map(|item| item.capacity).sum();
    let base_price: Money = items.iter().map(|item| item.price).sum();

    let applied_tier = select_tier(tiers, total_orders).copied();
    let discount_amount = applied_tier
        .map(|tier| tier.per_kw_discount.per_kw(total_capacity))
        .unwrap_or_default();

    OrderSummary {
        total_orders,
        total_capacity,
        base_price,
        applied_tier,
        discount_amount,
        final_price: base_price - discount_amount,
        discount_percent: discount_amount.percent_of(base_price),
        next_tier: next_tier(tiers, total_orders),
    }
}

/// Finds the tier that applies to `total_orders`.
///
/// The last tier in the slice is treated as open-ended.
pub fn select_tier(tiers: &[DiscountTier], total_orders: usize) -> Option<&DiscountTier> {
    let last = tiers.len().checked_sub(1)?;
    tiers
        .iter()
        .enumerate()
        .find(|(index, tier)| tier.contains(total_orders, *index == last))
        .map(|(_, tier)| tier)
}

/// Finds the first tier that starts above `total_orders`.
pub fn next_tier(tiers: &[DiscountTier], total_orders: usize) -> Option<TierProgress> {
    tiers
        .iter()
        .find(|tier| tier.min_orders > total_orders)
        .map(|tier| TierProgress {
            tier: *tier,
            orders_needed: tier.min_orders - total_orders,
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiers::TierTable;

    fn items(count: usize, kw: f64, rupees: i64) -> Vec<LineItem> {
        (0..count)
            .map(|i| {
                LineItem::new(
                    format!("ORD-{}", i + 1),
                    Capacity::from_kw(kw),
                    Money::from_rupees(rupees),
                )
            })
            .collect()
    }

    fn standard() -> Vec<DiscountTier> {
        TierTable::standard().tiers().to_vec()
    }

    #[test]
    fn test_empty_selection() {
        let summary = compute_summary(&[], &standard());

        assert_eq!(summary.total_orders, 0);
        assert_eq!(summary.total_capacity, Capacity::zero());
        assert_eq!(summary.base_price, Money::zero());
        assert!(summary.applied_tier.is_none());
        assert_eq!(summary.discount_amount, Money::zero());
        assert_eq!(summary.final_price, Money::zero());
        assert_eq!(summary.discount_percent, 0.0);
        assert_eq!(summary.next_tier.map(|p| p.orders_needed), Some(5));
    }

    #[test]
    fn test_first_tier_five_orders() {
        let summary = compute_summary(&items(5, 3.0, 150_000), &standard());

        assert_eq!(summary.total_orders, 5);
        assert_eq!(summary.total_capacity, Capacity::from_kw(15.0));
        assert_eq!(summary.base_price, Money::from_rupees(750_000));
        assert_eq!(
            summary.applied_tier,
            Some(DiscountTier::new(5, 10, Money::from_rupees(1000)))
        );
        assert_eq!(summary.discount_amount, Money::from_rupees(15_000));
        assert_eq!(summary.final_price, Money::from_rupees(735_000));
        assert!((summary.discount_percent - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_tier_twenty_orders() {
        let summary = compute_summary(&items(20, 5.0, 200_000), &standard());

        assert_eq!(summary.total_orders, 20);
        assert_eq!(summary.total_capacity, Capacity::from_kw(100.0));
        assert_eq!(
            summary.applied_tier,
            Some(DiscountTier::open_ended(20, Money::from_rupees(2000)))
        );
        assert_eq!(summary.discount_amount, Money::from_rupees(200_000));
        assert_eq!(summary.base_price, Money::from_rupees(4_000_000));
        assert_eq!(summary.final_price, Money::from_rupees(3_800_000));
        assert!(summary.next_tier.is_none());
    }

    #[test]
    fn test_single_order_below_lowest_tier() {
        let summary = compute_summary(&items(1, 3.0, 150_000), &standard());

        assert!(summary.applied_tier.is_none());
        assert_eq!(summary.discount_amount, Money::zero());
        assert_eq!(summary.final_price, Money::from_rupees(150_000));
        assert_eq!(summary.next_tier.map(|p| p.orders_needed), Some(4));
    }

    #[test]
    fn test_totals_match_item_sums() {
        let selection = vec![
            LineItem::new("A", Capacity::from_kw(3.0), Money::from_rupees(150_000)),
            LineItem::new("B", Capacity::from_kw(5.5), Money::from_paise(27_500_050)),
            LineItem::new("C", Capacity::from_kw(0.0), Money::zero()),
        ];
        let summary = compute_summary(&selection, &standard());

        assert_eq!(summary.total_orders, 3);
        assert_eq!(summary.total_capacity.watts(), 8_500);
        assert_eq!(summary.base_price.paise(), 15_000_000 + 27_500_050);
    }

    #[test]
    fn test_no_discount_below_minimum_tier() {
        for count in 0..5 {
            let selection = items(count, 4.0, 180_000);
            let summary = compute_summary(&selection, &standard());
            assert_eq!(summary.discount_amount, Money::zero());
            assert_eq!(summary.final_price, summary.base_price);
        }
    }

    #[test]
    fn test_per_kw_discount_never_decreases_with_more_orders() {
        let tiers = standard();
        let mut previous = Money::zero();

        for count in 0..40 {
            let summary = compute_summary(&items(count, 3.0, 150_000), &tiers);
            let rate = summary
                .applied_tier
                .map(|t| t.per_kw_discount)
                .unwrap_or_default();
            assert!(rate >= previous, "rate dropped at {count} orders");
            previous = rate;
        }
    }

    #[test]
    fn test_idempotent() {
        let selection = items(12, 4.5, 210_000);
        let tiers = standard();
        assert_eq!(
            compute_summary(&selection, &tiers),
            compute_summary(&selection, &tiers)
        );
    }

    #[test]
    fn test_item_order_is_irrelevant() {
        let mut selection = vec![
            LineItem::new("A", Capacity::from_kw(3.0), Money::from_rupees(150_000)),
            LineItem::new("B", Capacity::from_kw(7.0), Money::from_rupees(320_000)),
            LineItem::new("C", Capacity::from_kw(2.0), Money::from_rupees(95_000)),
            LineItem::new("D", Capacity::from_kw(5.0), Money::from_rupees(240_000)),
            LineItem::new("E", Capacity::from_kw(4.0), Money::from_rupees(190_000)),
        ];
        let forward = compute_summary(&selection, &standard());
        selection.reverse();
        assert_eq!(forward, compute_summary(&selection, &standard()));
    }

    #[test]
    fn test_zero_base_price_has_zero_percent() {
        let summary = compute_summary(&items(6, 3.0, 0), &standard());

        assert_eq!(summary.discount_amount, Money::from_rupees(18_000));
        assert_eq!(summary.discount_percent, 0.0);
    }

    #[test]
    fn test_final_price_is_not_clamped() {
        let summary = compute_summary(&items(5, 10.0, 5_000), &standard());

        // 50 kW × ₹1000 = ₹50,000 off a ₹25,000 order
        assert_eq!(summary.final_price, Money::from_rupees(-25_000));
        assert!(summary.is_over_discounted());
    }

    #[test]
    fn test_fractional_capacity_discount() {
        let selection = items(5, 3.3, 150_000);
        let summary = compute_summary(&selection, &standard());

        // 16.5 kW × ₹1000
        assert_eq!(summary.discount_amount, Money::from_rupees(16_500));
    }

    #[test]
    fn test_overlapping_tiers_first_match_wins() {
        let tiers = vec![
            DiscountTier::new(5, 15, Money::from_rupees(1000)),
            DiscountTier::new(10, 20, Money::from_rupees(5000)),
        ];
        let summary = compute_summary(&items(12, 1.0, 100_000), &tiers);

        assert_eq!(
            summary.applied_tier.map(|t| t.per_kw_discount),
            Some(Money::from_rupees(1000))
        );
    }

    #[test]
    fn test_no_tiers_means_no_discount() {
        let summary = compute_summary(&items(30, 3.0, 150_000), &[]);

        assert!(summary.applied_tier.is_none());
        assert!(summary.next_tier.is_none());
        assert_eq!(summary.final_price, summary.base_price);
    }

    #[test]
    fn test_tier_boundaries() {
        let tiers = standard();
        let rate_at = |count: usize| {
            select_tier(&tiers, count).map(|t| t.per_kw_discount.rupees())
        };

        assert_eq!(rate_at(4), None);
        assert_eq!(rate_at(5), Some(1000));
        assert_eq!(rate_at(9), Some(1000));
        assert_eq!(rate_at(10), Some(1200));
        assert_eq!(rate_at(15), Some(1500));
        assert_eq!(rate_at(19), Some(1500));
        assert_eq!(rate_at(20), Some(2000));
        assert_eq!(rate_at(1000), Some(2000));
    }

    #[test]
    fn test_summary_serializes_for_frontend() {
        let summary = compute_summary(&items(5, 3.0, 150_000), &standard());
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["total_orders"], 5);
        assert_eq!(json["total_capacity"], 15_000);
        assert_eq!(json["final_price"], 73_500_000);
        assert_eq!(json["applied_tier"]["min_orders"], 5);
        assert_eq!(json["next_tier"]["orders_needed"], 5);
    }
}
