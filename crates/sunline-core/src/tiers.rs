//! # Discount Tier Table
//!
//! The bulk discount brackets as data. Adding a bracket is a configuration
//! change, never a code change.
//!
//! ## Table Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  A valid table:                                                         │
//! │                                                                         │
//! │  • has at least one tier                                                │
//! │  • is sorted ascending by min_orders                                    │
//! │  • has contiguous tiers: each max_orders == next min_orders             │
//! │  • only the last tier may be open-ended                                 │
//! │                                                                         │
//! │   5-10:1000 │ 10-15:1200 │ 15-20:1500 │ 20+:2000                        │
//! │   ─────────   ──────────   ──────────   ────────                        │
//! │   [5, 10)     [10, 15)     [15, 20)     [20, ∞)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Validation happens once, when the table is built. Pricing calls against a
//! `TierTable` never re-check it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TierConfigError;
use crate::money::Money;
use crate::pricing;
use crate::types::{DiscountTier, LineItem, OrderSummary, TierProgress};
use crate::MAX_PER_KW_DISCOUNT_PAISE;

/// The discount schedule advertised on the bulk order screen.
const STANDARD_TIERS: [DiscountTier; 4] = [
    DiscountTier::new(5, 10, Money::from_rupees(1000)),
    DiscountTier::new(10, 15, Money::from_rupees(1200)),
    DiscountTier::new(15, 20, Money::from_rupees(1500)),
    DiscountTier::open_ended(20, Money::from_rupees(2000)),
];

// =============================================================================
// Tier Table
// =============================================================================

/// A validated, ordered list of discount tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<DiscountTier>", into = "Vec<DiscountTier>")]
pub struct TierTable {
    tiers: Vec<DiscountTier>,
}

impl TierTable {
    /// Builds a table, rejecting anything that could make tier selection
    /// ambiguous or leave order counts uncovered.
    ///
    /// ## Example
    /// ```rust
    /// use sunline_core::{DiscountTier, Money, TierTable, TierConfigError};
    ///
    /// let gap = TierTable::new(vec![
    ///     DiscountTier::new(5, 10, Money::from_rupees(1000)),
    ///     DiscountTier::open_ended(12, Money::from_rupees(1500)),
    /// ]);
    /// assert!(matches!(gap, Err(TierConfigError::Gap { .. })));
    /// ```
    pub fn new(tiers: Vec<DiscountTier>) -> Result<Self, TierConfigError> {
        if tiers.is_empty() {
            return Err(TierConfigError::Empty);
        }

        let last = tiers.len() - 1;
        for (index, tier) in tiers.iter().enumerate() {
            let rate = tier.per_kw_discount.paise();
            if !(0..=MAX_PER_KW_DISCOUNT_PAISE).contains(&rate) {
                return Err(TierConfigError::RateOutOfRange {
                    index,
                    rate: tier.per_kw_discount,
                    max: Money::from_paise(MAX_PER_KW_DISCOUNT_PAISE),
                });
            }

            match tier.max_orders {
                Some(max) if max <= tier.min_orders => {
                    return Err(TierConfigError::ZeroWidth {
                        index,
                        min: tier.min_orders,
                        max,
                    });
                }
                None if index != last => {
                    return Err(TierConfigError::UnboundedNotLast { index });
                }
                _ => {}
            }
        }

        for (index, pair) in tiers.windows(2).enumerate() {
            let (previous, tier) = (&pair[0], &pair[1]);
            let index = index + 1;

            if tier.min_orders < previous.min_orders {
                return Err(TierConfigError::Unsorted {
                    index,
                    min: tier.min_orders,
                    previous_min: previous.min_orders,
                });
            }

            // Only the last tier may be open-ended, and it is never `previous`
            let previous_max = previous.max_orders.unwrap_or(usize::MAX);
            if tier.min_orders < previous_max {
                return Err(TierConfigError::Overlap {
                    index,
                    min: tier.min_orders,
                    previous_max,
                });
            }
            if tier.min_orders > previous_max {
                return Err(TierConfigError::Gap {
                    index,
                    min: tier.min_orders,
                    previous_max,
                });
            }
        }

        Ok(TierTable { tiers })
    }

    /// The standard schedule: ₹1000/kW from 5 orders, ₹1200 from 10,
    /// ₹1500 from 15 and ₹2000 from 20.
    pub fn standard() -> Self {
        TierTable {
            tiers: STANDARD_TIERS.to_vec(),
        }
    }

    /// Parses the compact form `"5-10:1000,10-15:1200,20+:2000"`.
    ///
    /// Each entry is `MIN-MAX:RATE` (MAX exclusive) or `MIN+:RATE`, with
    /// RATE in rupees per kW (up to two decimals).
    ///
    /// ## Example
    /// ```rust
    /// use sunline_core::TierTable;
    ///
    /// let table = TierTable::parse("5-10:1000, 10-15:1200, 15-20:1500, 20+:2000").unwrap();
    /// assert_eq!(table, TierTable::standard());
    /// ```
    pub fn parse(input: &str) -> Result<Self, TierConfigError> {
        let tiers = input
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(parse_tier)
            .collect::<Result<Vec<_>, _>>()?;

        TierTable::new(tiers)
    }

    pub fn tiers(&self) -> &[DiscountTier] {
        &self.tiers
    }

    /// The tier that applies to `total_orders`, if any.
    pub fn select(&self, total_orders: usize) -> Option<&DiscountTier> {
        pricing::select_tier(&self.tiers, total_orders)
    }

    /// The next better tier above `total_orders` and how far away it is.
    pub fn next_tier(&self, total_orders: usize) -> Option<TierProgress> {
        pricing::next_tier(&self.tiers, total_orders)
    }

    /// Computes the order summary for `items` against this table.
    pub fn summarize(&self, items: &[LineItem]) -> OrderSummary {
        pricing::compute_summary(items, &self.tiers)
    }
}

impl Default for TierTable {
    fn default() -> Self {
        TierTable::standard()
    }
}

impl TryFrom<Vec<DiscountTier>> for TierTable {
    type Error = TierConfigError;

    fn try_from(tiers: Vec<DiscountTier>) -> Result<Self, Self::Error> {
        TierTable::new(tiers)
    }
}

impl From<TierTable> for Vec<DiscountTier> {
    fn from(table: TierTable) -> Self {
        table.tiers
    }
}

impl FromStr for TierTable {
    type Err = TierConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TierTable::parse(s)
    }
}

/// Renders the compact form accepted by [`TierTable::parse`].
impl fmt::Display for TierTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, tier) in self.tiers.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            let rate = tier.per_kw_discount;
            let rate = if rate.paise_part() == 0 {
                rate.rupees().to_string()
            } else {
                format!("{}.{:02}", rate.rupees(), rate.paise_part())
            };
            match tier.max_orders {
                Some(max) => write!(f, "{}-{}:{}", tier.min_orders, max, rate)?,
                None => write!(f, "{}+:{}", tier.min_orders, rate)?,
            }
        }
        Ok(())
    }
}

// =============================================================================
// Parsing Helpers
// =============================================================================

fn parse_tier(entry: &str) -> Result<DiscountTier, TierConfigError> {
    let parse_error = |reason: &str| TierConfigError::Parse {
        input: entry.to_string(),
        reason: reason.to_string(),
    };

    let (range, rate) = entry
        .split_once(':')
        .ok_or_else(|| parse_error("expected RANGE:RATE"))?;

    let per_kw_discount =
        parse_rupees(rate.trim()).ok_or_else(|| parse_error("rate must be a rupee amount"))?;

    let range = range.trim();
    if let Some(min) = range.strip_suffix('+') {
        let min = parse_count(min).ok_or_else(|| parse_error("invalid minimum order count"))?;
        return Ok(DiscountTier::open_ended(min, per_kw_discount));
    }

    let (min, max) = range
        .split_once('-')
        .ok_or_else(|| parse_error("range must be MIN-MAX or MIN+"))?;
    let min = parse_count(min).ok_or_else(|| parse_error("invalid minimum order count"))?;
    let max = parse_count(max).ok_or_else(|| parse_error("invalid maximum order count"))?;

    Ok(DiscountTier::new(min, max, per_kw_discount))
}

fn parse_count(s: &str) -> Option<usize> {
    s.trim().parse().ok()
}

/// Parses "1000", "1000.5" or "1000.50" into paise. Negative rates and
/// amounts too large for paise are rejected.
fn parse_rupees(s: &str) -> Option<Money> {
    let (whole, fraction) = match s.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (s, ""),
    };

    if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if fraction.len() > 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let rupees: i64 = whole.parse().ok()?;
    let paise: i64 = match fraction.len() {
        0 => 0,
        1 => fraction.parse::<i64>().ok()? * 10,
        _ => fraction.parse().ok()?,
    };

    Money::checked_from_major_minor(rupees, paise)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rupees(r: i64) -> Money {
        Money::from_rupees(r)
    }

    #[test]
    fn test_standard_table_is_valid() {
        let table = TierTable::standard();
        assert_eq!(TierTable::new(table.tiers().to_vec()), Ok(table.clone()));
        assert_eq!(table.tiers().len(), 4);
        assert_eq!(table.tiers()[0].min_orders, 5);
    }

    #[test]
    fn test_rejects_empty_table() {
        assert_eq!(TierTable::new(vec![]), Err(TierConfigError::Empty));
    }

    #[test]
    fn test_rejects_zero_width_tier() {
        let result = TierTable::new(vec![DiscountTier::new(5, 5, rupees(1000))]);
        assert_eq!(
            result,
            Err(TierConfigError::ZeroWidth {
                index: 0,
                min: 5,
                max: 5
            })
        );
    }

    #[test]
    fn test_rejects_unsorted_tiers() {
        let result = TierTable::new(vec![
            DiscountTier::new(10, 15, rupees(1200)),
            DiscountTier::new(5, 10, rupees(1000)),
        ]);
        assert!(matches!(result, Err(TierConfigError::Unsorted { index: 1, .. })));
    }

    #[test]
    fn test_rejects_overlapping_tiers() {
        let result = TierTable::new(vec![
            DiscountTier::new(5, 12, rupees(1000)),
            DiscountTier::open_ended(10, rupees(1200)),
        ]);
        assert_eq!(
            result,
            Err(TierConfigError::Overlap {
                index: 1,
                min: 10,
                previous_max: 12
            })
        );
    }

    #[test]
    fn test_rejects_open_ended_tier_before_last() {
        let result = TierTable::new(vec![
            DiscountTier::open_ended(5, rupees(1000)),
            DiscountTier::new(10, 15, rupees(1200)),
        ]);
        assert_eq!(result, Err(TierConfigError::UnboundedNotLast { index: 0 }));
    }

    #[test]
    fn test_bounded_last_tier_is_accepted() {
        let table = TierTable::new(vec![
            DiscountTier::new(5, 10, rupees(1000)),
            DiscountTier::new(10, 15, rupees(1200)),
        ])
        .unwrap();

        // The last tier keeps applying past its nominal bound
        assert_eq!(table.select(40).map(|t| t.min_orders), Some(10));
    }

    #[test]
    fn test_select_and_next_tier() {
        let table = TierTable::standard();

        assert!(table.select(4).is_none());
        assert_eq!(table.select(5).map(|t| t.per_kw_discount), Some(rupees(1000)));
        assert_eq!(table.select(14).map(|t| t.per_kw_discount), Some(rupees(1200)));
        assert_eq!(table.select(200).map(|t| t.per_kw_discount), Some(rupees(2000)));

        let next = table.next_tier(3).unwrap();
        assert_eq!(next.orders_needed, 2);
        assert_eq!(next.tier.min_orders, 5);

        let next = table.next_tier(12).unwrap();
        assert_eq!(next.orders_needed, 3);
        assert_eq!(next.tier.per_kw_discount, rupees(1500));

        assert!(table.next_tier(20).is_none());
    }

    #[test]
    fn test_parse_with_decimal_rates() {
        let table = TierTable::parse("0-3:0.5,3+:12.25").unwrap();
        assert_eq!(table.tiers()[0].per_kw_discount, Money::from_paise(50));
        assert_eq!(table.tiers()[1].per_kw_discount, Money::from_paise(1225));
        assert_eq!(table.tiers()[1].max_orders, None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            TierTable::parse("5-10"),
            Err(TierConfigError::Parse { .. })
        ));
        assert!(matches!(
            TierTable::parse("5-10:-100"),
            Err(TierConfigError::Parse { .. })
        ));
        assert!(matches!(
            TierTable::parse("5:1000"),
            Err(TierConfigError::Parse { .. })
        ));
        assert!(matches!(
            TierTable::parse("5-10:10.123"),
            Err(TierConfigError::Parse { .. })
        ));
        assert_eq!(TierTable::parse(" , "), Err(TierConfigError::Empty));
        assert!(matches!(
            TierTable::parse("5-10:1000,12+:1500"),
            Err(TierConfigError::Gap { .. })
        ));
    }

    #[test]
    fn test_rate_too_large_for_paise_is_parse_error() {
        assert!(matches!(
            TierTable::parse("5+:92233720368547759"),
            Err(TierConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_rejects_rate_above_limit() {
        let result = TierTable::parse("1+:900000000000000");
        assert!(matches!(
            result,
            Err(TierConfigError::RateOutOfRange { index: 0, .. })
        ));

        let at_limit = format!("1+:{}", MAX_PER_KW_DISCOUNT_PAISE / 100);
        assert!(TierTable::parse(&at_limit).is_ok());
    }

    #[test]
    fn test_rejects_negative_rate_from_json() {
        let json = r#"[{"min_orders":5,"max_orders":null,"per_kw_discount":-100}]"#;
        assert!(serde_json::from_str::<TierTable>(json).is_err());
    }

    #[test]
    fn test_largest_discount_stays_exact() {
        let table = TierTable::new(vec![DiscountTier::open_ended(
            1,
            Money::from_paise(MAX_PER_KW_DISCOUNT_PAISE),
        )])
        .unwrap();
        let items: Vec<LineItem> = (0..crate::MAX_SELECTED_ORDERS)
            .map(|i| {
                LineItem::new(
                    format!("ORD-{i}"),
                    crate::types::Capacity::from_watts(crate::MAX_LINE_CAPACITY_WATTS),
                    Money::from_paise(crate::MAX_LINE_PRICE_PAISE),
                )
            })
            .collect();

        let summary = table.summarize(&items);
        // ₹1,00,000/kW × 500 MW
        assert_eq!(summary.discount_amount, Money::from_rupees(50_000_000_000));
        assert!(summary.final_price < summary.base_price);
    }

    #[test]
    fn test_display_matches_parse_format() {
        let table = TierTable::standard();
        assert_eq!(table.to_string(), "5-10:1000,10-15:1200,15-20:1500,20+:2000");

        let table = TierTable::parse("1-2:0.5,2+:7").unwrap();
        assert_eq!(table.to_string(), "1-2:0.50,2+:7");
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"[{"min_orders":5,"max_orders":10,"per_kw_discount":100000},
                       {"min_orders":10,"max_orders":null,"per_kw_discount":120000}]"#;
        let table: TierTable = serde_json::from_str(json).unwrap();
        assert_eq!(table.tiers().len(), 2);

        let json = r#"[{"min_orders":5,"max_orders":null,"per_kw_discount":100000},
                       {"min_orders":10,"max_orders":null,"per_kw_discount":120000}]"#;
        assert!(serde_json::from_str::<TierTable>(json).is_err());
    }
}
