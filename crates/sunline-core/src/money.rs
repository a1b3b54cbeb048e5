//! # Money Module
//!
//! Provides the `Money` type for rupee amounts.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing 20 quotations of ₹1,49,999.99 in f64 drifts by fractions of   │
//! │  a paisa, and the order summary stops matching the invoice.             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    ₹1,50,000.00 = 15_000_000 paise                                      │
//! │    Sums are exact; the only rounding is the per-kW discount, and that  │
//! │    rounding is explicit (half-up to the nearest paisa).                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sunline_core::money::Money;
//! use sunline_core::types::Capacity;
//!
//! let price = Money::from_rupees(150_000);
//! let rate = Money::from_rupees(1000); // per kW
//!
//! let discount = rate.per_kw(Capacity::from_kw(3.0));
//! assert_eq!(discount, Money::from_rupees(3000));
//! assert_eq!((price - discount).rupees(), 147_000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};
use ts_rs::TS;

use crate::types::Capacity;

/// Paise per rupee.
const PAISE_PER_RUPEE: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in paise (1/100 of a rupee).
///
/// ## Design Decisions
/// - **i64 (signed)**: a final price can go negative when a discount exceeds
///   the base price, and that must stay representable
/// - **Single field tuple struct**: zero-cost wrapper over i64
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  LineItem.price ──► OrderSummary.base_price ──┐                         │
/// │                                               ├──► final_price          │
/// │  DiscountTier.per_kw_discount ──► per_kw() ───┘    (base - discount)    │
/// │                                                                         │
/// │  Displayed as "₹735000.00" in the summary panel (formatted by the app) │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise.
    ///
    /// ## Example
    /// ```rust
    /// use sunline_core::money::Money;
    ///
    /// let price = Money::from_paise(105_050); // ₹1050.50
    /// assert_eq!(price.paise(), 105_050);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * PAISE_PER_RUPEE)
    }

    /// Creates a Money value from rupees and paise, or `None` if it does
    /// not fit in i64.
    ///
    /// ## Example
    /// ```rust
    /// use sunline_core::money::Money;
    ///
    /// assert_eq!(Money::checked_from_major_minor(10, 50), Some(Money::from_paise(1050)));
    /// assert_eq!(Money::checked_from_major_minor(-5, 50), Some(Money::from_paise(-550)));
    /// assert_eq!(Money::checked_from_major_minor(i64::MAX / 10, 0), None);
    /// ```
    ///
    /// ## Note
    /// For negative amounts only the rupee part carries the sign:
    /// `(-5, 50)` is -₹5.50, not -₹4.50.
    pub fn checked_from_major_minor(rupees: i64, paise: i64) -> Option<Self> {
        let whole = rupees.checked_mul(PAISE_PER_RUPEE)?;
        let paise = if rupees < 0 {
            whole.checked_sub(paise)?
        } else {
            whole.checked_add(paise)?
        };
        Some(Money(paise))
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion (truncated toward zero).
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / PAISE_PER_RUPEE
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % PAISE_PER_RUPEE).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Treats `self` as a per-kW rate and returns the amount for `capacity`.
    ///
    /// ## Implementation
    /// Capacity is held in watts, so the amount is `rate * watts / 1000`.
    /// Integer math in i128 with half-up rounding to the nearest paisa:
    /// `(rate * watts + 500) / 1000`. A result outside i64 saturates; a
    /// validated `TierTable` never gets there.
    ///
    /// ## Example
    /// ```rust
    /// use sunline_core::money::Money;
    /// use sunline_core::types::Capacity;
    ///
    /// let rate = Money::from_rupees(1200);
    /// assert_eq!(rate.per_kw(Capacity::from_kw(2.5)), Money::from_rupees(3000));
    /// ```
    pub fn per_kw(&self, capacity: Capacity) -> Money {
        let product = self.0 as i128 * capacity.watts() as i128;
        let paise = if product >= 0 {
            (product + 500) / 1000
        } else {
            (product - 500) / 1000
        };
        let paise = i64::try_from(paise).unwrap_or(if paise < 0 { i64::MIN } else { i64::MAX });
        Money::from_paise(paise)
    }

    /// Returns `self` as a percentage of `whole` (display only).
    ///
    /// Defined as 0 when `whole` is zero, whatever `self` is.
    pub fn percent_of(&self, whole: Money) -> f64 {
        if whole.is_zero() {
            return 0.0;
        }
        (self.0 as f64 * 100.0) / whole.0 as f64
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering; the app formats amounts for the UI itself.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
