//! # Error Types
//!
//! Domain-specific error types for sunline-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  sunline-core errors (this file)                                       │
//! │  ├── CoreError        - Umbrella for the two below                     │
//! │  ├── ValidationError  - Caller-supplied line item rejected             │
//! │  └── TierConfigError  - Discount tier table is malformed               │
//! │                                                                         │
//! │  bulk-order app errors (separate crate)                                │
//! │  ├── ConfigError      - Startup configuration failures                 │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError / TierConfigError → CoreError → ApiError        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pricing engine itself never fails. These errors only come from the
//! checks callers run before handing data to it.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

#[derive(Debug, Error)]
pub enum CoreError {
    /// Order is not in the catalog.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Order was already selected into the bulk order.
    #[error("Order {0} is already selected")]
    AlreadySelected(String),

    /// Order is not part of the current selection.
    #[error("Order {0} is not selected")]
    NotSelected(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid discount tiers: {0}")]
    TierConfig(#[from] TierConfigError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Negative amount or capacity.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g. illegal characters in an order id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Tier Configuration Error
// =============================================================================

/// Reasons a discount tier table is rejected.
///
/// Raised once when the table is loaded, never per pricing call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TierConfigError {
    #[error("tier table is empty")]
    Empty,

    /// A bounded tier whose upper bound does not exceed its lower bound.
    #[error("tier {index} covers no orders ({min}..{max})")]
    ZeroWidth { index: usize, min: usize, max: usize },

    #[error("tier {index} starts at {min} orders, below the previous tier's {previous_min}")]
    Unsorted {
        index: usize,
        min: usize,
        previous_min: usize,
    },

    #[error("tier {index} starts at {min} orders, inside the previous tier (ends at {previous_max})")]
    Overlap {
        index: usize,
        min: usize,
        previous_max: usize,
    },

    #[error("orders {previous_max}..{min} are not covered by any tier (gap before tier {index})")]
    Gap {
        index: usize,
        min: usize,
        previous_max: usize,
    },

    #[error("tier {index} rate {rate}/kW must be between ₹0 and {max}/kW")]
    RateOutOfRange { index: usize, rate: Money, max: Money },

    #[error("open-ended tier {index} must be the last tier")]
    UnboundedNotLast { index: usize },

    #[error("cannot parse tier '{input}': {reason}")]
    Parse { input: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
