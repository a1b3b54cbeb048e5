//! # Validation Module
//!
//! Input checks callers run before data reaches the pricing engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog load / select command (bulk-order app)               │
//! │  ├── validate_line_item on every catalog entry                         │
//! │  └── validate_selection_size before adding to the selection            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Pricing engine (pricing.rs)                                  │
//! │  └── NO checks: well-formed input is a precondition                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sunline_core::validation::{validate_line_item, validate_order_id};
//! use sunline_core::{Capacity, LineItem, Money};
//!
//! validate_order_id("ORD-1042").unwrap();
//!
//! let item = LineItem::new("ORD-1042", Capacity::from_kw(3.0), Money::from_rupees(150_000));
//! validate_line_item(&item).unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::LineItem;
use crate::{MAX_LINE_CAPACITY_WATTS, MAX_LINE_PRICE_PAISE, MAX_SELECTED_ORDERS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_ORDER_ID_LEN: usize = 50;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an order identifier.
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only letters, digits, hyphens and underscores (so no surrounding
///   whitespace: ids are matched exactly)
///
/// ## Example
/// ```rust
/// use sunline_core::validation::validate_order_id;
///
/// assert!(validate_order_id("ORD-1042").is_ok());
/// assert!(validate_order_id("").is_err());
/// assert!(validate_order_id("ORD 1042").is_err());
/// ```
pub fn validate_order_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "order id".to_string(),
        });
    }

    if id.len() > MAX_ORDER_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "order id".to_string(),
            max: MAX_ORDER_ID_LEN,
        });
    }

    if !id.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_') {
        return Err(ValidationError::InvalidFormat {
            field: "order id".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quoted price in paise.
///
/// ## Rules
/// - Must be non-negative (zero is allowed)
/// - Must not exceed MAX_LINE_PRICE_PAISE (₹10 crore)
pub fn validate_price_paise(paise: i64) -> ValidationResult<()> {
    if paise < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    if paise > MAX_LINE_PRICE_PAISE {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_LINE_PRICE_PAISE,
        });
    }

    Ok(())
}

/// Validates an installation capacity in watts.
///
/// ## Rules
/// - Must be non-negative (zero is degenerate but accepted)
/// - Must not exceed MAX_LINE_CAPACITY_WATTS (1 MW)
pub fn validate_capacity_watts(watts: i64) -> ValidationResult<()> {
    if watts < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "capacity".to_string(),
        });
    }

    if watts > MAX_LINE_CAPACITY_WATTS {
        return Err(ValidationError::OutOfRange {
            field: "capacity".to_string(),
            min: 0,
            max: MAX_LINE_CAPACITY_WATTS,
        });
    }

    Ok(())
}

/// Validates every field of a line item.
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    validate_order_id(&item.id)?;
    validate_capacity_watts(item.capacity.watts())?;
    validate_price_paise(item.price.paise())?;
    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that one more order can be added to a selection of
/// `current_orders`.
pub fn validate_selection_size(current_orders: usize) -> ValidationResult<()> {
    if current_orders >= MAX_SELECTED_ORDERS {
        return Err(ValidationError::OutOfRange {
            field: "selected orders".to_string(),
            min: 0,
            max: MAX_SELECTED_ORDERS as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
