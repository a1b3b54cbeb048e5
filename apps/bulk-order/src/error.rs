//! # API and Configuration Errors
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Bulk Order App                     │
//! │                                                                         │
//! │  Startup                                                                │
//! │  ───────                                                                │
//! │  ConfigState::from_env / CatalogState::load                            │
//! │         │                                                               │
//! │         └── ConfigError (bad tiers, unreadable catalog) ──► exit 1     │
//! │                                                                         │
//! │  Commands                                                               │
//! │  ────────                                                               │
//! │  select_order("ORD-9")                                                  │
//! │         │                                                               │
//! │         ├── ValidationError ──┐                                         │
//! │         │                     ├──► CoreError ──► ApiError ──► UI       │
//! │         └── OrderNotFound ────┘                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The frontend receives `{ "code": "NOT_FOUND", "message": "..." }`.

use std::path::PathBuf;

use serde::Serialize;
use sunline_core::{CoreError, TierConfigError, ValidationError};
use thiserror::Error;

// =============================================================================
// API Error
// =============================================================================

/// Error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Order not found: ORD-9"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Order id not in the catalog
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Configuration could not be loaded
    ConfigError,

    /// Selection operation rejected (already selected, not selected, full)
    SelectionError,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn selection(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::SelectionError, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::OrderNotFound(id) => ApiError::not_found("Order", &id),
            CoreError::AlreadySelected(_) | CoreError::NotSelected(_) => {
                ApiError::selection(err.to_string())
            }
            // A full selection is reported as a selection problem, not bad input
            CoreError::Validation(ValidationError::OutOfRange { ref field, max, .. })
                if field == "selected orders" =>
            {
                ApiError::selection(format!("A bulk order cannot have more than {} orders", max))
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
            CoreError::TierConfig(e) => {
                tracing::error!("Tier configuration error reached a command: {}", e);
                ApiError::new(ErrorCode::ConfigError, e.to_string())
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::from(CoreError::from(err))
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Configuration Error
// =============================================================================

/// Startup failures. None of these are recoverable at runtime.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is invalid: {source}")]
    InvalidTiers {
        var: &'static str,
        #[source]
        source: TierConfigError,
    },

    #[error("{var} is invalid: {reason}")]
    InvalidValue { var: &'static str, reason: String },

    #[error("cannot read catalog {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse catalog {origin}: {source}")]
    CatalogParse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog entry '{id}' is invalid: {source}")]
    InvalidCatalogEntry {
        id: String,
        #[source]
        source: ValidationError,
    },

    #[error("catalog contains order '{0}' more than once")]
    DuplicateOrderId(String),
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_serialization() {
        let err = ApiError::from(CoreError::OrderNotFound("ORD-9".to_string()));
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Order not found: ORD-9");
    }

    #[test]
    fn test_selection_errors_map_to_selection_code() {
        let err = ApiError::from(CoreError::AlreadySelected("ORD-1".to_string()));
        assert_eq!(err.code, ErrorCode::SelectionError);
        assert_eq!(err.message, "Order ORD-1 is already selected");

        let full = ApiError::from(ValidationError::OutOfRange {
            field: "selected orders".to_string(),
            min: 0,
            max: 500,
        });
        assert_eq!(full.code, ErrorCode::SelectionError);
    }

    #[test]
    fn test_validation_errors_map_to_validation_code() {
        let err = ApiError::from(ValidationError::Required {
            field: "order id".to_string(),
        });
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "order id is required");
    }

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::InvalidTiers {
            var: "SUNLINE_DISCOUNT_TIERS",
            source: TierConfigError::Empty,
        };
        assert_eq!(err.to_string(), "SUNLINE_DISCOUNT_TIERS is invalid: tier table is empty");

        let api = ApiError::from(err);
        assert_eq!(api.code, ErrorCode::ConfigError);
    }
}
