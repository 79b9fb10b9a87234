//! # Error Types
//!
//! Structured error types for deck_core. Every failure is raised synchronously
//! at the point of detection and carries enough context to fix the offending
//! input. Nothing is retryable: the computations are deterministic, so the
//! only remedy is to correct the inputs and recompute.
//!
//! ## Example
//!
//! ```rust
//! use deck_core::errors::{CalcError, CalcResult};
//!
//! fn validate_spacing(spacing_m: f64) -> CalcResult<()> {
//!     if spacing_m <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "beam_spacing_m",
//!             spacing_m.to_string(),
//!             "Beam spacing must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(validate_spacing(-1.0).unwrap_err().error_code(), "INVALID_INPUT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for deck_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for load distribution operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// The deck layout cannot describe a grillage (e.g. fewer than two beams)
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// The selected theory does not apply to this deck
    #[error("Unsupported configuration for {theory}: {reason}")]
    UnsupportedConfiguration { theory: String, reason: String },

    /// A load group has zero total weight, so its resultant eccentricity is undefined
    #[error("Degenerate load set: {group} loads sum to zero weight")]
    DegenerateLoadSet { group: String },

    /// A closed-form evaluation produced a non-finite value
    #[error("Numeric overflow while evaluating {quantity}")]
    NumericOverflow { quantity: String },

    /// An input value fails a basic arithmetic guard
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidConfiguration error
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        CalcError::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Create an UnsupportedConfiguration error
    pub fn unsupported(theory: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::UnsupportedConfiguration {
            theory: theory.into(),
            reason: reason.into(),
        }
    }

    /// Create a DegenerateLoadSet error
    pub fn degenerate_load_set(group: impl Into<String>) -> Self {
        CalcError::DegenerateLoadSet {
            group: group.into(),
        }
    }

    /// Create a NumericOverflow error
    pub fn numeric_overflow(quantity: impl Into<String>) -> Self {
        CalcError::NumericOverflow {
            quantity: quantity.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Check if retrying could change the outcome.
    ///
    /// Always false: every computation is a pure function of its inputs.
    pub fn is_recoverable(&self) -> bool {
        false
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            CalcError::UnsupportedConfiguration { .. } => "UNSUPPORTED_CONFIGURATION",
            CalcError::DegenerateLoadSet { .. } => "DEGENERATE_LOAD_SET",
            CalcError::NumericOverflow { .. } => "NUMERIC_OVERFLOW",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::unsupported("Engesser", "more than 3 internal diaphragms");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"UnsupportedConfiguration\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::degenerate_load_set("distributed").error_code(), "DEGENERATE_LOAD_SET");
        assert_eq!(CalcError::numeric_overflow("k_0").error_code(), "NUMERIC_OVERFLOW");
        assert_eq!(
            CalcError::invalid_configuration("1 beam").error_code(),
            "INVALID_CONFIGURATION"
        );
    }

    #[test]
    fn test_display_mentions_group() {
        let error = CalcError::degenerate_load_set("distributed");
        assert_eq!(
            error.to_string(),
            "Degenerate load set: distributed loads sum to zero weight"
        );
        assert!(!error.is_recoverable());
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<f64>("not a number").unwrap_err();
        let calc: CalcError = err.into();
        assert_eq!(calc.error_code(), "SERIALIZATION_ERROR");
    }
}
