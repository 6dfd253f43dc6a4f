//! Validation Error Types

use serde::Serialize;
use thiserror::Error;

/// Errors during vehicle data validation
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
pub enum ValidationError {
    /// Value out of allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Text does not have the expected shape
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: &'static str, reason: String },

    /// Value is not one of the accepted keys
    #[error("invalid {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl ValidationError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::InvalidValue { field, .. } => field,
            ValidationError::MissingField(field) => field,
        }
    }

    pub(crate) fn format(field: &'static str, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field,
            reason: reason.into(),
        }
    }
}
