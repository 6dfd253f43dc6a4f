//! Model Error Types

use thiserror::Error;

/// Errors raised while interpreting raw model values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A value does not map to any known key for the field
    #[error("invalid {field}: {value:?}")]
    InvalidInput { field: &'static str, value: String },
}

impl ModelError {
    pub(crate) fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        ModelError::InvalidInput {
            field,
            value: value.into(),
        }
    }
}
