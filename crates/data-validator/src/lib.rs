//! Vehicle Data Validation
//!
//! Field-level checks for raw vehicle input, with a strict entry point that
//! stops at the first problem and a collecting one that reports everything.

mod error;
mod report;
mod sanitize;
mod validator;

pub use error::ValidationError;
pub use report::ValidationReport;
pub use sanitize::{required_fields_missing, sanitize, REQUIRED_FIELDS};
pub use validator::{Validator, ValidationConfig, KNOWN_COLORS};
