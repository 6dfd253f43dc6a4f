//! Inventory Queries
//!
//! Read-only views over a vehicle list: conjunctive filters, free-text
//! search, sorting through the field accessor table, and pagination.
//! Inputs are never reordered in place.

mod filter;
mod page;
mod ranges;
mod search;
mod sort;

pub use filter::InventoryFilter;
pub use page::{paginate, Page};
pub use ranges::{price_range, unique_brands, year_range, PriceRange, YearRange};
pub use search::search;
pub use sort::{sort_by, sort_by_name};

use thiserror::Error;
use vehicle_model::ModelError;

/// Query errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// A query parameter is out of range or names an unknown field
    #[error("invalid {field}: {value}")]
    InvalidInput { field: &'static str, value: String },
}

impl QueryError {
    pub(crate) fn invalid(field: &'static str, value: impl ToString) -> Self {
        QueryError::InvalidInput {
            field,
            value: value.to_string(),
        }
    }
}

impl From<ModelError> for QueryError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::InvalidInput { field, value } => QueryError::InvalidInput { field, value },
        }
    }
}
