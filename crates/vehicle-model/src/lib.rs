//! Vehicle Inventory Model
//!
//! Records, attribute enums, and the typed field accessor table shared by
//! pricing, statistics, validation, and query crates.

mod attributes;
mod draft;
mod error;
mod field;
mod record;

pub use attributes::{Condition, Drive, EngineType, Transmission, VehicleStatus};
pub use draft::VehicleDraft;
pub use error::ModelError;
pub use field::{FieldValue, SearchField, SortField};
pub use record::VehicleRecord;

use chrono::{Datelike, Utc};

/// Current calendar year (UTC), the default reference year for age computations
pub fn current_year() -> i32 {
    Utc::now().year()
}
