//! Collect-all validation outcome

use crate::error::ValidationError;
use serde::Serialize;
use vehicle_model::VehicleRecord;

/// Every error and warning found in one draft.
///
/// `record` is present only when there are no errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<String>,
    pub record: Option<VehicleRecord>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Names of the fields that failed, in check order
    pub fn failed_fields(&self) -> Vec<&'static str> {
        self.errors.iter().map(ValidationError::field).collect()
    }

    pub fn into_record(self) -> Option<VehicleRecord> {
        self.record
    }
}
