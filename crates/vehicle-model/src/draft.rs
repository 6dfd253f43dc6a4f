//! Untyped Vehicle Input

use serde::{Deserialize, Serialize};

/// Raw vehicle fields as they arrive from an importer or a form.
///
/// Every field is optional and textual enums are kept as strings, so that
/// the validator can report on all of them before a [`VehicleRecord`] is
/// built.
///
/// [`VehicleRecord`]: crate::VehicleRecord
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleDraft {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub price: Option<f64>,
    pub mileage: Option<f64>,
    pub vin: Option<String>,
    pub color: Option<String>,
    pub engine_type: Option<String>,
    pub transmission: Option<String>,
    pub drive: Option<String>,
    pub condition: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl VehicleDraft {
    /// Draft carrying only the required fields
    pub fn new(brand: &str, model: &str, year: i32, price: f64) -> Self {
        Self {
            brand: Some(brand.to_string()),
            model: Some(model.to_string()),
            year: Some(year),
            price: Some(price),
            ..Default::default()
        }
    }
}
