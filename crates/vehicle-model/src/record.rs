//! Vehicle Record

use crate::attributes::{Condition, Drive, EngineType, Transmission, VehicleStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One vehicle in the dealership inventory.
///
/// Records are plain data: the pricing and statistics engines only read
/// them. Range checks live in `data-validator`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// Vehicle identification number (may be empty when unknown)
    #[serde(default)]
    pub vin: String,
    pub brand: String,
    pub model: String,
    /// Model year
    pub year: i32,
    /// Asking price
    pub price: f64,
    /// Odometer reading in km
    #[serde(default)]
    pub mileage: f64,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub engine_type: EngineType,
    #[serde(default)]
    pub transmission: Transmission,
    #[serde(default)]
    pub drive: Drive,
    #[serde(default)]
    pub condition: Condition,
    #[serde(default)]
    pub status: VehicleStatus,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_email: Option<String>,
    /// When the record entered the inventory
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn default_color() -> String {
    "Unspecified".to_string()
}

impl VehicleRecord {
    /// Create a record with the required fields; everything else defaults
    pub fn new(brand: impl Into<String>, model: impl Into<String>, year: i32, price: f64) -> Self {
        Self {
            vin: String::new(),
            brand: brand.into(),
            model: model.into(),
            year,
            price,
            mileage: 0.0,
            color: default_color(),
            engine_type: EngineType::default(),
            transmission: Transmission::default(),
            drive: Drive::default(),
            condition: Condition::default(),
            status: VehicleStatus::default(),
            description: String::new(),
            owner_phone: None,
            owner_email: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_vin(mut self, vin: impl Into<String>) -> Self {
        self.vin = vin.into();
        self
    }

    pub fn with_mileage(mut self, mileage: f64) -> Self {
        self.mileage = mileage;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_engine_type(mut self, engine_type: EngineType) -> Self {
        self.engine_type = engine_type;
        self
    }

    pub fn with_transmission(mut self, transmission: Transmission) -> Self {
        self.transmission = transmission;
        self
    }

    pub fn with_drive(mut self, drive: Drive) -> Self {
        self.drive = drive;
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.condition = condition;
        self
    }

    pub fn with_status(mut self, status: VehicleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// "Brand Model (Year)"
    pub fn full_name(&self) -> String {
        format!("{} {} ({})", self.brand, self.model, self.year)
    }

    /// Age in whole years relative to `reference_year`.
    ///
    /// Negative for next-year models.
    pub fn age(&self, reference_year: i32) -> i32 {
        reference_year - self.year
    }

    /// Whether the vehicle can currently be sold
    pub fn is_available(&self) -> bool {
        self.status == VehicleStatus::Available
    }

    /// Brand new: under 100 km and at most one year old
    pub fn is_new(&self, reference_year: i32) -> bool {
        self.mileage < 100.0 && self.age(reference_year) <= 1
    }
}

impl fmt::Display for VehicleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) - {:.0} [{}]",
            self.brand, self.model, self.year, self.price, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let car = VehicleRecord::new("Toyota", "Camry", 2020, 1_500_000.0);
        assert_eq!(car.condition, Condition::Good);
        assert_eq!(car.status, VehicleStatus::Available);
        assert_eq!(car.mileage, 0.0);
        assert_eq!(car.full_name(), "Toyota Camry (2020)");
    }

    #[test]
    fn test_age_and_new() {
        let car = VehicleRecord::new("Kia", "Rio", 2023, 900_000.0).with_mileage(50.0);
        assert_eq!(car.age(2024), 1);
        assert!(car.is_new(2024));
        assert!(!car.with_mileage(5_000.0).is_new(2024));
    }

    #[test]
    fn test_is_available() {
        let car = VehicleRecord::new("Lada", "Vesta", 2019, 600_000.0);
        assert!(car.is_available());
        assert!(!car.with_status(VehicleStatus::Sold).is_available());
    }

    #[test]
    fn test_deserialize_minimal_json() {
        let json = r#"{"brand":"BMW","model":"X5","year":2018,"price":3500000}"#;
        let car: VehicleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(car.brand, "BMW");
        assert_eq!(car.color, "Unspecified");
        assert_eq!(car.condition, Condition::Good);
    }
}
