//! Vehicle Attribute Enums

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Qualitative condition rating of a vehicle
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Excellent,
    #[default]
    Good,
    Average,
    Poor,
    Damaged,
}

impl Condition {
    /// All conditions, best first
    pub const ALL: [Condition; 5] = [
        Condition::Excellent,
        Condition::Good,
        Condition::Average,
        Condition::Poor,
        Condition::Damaged,
    ];

    /// Machine key (`"excellent"`, `"good"`, ...)
    pub fn key(&self) -> &'static str {
        match self {
            Condition::Excellent => "excellent",
            Condition::Good => "good",
            Condition::Average => "average",
            Condition::Poor => "poor",
            Condition::Damaged => "damaged",
        }
    }

    /// Display label used in reports and distributions
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Excellent => "Excellent",
            Condition::Good => "Good",
            Condition::Average => "Average",
            Condition::Poor => "Poor",
            Condition::Damaged => "Damaged",
        }
    }

    /// Human description of what the rating means
    pub fn description(&self) -> &'static str {
        match self {
            Condition::Excellent => "Excellent condition, no defects",
            Condition::Good => "Good condition, light signs of use",
            Condition::Average => "Average condition, needs minor repairs",
            Condition::Poor => "Poor condition, needs major repairs",
            Condition::Damaged => "Damaged, needs restoration",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Condition {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Condition::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| ModelError::invalid("condition", s))
    }
}

/// Lifecycle status of a vehicle in the inventory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    #[default]
    Available,
    Sold,
    Reserved,
    InTransit,
    UnderRepair,
    Archived,
}

impl VehicleStatus {
    pub const ALL: [VehicleStatus; 6] = [
        VehicleStatus::Available,
        VehicleStatus::Sold,
        VehicleStatus::Reserved,
        VehicleStatus::InTransit,
        VehicleStatus::UnderRepair,
        VehicleStatus::Archived,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::Sold => "sold",
            VehicleStatus::Reserved => "reserved",
            VehicleStatus::InTransit => "in_transit",
            VehicleStatus::UnderRepair => "under_repair",
            VehicleStatus::Archived => "archived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::Sold => "Sold",
            VehicleStatus::Reserved => "Reserved",
            VehicleStatus::InTransit => "In transit",
            VehicleStatus::UnderRepair => "Under repair",
            VehicleStatus::Archived => "Archived",
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VehicleStatus {
    type Err = ModelError;

    /// Accepts either the key (`in_transit`) or the label (`In transit`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        VehicleStatus::ALL
            .into_iter()
            .find(|st| st.key() == wanted || st.label().to_lowercase() == wanted)
            .ok_or_else(|| ModelError::invalid("status", s))
    }
}

/// Engine / fuel type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineType {
    #[default]
    Petrol,
    Diesel,
    Hybrid,
    Electric,
    Gas,
}

impl EngineType {
    pub const ALL: [EngineType; 5] = [
        EngineType::Petrol,
        EngineType::Diesel,
        EngineType::Hybrid,
        EngineType::Electric,
        EngineType::Gas,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            EngineType::Petrol => "petrol",
            EngineType::Diesel => "diesel",
            EngineType::Hybrid => "hybrid",
            EngineType::Electric => "electric",
            EngineType::Gas => "gas",
        }
    }
}

impl fmt::Display for EngineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for EngineType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        EngineType::ALL
            .into_iter()
            .find(|e| e.key() == key)
            .ok_or_else(|| ModelError::invalid("engine_type", s))
    }
}

/// Gearbox type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transmission {
    Manual,
    #[default]
    Automatic,
    Robotic,
    Cvt,
}

impl Transmission {
    pub const ALL: [Transmission; 4] = [
        Transmission::Manual,
        Transmission::Automatic,
        Transmission::Robotic,
        Transmission::Cvt,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Transmission::Manual => "manual",
            Transmission::Automatic => "automatic",
            Transmission::Robotic => "robotic",
            Transmission::Cvt => "cvt",
        }
    }
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Transmission {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Transmission::ALL
            .into_iter()
            .find(|t| t.key() == key)
            .ok_or_else(|| ModelError::invalid("transmission", s))
    }
}

/// Driven axles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Drive {
    #[default]
    Front,
    Rear,
    All,
}

impl Drive {
    pub const ALL: [Drive; 3] = [Drive::Front, Drive::Rear, Drive::All];

    pub fn key(&self) -> &'static str {
        match self {
            Drive::Front => "front",
            Drive::Rear => "rear",
            Drive::All => "all",
        }
    }
}

impl fmt::Display for Drive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Drive {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Drive::ALL
            .into_iter()
            .find(|d| d.key() == key)
            .ok_or_else(|| ModelError::invalid("drive", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_parse_case_insensitive() {
        assert_eq!("Excellent".parse::<Condition>().unwrap(), Condition::Excellent);
        assert_eq!(" damaged ".parse::<Condition>().unwrap(), Condition::Damaged);
    }

    #[test]
    fn test_condition_unknown_key() {
        let err = "mint".parse::<Condition>().unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidInput {
                field: "condition",
                value: "mint".to_string()
            }
        );
    }

    #[test]
    fn test_status_parses_key_and_label() {
        assert_eq!("in_transit".parse::<VehicleStatus>().unwrap(), VehicleStatus::InTransit);
        assert_eq!("Under repair".parse::<VehicleStatus>().unwrap(), VehicleStatus::UnderRepair);
        assert!("lost".parse::<VehicleStatus>().is_err());
    }

    #[test]
    fn test_condition_serde_uses_keys() {
        let json = serde_json::to_string(&Condition::Average).unwrap();
        assert_eq!(json, "\"average\"");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Condition::default(), Condition::Good);
        assert_eq!(VehicleStatus::default(), VehicleStatus::Available);
        assert_eq!(Transmission::default(), Transmission::Automatic);
        assert_eq!(EngineType::default(), EngineType::Petrol);
        assert_eq!(Drive::default(), Drive::Front);
    }
}
