//! Field Accessor Table
//!
//! Sorting and searching address record fields by name. Instead of
//! reflection, each addressable field is an enum variant with a typed
//! extraction function; unknown names are rejected when parsed.

use crate::error::ModelError;
use crate::record::VehicleRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Value extracted from a record field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Total order: numbers by `total_cmp`, text case-insensitively,
    /// numbers before text
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (FieldValue::Number(_), FieldValue::Text(_)) => Ordering::Less,
            (FieldValue::Text(_), FieldValue::Number(_)) => Ordering::Greater,
        }
    }
}

/// Fields an inventory can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Price,
    Year,
    Mileage,
    Age,
    Brand,
}

impl SortField {
    pub const ALL: [SortField; 5] = [
        SortField::Price,
        SortField::Year,
        SortField::Mileage,
        SortField::Age,
        SortField::Brand,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SortField::Price => "price",
            SortField::Year => "year",
            SortField::Mileage => "mileage",
            SortField::Age => "age",
            SortField::Brand => "brand",
        }
    }

    /// Extract this field from a record; `reference_year` is only used by `Age`
    pub fn extract(&self, record: &VehicleRecord, reference_year: i32) -> FieldValue {
        match self {
            SortField::Price => FieldValue::Number(record.price),
            SortField::Year => FieldValue::Number(record.year as f64),
            SortField::Mileage => FieldValue::Number(record.mileage),
            SortField::Age => FieldValue::Number(record.age(reference_year) as f64),
            SortField::Brand => FieldValue::Text(record.brand.clone()),
        }
    }
}

impl FromStr for SortField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        SortField::ALL
            .into_iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| ModelError::invalid("sort_field", s))
    }
}

/// Text fields a free-text query can match against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    Brand,
    Model,
    Vin,
    Color,
    Description,
}

impl SearchField {
    pub const ALL: [SearchField; 5] = [
        SearchField::Brand,
        SearchField::Model,
        SearchField::Vin,
        SearchField::Color,
        SearchField::Description,
    ];

    /// Fields searched when the caller names none
    pub const DEFAULT: [SearchField; 2] = [SearchField::Brand, SearchField::Model];

    pub fn name(&self) -> &'static str {
        match self {
            SearchField::Brand => "brand",
            SearchField::Model => "model",
            SearchField::Vin => "vin",
            SearchField::Color => "color",
            SearchField::Description => "description",
        }
    }

    pub fn extract<'a>(&self, record: &'a VehicleRecord) -> &'a str {
        match self {
            SearchField::Brand => &record.brand,
            SearchField::Model => &record.model,
            SearchField::Vin => &record.vin,
            SearchField::Color => &record.color,
            SearchField::Description => &record.description,
        }
    }
}

impl FromStr for SearchField {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        SearchField::ALL
            .into_iter()
            .find(|f| f.name() == name)
            .ok_or_else(|| ModelError::invalid("search_field", s))
    }
}
