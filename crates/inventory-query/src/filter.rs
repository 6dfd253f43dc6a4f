//! Conjunctive Inventory Filter

use crate::QueryError;
use serde::{Deserialize, Serialize};
use tracing::debug;
use vehicle_model::{current_year, Condition, EngineType, VehicleRecord, VehicleStatus};

/// Filter criteria; every set criterion must match.
///
/// Bounds are inclusive. Empty lists mean "any". Brand and color matching
/// ignores case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryFilter {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
    pub exact_year: Option<i32>,
    pub min_mileage: Option<f64>,
    pub max_mileage: Option<f64>,
    pub brands: Vec<String>,
    pub statuses: Vec<VehicleStatus>,
    pub conditions: Vec<Condition>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub colors: Vec<String>,
    pub engine_types: Vec<EngineType>,
}

fn within<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
    min.map_or(true, |m| value >= m) && max.map_or(true, |m| value <= m)
}

fn contains_ignore_case(list: &[String], value: &str) -> bool {
    let value = value.to_lowercase();
    list.iter().any(|item| item.to_lowercase() == value)
}

impl InventoryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn price_between(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn year_between(mut self, min: Option<i32>, max: Option<i32>) -> Self {
        self.min_year = min;
        self.max_year = max;
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.exact_year = Some(year);
        self
    }

    pub fn mileage_between(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_mileage = min;
        self.max_mileage = max;
        self
    }

    pub fn age_between(mut self, min: Option<i32>, max: Option<i32>) -> Self {
        self.min_age = min;
        self.max_age = max;
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.push(brand.into());
        self
    }

    pub fn status(mut self, status: VehicleStatus) -> Self {
        self.statuses.push(status);
        self
    }

    pub fn condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.colors.push(color.into());
        self
    }

    pub fn engine_type(mut self, engine_type: EngineType) -> Self {
        self.engine_types.push(engine_type);
        self
    }

    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Reject negative ages and inverted ranges
    pub fn validate(&self) -> Result<(), QueryError> {
        for (field, age) in [("min_age", self.min_age), ("max_age", self.max_age)] {
            if let Some(age) = age.filter(|a| *a < 0) {
                return Err(QueryError::invalid(field, age));
            }
        }
        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                return Err(QueryError::invalid("price_range", format!("{} > {}", min, max)));
            }
        }
        if let (Some(min), Some(max)) = (self.min_year, self.max_year) {
            if min > max {
                return Err(QueryError::invalid("year_range", format!("{} > {}", min, max)));
            }
        }
        if let (Some(min), Some(max)) = (self.min_mileage, self.max_mileage) {
            if min > max {
                return Err(QueryError::invalid("mileage_range", format!("{} > {}", min, max)));
            }
        }
        Ok(())
    }

    /// Whether one record satisfies every criterion
    pub fn matches(&self, record: &VehicleRecord, reference_year: i32) -> bool {
        within(record.price, self.min_price, self.max_price)
            && within(record.year, self.min_year, self.max_year)
            && self.exact_year.map_or(true, |y| record.year == y)
            && within(record.mileage, self.min_mileage, self.max_mileage)
            && (self.brands.is_empty() || contains_ignore_case(&self.brands, &record.brand))
            && (self.statuses.is_empty() || self.statuses.contains(&record.status))
            && (self.conditions.is_empty() || self.conditions.contains(&record.condition))
            && within(record.age(reference_year), self.min_age, self.max_age)
            && (self.colors.is_empty() || contains_ignore_case(&self.colors, &record.color))
            && (self.engine_types.is_empty() || self.engine_types.contains(&record.engine_type))
    }

    /// Matching records in input order, ages against the current year
    pub fn apply(&self, records: &[VehicleRecord]) -> Result<Vec<VehicleRecord>, QueryError> {
        self.apply_at(records, current_year())
    }

    /// Matching records in input order, ages against `reference_year`
    pub fn apply_at(
        &self,
        records: &[VehicleRecord],
        reference_year: i32,
    ) -> Result<Vec<VehicleRecord>, QueryError> {
        self.validate()?;
        let matched: Vec<VehicleRecord> = records
            .iter()
            .filter(|r| self.matches(r, reference_year))
            .cloned()
            .collect();
        debug!("Filter kept {} of {} vehicles", matched.len(), records.len());
        Ok(matched)
    }
}
