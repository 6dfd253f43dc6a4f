//! Inventory range helpers

use serde::Serialize;
use vehicle_model::VehicleRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

/// Distinct non-empty brands, sorted
pub fn unique_brands(records: &[VehicleRecord]) -> Vec<String> {
    let mut brands: Vec<String> = records
        .iter()
        .filter(|r| !r.brand.is_empty())
        .map(|r| r.brand.clone())
        .collect();
    brands.sort();
    brands.dedup();
    brands
}

/// Cheapest and most expensive price; zeros for an empty list
pub fn price_range(records: &[VehicleRecord]) -> PriceRange {
    let mut prices = records.iter().map(|r| r.price);
    let Some(first) = prices.next() else {
        return PriceRange::default();
    };
    prices.fold(PriceRange { min: first, max: first }, |range, p| PriceRange {
        min: range.min.min(p),
        max: range.max.max(p),
    })
}

/// Oldest and newest model year; zeros for an empty list
pub fn year_range(records: &[VehicleRecord]) -> YearRange {
    let years = records.iter().map(|r| r.year);
    match (years.clone().min(), years.max()) {
        (Some(min), Some(max)) => YearRange { min, max },
        _ => YearRange::default(),
    }
}
