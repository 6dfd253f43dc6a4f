//! Linear Depreciation

use crate::money::round_dp;
use crate::PricingError;
use serde::Serialize;
use vehicle_model::current_year;

/// Default yearly depreciation rate (10%)
pub const DEFAULT_ANNUAL_RATE: f64 = 0.1;

/// A vehicle never depreciates below this share of its purchase price
const RESIDUAL_FLOOR: f64 = 0.1;

/// Result of a linear depreciation calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepreciationSchedule {
    pub years_owned: i32,
    pub annual_depreciation: f64,
    pub total_depreciation: f64,
    pub current_value: f64,
    pub depreciation_percent: f64,
}

/// Linear depreciation of a purchase price over the years owned.
///
/// `current_year` defaults to the current calendar year. The current value
/// is floored at 10% of the purchase price; when the floor applies, the
/// total depreciation is reduced so that both values stay consistent.
pub fn calculate_depreciation(
    purchase_price: f64,
    purchase_year: i32,
    current_year_override: Option<i32>,
    annual_rate: f64,
) -> Result<DepreciationSchedule, PricingError> {
    let current = current_year_override.unwrap_or_else(current_year);

    if purchase_year > current {
        return Err(PricingError::invalid("purchase_year", purchase_year));
    }
    if !purchase_price.is_finite() || purchase_price <= 0.0 {
        return Err(PricingError::invalid("purchase_price", purchase_price));
    }
    if !(annual_rate > 0.0 && annual_rate <= 1.0) {
        return Err(PricingError::invalid("annual_rate", annual_rate));
    }

    let years_owned = current - purchase_year;
    let annual_depreciation = purchase_price * annual_rate;
    let mut total_depreciation = annual_depreciation * years_owned as f64;
    let mut current_value = purchase_price - total_depreciation;

    let floor = purchase_price * RESIDUAL_FLOOR;
    if current_value < floor {
        current_value = floor;
        total_depreciation = purchase_price - floor;
    }

    Ok(DepreciationSchedule {
        years_owned,
        annual_depreciation: round_dp(annual_depreciation, 2),
        total_depreciation: round_dp(total_depreciation, 2),
        current_value: round_dp(current_value, 2),
        depreciation_percent: round_dp(total_depreciation / purchase_price * 100.0, 1),
    })
}
