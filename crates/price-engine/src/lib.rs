//! Vehicle Price Engine
//!
//! Market price estimation from age, mileage, and condition factors, plus
//! standalone linear depreciation and loan annuity calculators.

mod calculator;
mod depreciation;
mod loan;
mod money;

pub use calculator::{
    ConditionPrice, MarketComparison, MarketVerdict, PriceCalculator, PriceEstimate, PriceFactors,
    Recommendation, RecommendationAction,
};
pub use depreciation::{calculate_depreciation, DepreciationSchedule, DEFAULT_ANNUAL_RATE};
pub use loan::{calculate_loan_payment, LoanPayment};
pub use money::{format_amount, round_dp, round_to_thousand};

use thiserror::Error;

/// Pricing errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// A single input failed its range or membership constraint
    #[error("invalid {field}: {value}")]
    InvalidInput { field: &'static str, value: String },
}

impl PricingError {
    pub(crate) fn invalid(field: &'static str, value: impl ToString) -> Self {
        PricingError::InvalidInput {
            field,
            value: value.to_string(),
        }
    }
}
