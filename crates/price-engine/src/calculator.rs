//! Market Price Calculator

use crate::money::{format_amount, round_dp, round_to_thousand};
use crate::PricingError;
use serde::Serialize;
use tracing::debug;
use vehicle_model::{current_year, Condition, VehicleRecord};

/// Earliest model year accepted
pub const MIN_YEAR: i32 = 1900;

/// Yearly value loss used by the age factor
const AGE_RATE: f64 = 0.03;

/// Age factor never drops below half the base value
const AGE_FLOOR: f64 = 0.5;

/// Spread of the negotiation range around the market price
const RANGE_SPREAD: f64 = 0.10;

/// Mileage bands: (upper bound exclusive, factor). Anything above the last
/// bound gets `HIGH_MILEAGE_FACTOR`.
const MILEAGE_BANDS: [(f64, f64); 4] = [
    (50_000.0, 1.10),
    (100_000.0, 1.00),
    (150_000.0, 0.90),
    (200_000.0, 0.80),
];
const HIGH_MILEAGE_FACTOR: f64 = 0.60;

/// Multiplier for a condition rating
pub fn condition_factor(condition: Condition) -> f64 {
    match condition {
        Condition::Excellent => 1.2,
        Condition::Good => 1.0,
        Condition::Average => 0.8,
        Condition::Poor => 0.6,
        Condition::Damaged => 0.4,
    }
}

/// Multipliers applied to the base price
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceFactors {
    pub age: f64,
    pub mileage: f64,
    pub condition: f64,
}

/// Market price estimate for one vehicle
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceEstimate {
    pub base_price: f64,
    /// Base price times all factors, rounded to the nearest 1000
    pub market_price: f64,
    /// Lower end of the negotiation range
    pub min_price: f64,
    /// Upper end of the negotiation range
    pub max_price: f64,
    pub factors: PriceFactors,
    /// Value lost relative to the base price, in percent (0 when the price grew)
    pub depreciation_percent: f64,
    pub condition: Condition,
    pub condition_description: &'static str,
}

/// Suggested action derived from market vs base price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationAction {
    /// Price grew by more than 10%
    SellUrgently,
    /// Price grew
    Sell,
    /// Price fell below 70% of base
    UrgentSale,
    /// Price fell below 85% of base
    SellWithDiscount,
    /// Price is at market
    Hold,
}

impl RecommendationAction {
    pub fn label(&self) -> &'static str {
        match self {
            RecommendationAction::SellUrgently => "sell urgently",
            RecommendationAction::Sell => "sell",
            RecommendationAction::UrgentSale => "urgent sale",
            RecommendationAction::SellWithDiscount => "sell with discount",
            RecommendationAction::Hold => "hold",
        }
    }
}

/// Pricing recommendation with explanation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub action: RecommendationAction,
    pub reason: &'static str,
    pub advice: String,
    pub risk: &'static str,
}

/// Verdict of a comparison against an external market average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketVerdict {
    AboveMarket,
    BelowMarket,
    InMarket,
}

impl MarketVerdict {
    pub fn label(&self) -> &'static str {
        match self {
            MarketVerdict::AboveMarket => "above market",
            MarketVerdict::BelowMarket => "below market",
            MarketVerdict::InMarket => "in market",
        }
    }
}

/// Market price compared with an average market price
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketComparison {
    pub market_price: f64,
    pub average_price: f64,
    pub difference: f64,
    pub percent_diff: f64,
    pub verdict: MarketVerdict,
    pub recommendation: String,
}

/// Market price under an alternative condition rating
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionPrice {
    pub condition: Condition,
    pub price: f64,
    pub description: &'static str,
}

/// Price calculator for a single vehicle.
///
/// Inputs are validated once in the constructor; every calculation method
/// afterwards is infallible and idempotent.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCalculator {
    base_price: f64,
    year: i32,
    mileage: f64,
    condition: Condition,
    reference_year: i32,
}

impl PriceCalculator {
    /// Create a calculator aged against the current calendar year
    pub fn new(
        base_price: f64,
        year: i32,
        mileage: f64,
        condition: Condition,
    ) -> Result<Self, PricingError> {
        Self::new_at(base_price, year, mileage, condition, current_year())
    }

    /// Create a calculator with zero mileage and `good` condition
    pub fn basic(base_price: f64, year: i32) -> Result<Self, PricingError> {
        Self::new(base_price, year, 0.0, Condition::Good)
    }

    /// Create a calculator aged against an explicit `reference_year`
    pub fn new_at(
        base_price: f64,
        year: i32,
        mileage: f64,
        condition: Condition,
        reference_year: i32,
    ) -> Result<Self, PricingError> {
        if !base_price.is_finite() || base_price <= 0.0 {
            return Err(PricingError::invalid("base_price", base_price));
        }
        if year < MIN_YEAR || year > reference_year + 1 {
            return Err(PricingError::invalid("year", year));
        }
        if !mileage.is_finite() || mileage < 0.0 {
            return Err(PricingError::invalid("mileage", mileage));
        }

        debug!(
            "Price calculator: base={} year={} mileage={} condition={}",
            base_price, year, mileage, condition
        );

        Ok(Self {
            base_price,
            year,
            mileage,
            condition,
            reference_year,
        })
    }

    /// Same as [`PriceCalculator::new_at`] but takes the condition as a key string
    pub fn with_condition_key(
        base_price: f64,
        year: i32,
        mileage: f64,
        condition: &str,
        reference_year: i32,
    ) -> Result<Self, PricingError> {
        let condition = condition
            .parse::<Condition>()
            .map_err(|_| PricingError::invalid("condition", condition))?;
        Self::new_at(base_price, year, mileage, condition, reference_year)
    }

    /// Calculator for an inventory record, using its asking price as base
    pub fn for_record(record: &VehicleRecord, reference_year: i32) -> Result<Self, PricingError> {
        Self::new_at(
            record.price,
            record.year,
            record.mileage,
            record.condition,
            reference_year,
        )
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    /// `max(0.5, 1 - 0.03 * age)` rounded to 2 decimals
    pub fn age_factor(&self) -> f64 {
        let age = (self.reference_year - self.year) as f64;
        round_dp((1.0 - age * AGE_RATE).max(AGE_FLOOR), 2)
    }

    /// Step function over mileage; band boundaries belong to the upper band
    pub fn mileage_factor(&self) -> f64 {
        MILEAGE_BANDS
            .iter()
            .find(|(limit, _)| self.mileage < *limit)
            .map(|(_, factor)| *factor)
            .unwrap_or(HIGH_MILEAGE_FACTOR)
    }

    pub fn condition_factor(&self) -> f64 {
        condition_factor(self.condition)
    }

    /// Market price rounded to the nearest 1000
    pub fn market_price(&self) -> f64 {
        round_to_thousand(
            self.base_price * self.age_factor() * self.mileage_factor() * self.condition_factor(),
        )
    }

    /// Full estimate: market price, negotiation range, factors, depreciation
    pub fn estimate(&self) -> PriceEstimate {
        let market_price = self.market_price();
        let min_price = round_to_thousand(market_price * (1.0 - RANGE_SPREAD));
        let max_price = round_to_thousand(market_price * (1.0 + RANGE_SPREAD));

        let depreciation_percent = if market_price >= self.base_price {
            0.0
        } else {
            round_dp((1.0 - market_price / self.base_price) * 100.0, 1)
        };

        PriceEstimate {
            base_price: self.base_price,
            market_price,
            min_price,
            max_price,
            factors: PriceFactors {
                age: self.age_factor(),
                mileage: self.mileage_factor(),
                condition: self.condition_factor(),
            },
            depreciation_percent,
            condition: self.condition,
            condition_description: self.condition.description(),
        }
    }

    /// Sale recommendation from the market-to-base price ratio
    pub fn recommendation(&self) -> Recommendation {
        let price = self.market_price();
        let amount = format_amount(price);
        let base = self.base_price;

        if price > base * 1.1 {
            Recommendation {
                action: RecommendationAction::SellUrgently,
                reason: "Market price is well above the base price",
                advice: format!("Sell now at {}", amount),
                risk: "Price may fall back",
            }
        } else if price > base {
            Recommendation {
                action: RecommendationAction::Sell,
                reason: "Market price is above the base price",
                advice: format!("Recommended price: {}", amount),
                risk: "Price can be raised slightly",
            }
        } else if price < base * 0.7 {
            Recommendation {
                action: RecommendationAction::UrgentSale,
                reason: "Heavy wear or high mileage",
                advice: format!("Lower the price to {} for a quick sale", amount),
                risk: "Further price decline",
            }
        } else if price < base * 0.85 {
            Recommendation {
                action: RecommendationAction::SellWithDiscount,
                reason: "Moderate wear",
                advice: format!("Target price: {}. Open to negotiation.", amount),
                risk: "Slight price decline",
            }
        } else {
            Recommendation {
                action: RecommendationAction::Hold,
                reason: "Price is at market",
                advice: format!("Optimal price: {}. Negotiation is reasonable.", amount),
                risk: "Price is stable",
            }
        }
    }

    /// Compare the market price with an external average market price
    pub fn compare_with_average(&self, average_price: f64) -> MarketComparison {
        let market_price = self.market_price();
        let difference = market_price - average_price;
        let percent_diff = if average_price != 0.0 {
            difference / average_price * 100.0
        } else {
            0.0
        };

        let verdict = if percent_diff > 10.0 {
            MarketVerdict::AboveMarket
        } else if percent_diff < -10.0 {
            MarketVerdict::BelowMarket
        } else {
            MarketVerdict::InMarket
        };

        MarketComparison {
            market_price,
            average_price,
            difference: round_dp(difference, 2),
            percent_diff: round_dp(percent_diff, 1),
            verdict,
            recommendation: self.recommendation().advice,
        }
    }

    /// Market price under each condition rating (best first), holding
    /// price, year, and mileage fixed. At most `steps` entries.
    pub fn price_range_by_condition(&self, steps: usize) -> Vec<ConditionPrice> {
        Condition::ALL
            .into_iter()
            .take(steps)
            .map(|condition| {
                let what_if = Self {
                    condition,
                    ..self.clone()
                };
                ConditionPrice {
                    condition,
                    price: what_if.market_price(),
                    description: condition.description(),
                }
            })
            .collect()
    }
}
