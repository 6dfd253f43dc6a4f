//! Statistics Engine
//!
//! Aggregate reports over a borrowed, non-empty snapshot of vehicle records.
//! The engine extracts the numeric series once at construction and never
//! mutates the records.

use crate::config::StatsConfig;
use crate::correlation::CorrelationMatrix;
use crate::descriptive::{max_value, mean, median, min_value, std_dev, StatSummary};
use crate::distribution::{self, Distribution, PriceBucket};
use crate::trend::{TrendAnalyzer, TrendDirection};
use crate::StatsError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};
use vehicle_model::{current_year, VehicleRecord, VehicleStatus};

/// Fixed age bands used for price-by-age analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBand {
    /// 0-1 years (next-year models included)
    New,
    /// 2-3 years
    Young,
    /// 4-6 years
    Medium,
    /// 7-10 years
    Old,
    /// 11+ years
    Vintage,
}

impl AgeBand {
    pub const ALL: [AgeBand; 5] = [
        AgeBand::New,
        AgeBand::Young,
        AgeBand::Medium,
        AgeBand::Old,
        AgeBand::Vintage,
    ];

    /// Band of a vehicle `age` years old; next-year models (negative age)
    /// belong to no band
    pub fn for_age(age: i32) -> Option<Self> {
        match age {
            i32::MIN..=-1 => None,
            0..=1 => Some(AgeBand::New),
            2..=3 => Some(AgeBand::Young),
            4..=6 => Some(AgeBand::Medium),
            7..=10 => Some(AgeBand::Old),
            _ => Some(AgeBand::Vintage),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeBand::New => "new",
            AgeBand::Young => "young",
            AgeBand::Medium => "medium",
            AgeBand::Old => "old",
            AgeBand::Vintage => "vintage",
        }
    }
}

/// Price statistics of one age band
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeBandStats {
    pub band: AgeBand,
    pub count: usize,
    pub avg_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub median: f64,
}

/// Per-brand aggregate used in top-brand rankings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandSummary {
    pub brand: String,
    pub count: usize,
    pub avg_price: f64,
    pub total_value: f64,
    pub min_year: i32,
    pub max_year: i32,
    pub price_std: f64,
}

/// Year-over-year depreciation derived from average price per model year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepreciationAnalysis {
    /// Mean of `(avg[y-1] - avg[y]) / avg[y-1] * 100` over adjacent years
    pub avg_annual_depreciation: f64,
    /// From the oldest to the newest model year, in percent
    pub total_depreciation: f64,
    pub first_year: i32,
    pub last_year: i32,
    pub oldest_avg_price: f64,
    pub newest_avg_price: f64,
}

/// Trend of the daily average price by listing date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceTrend {
    pub direction: TrendDirection,
    pub slope: f64,
    pub r_squared: f64,
    pub total_growth: f64,
    pub average_growth: f64,
    pub data_points: usize,
}

/// Headline counts of the inventory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryOverview {
    pub total_vehicles: usize,
    pub available: usize,
    pub sold: usize,
    pub available_percent: f64,
    pub total_value: f64,
    pub unique_brands: usize,
}

/// Categorical distributions included in the summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Distributions {
    pub by_status: Distribution,
    pub by_brand: Distribution,
    pub by_color: Distribution,
    pub by_condition: Distribution,
}

/// Nested summary of the whole inventory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    pub overview: InventoryOverview,
    pub prices: Option<StatSummary>,
    pub years: Option<StatSummary>,
    pub mileage: Option<StatSummary>,
    pub age: Option<StatSummary>,
    pub distributions: Distributions,
}

/// One side of a brand comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandProfile {
    pub brand: String,
    pub count: usize,
    pub avg_price: f64,
    pub median_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    pub avg_age: f64,
    pub total_value: f64,
    pub status_distribution: Distribution,
}

/// Direct comparison of two brand profiles (first minus second)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeadToHead {
    pub price_difference: f64,
    /// First average over second average; 0 when the second is not positive
    pub price_ratio: f64,
    pub count_difference: i64,
}

/// Result of comparing two brands
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrandComparison {
    pub first: BrandProfile,
    pub second: BrandProfile,
    pub comparison: HeadToHead,
}

/// Everything the engine computes, ready for serialization
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsExport {
    pub summary: SummaryReport,
    pub price_distribution: Vec<PriceBucket>,
    pub year_distribution: BTreeMap<i32, usize>,
    pub top_brands: Vec<BrandSummary>,
    pub price_by_age: Vec<AgeBandStats>,
    pub depreciation: Option<DepreciationAnalysis>,
    pub price_trend: Option<PriceTrend>,
    pub correlations: Option<CorrelationMatrix>,
    pub generated_at: DateTime<Utc>,
}

/// Brands listed in the full export
const EXPORT_TOP_BRANDS: usize = 10;

/// Statistics over a non-empty record snapshot
#[derive(Debug, Clone)]
pub struct StatisticsEngine<'a> {
    records: &'a [VehicleRecord],
    reference_year: i32,
    config: StatsConfig,
    /// Non-positive prices are treated as not recorded
    prices: Vec<f64>,
    years: Vec<f64>,
    /// Zero mileage is treated as not recorded
    mileages: Vec<f64>,
    ages: Vec<f64>,
}

impl<'a> StatisticsEngine<'a> {
    /// Create an engine aged against the current calendar year
    pub fn new(records: &'a [VehicleRecord]) -> Result<Self, StatsError> {
        Self::with_reference_year(records, current_year())
    }

    /// Create an engine aged against `reference_year`
    pub fn with_reference_year(
        records: &'a [VehicleRecord],
        reference_year: i32,
    ) -> Result<Self, StatsError> {
        if records.is_empty() {
            return Err(StatsError::EmptyDataset(
                "statistics need at least one vehicle".to_string(),
            ));
        }

        info!("Statistics engine over {} vehicles", records.len());

        Ok(Self {
            records,
            reference_year,
            config: StatsConfig::default(),
            prices: records
                .iter()
                .map(|r| r.price)
                .filter(|p| *p > 0.0)
                .collect(),
            years: records.iter().map(|r| r.year as f64).collect(),
            mileages: records
                .iter()
                .map(|r| r.mileage)
                .filter(|m| *m > 0.0)
                .collect(),
            ages: records.iter().map(|r| r.age(reference_year) as f64).collect(),
        })
    }

    /// Replace the tuning configuration
    pub fn with_config(mut self, config: StatsConfig) -> Self {
        self.config = config;
        self
    }

    pub fn records(&self) -> &'a [VehicleRecord] {
        self.records
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    pub fn config(&self) -> &StatsConfig {
        &self.config
    }

    fn summarize(&self, values: &[f64], series: &str) -> Option<StatSummary> {
        if values.is_empty() {
            debug!("No {} values to summarize", series);
            return None;
        }
        Some(StatSummary::compute_with_percentiles(
            values,
            self.config.lower_percentile,
            self.config.upper_percentile,
        ))
    }

    pub fn price_statistics(&self) -> Option<StatSummary> {
        self.summarize(&self.prices, "price")
    }

    pub fn year_statistics(&self) -> Option<StatSummary> {
        self.summarize(&self.years, "year")
    }

    /// Statistics over recorded (non-zero) mileages
    pub fn mileage_statistics(&self) -> Option<StatSummary> {
        self.summarize(&self.mileages, "mileage")
    }

    pub fn age_statistics(&self) -> Option<StatSummary> {
        self.summarize(&self.ages, "age")
    }

    /// Equal-width price buckets from min to max price
    pub fn price_distribution(&self, bins: usize) -> Result<Vec<PriceBucket>, StatsError> {
        if bins == 0 {
            return Err(StatsError::InvalidInput {
                field: "bins",
                value: bins.to_string(),
            });
        }
        Ok(distribution::price_buckets(&self.prices, bins))
    }

    pub fn year_distribution(&self) -> BTreeMap<i32, usize> {
        distribution::by_year(self.records)
    }

    pub fn brand_distribution(&self) -> Distribution {
        distribution::by_brand(self.records)
    }

    pub fn status_distribution(&self) -> Distribution {
        distribution::by_status(self.records)
    }

    pub fn color_distribution(&self) -> Distribution {
        distribution::by_color(self.records)
    }

    pub fn condition_distribution(&self) -> Distribution {
        distribution::by_condition(self.records)
    }

    /// Brands ranked by vehicle count (ties keep first-seen order)
    pub fn top_brands(&self, limit: usize) -> Vec<BrandSummary> {
        let mut groups: Vec<(&str, Vec<&VehicleRecord>)> = Vec::new();
        for record in self.records {
            match groups.iter_mut().find(|(brand, _)| *brand == record.brand) {
                Some((_, members)) => members.push(record),
                None => groups.push((&record.brand, vec![record])),
            }
        }

        let mut ranking: Vec<BrandSummary> = groups
            .into_iter()
            .map(|(brand, members)| {
                let prices: Vec<f64> = members.iter().map(|r| r.price).collect();
                let total_value: f64 = prices.iter().sum();
                BrandSummary {
                    brand: brand.to_string(),
                    count: members.len(),
                    avg_price: total_value / members.len() as f64,
                    total_value,
                    min_year: members.iter().map(|r| r.year).min().unwrap_or_default(),
                    max_year: members.iter().map(|r| r.year).max().unwrap_or_default(),
                    price_std: std_dev(&prices),
                }
            })
            .collect();

        ranking.sort_by(|a, b| b.count.cmp(&a.count));
        ranking.truncate(limit);
        ranking
    }

    /// Price statistics per non-empty age band, youngest band first
    pub fn price_by_age(&self) -> Vec<AgeBandStats> {
        let mut bands: BTreeMap<AgeBand, Vec<f64>> = BTreeMap::new();
        for record in self.records {
            if let Some(band) = AgeBand::for_age(record.age(self.reference_year)) {
                bands.entry(band).or_default().push(record.price);
            }
        }

        bands
            .into_iter()
            .map(|(band, prices)| AgeBandStats {
                band,
                count: prices.len(),
                avg_price: mean(&prices),
                min_price: min_value(&prices),
                max_price: max_value(&prices),
                median: median(&prices),
            })
            .collect()
    }

    /// Depreciation across model years; `None` with fewer than two distinct years
    pub fn depreciation_analysis(&self) -> Option<DepreciationAnalysis> {
        let mut by_year: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
        for record in self.records {
            by_year.entry(record.year).or_default().push(record.price);
        }
        if by_year.len() < 2 {
            debug!("Depreciation analysis skipped: {} distinct year(s)", by_year.len());
            return None;
        }

        let years: Vec<i32> = by_year.keys().copied().collect();
        let averages: Vec<f64> = by_year.values().map(|prices| mean(prices)).collect();

        let rates: Vec<f64> = averages
            .windows(2)
            .filter(|w| w[0] > 0.0)
            .map(|w| (w[0] - w[1]) / w[0] * 100.0)
            .collect();

        let oldest = averages[0];
        let newest = averages[averages.len() - 1];
        let total_depreciation = if oldest > 0.0 {
            (oldest - newest) / oldest * 100.0
        } else {
            0.0
        };

        Some(DepreciationAnalysis {
            avg_annual_depreciation: mean(&rates),
            total_depreciation,
            first_year: years[0],
            last_year: years[years.len() - 1],
            oldest_avg_price: oldest,
            newest_avg_price: newest,
        })
    }

    /// Average price per listing date (midnight UTC), ordered by date
    pub fn price_series(&self) -> Vec<(DateTime<Utc>, f64)> {
        let mut by_date: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
        for record in self.records {
            by_date
                .entry(record.created_at.date_naive())
                .or_default()
                .push(record.price);
        }

        by_date
            .into_iter()
            .map(|(date, prices)| (date.and_time(chrono::NaiveTime::MIN).and_utc(), mean(&prices)))
            .collect()
    }

    /// Trend of the daily average price; `None` with fewer than two dates
    pub fn price_trend(&self) -> Option<PriceTrend> {
        let series = self.price_series();
        if series.len() < 2 {
            return None;
        }

        let analyzer = TrendAnalyzer::new(&series);
        let trend = analyzer.linear_trend();
        let growth = analyzer.growth_rate();

        Some(PriceTrend {
            direction: trend.direction,
            slope: trend.slope,
            r_squared: trend.r_squared,
            total_growth: growth.total_growth,
            average_growth: growth.average_growth,
            data_points: series.len(),
        })
    }

    /// Daily average price smoothed with the configured moving-average window
    pub fn smoothed_prices(&self) -> Vec<f64> {
        TrendAnalyzer::new(&self.price_series()).moving_average(self.config.moving_average_window)
    }

    /// Linear price forecast over the configured horizon
    pub fn price_forecast(&self) -> Vec<(DateTime<Utc>, f64)> {
        TrendAnalyzer::new(&self.price_series()).forecast(self.config.forecast_days)
    }

    /// Pairwise Pearson correlations; `None` for a single record
    pub fn correlations(&self) -> Option<CorrelationMatrix> {
        CorrelationMatrix::compute(self.records, self.reference_year)
    }

    /// Overview, per-series statistics, and categorical distributions
    pub fn summary(&self) -> SummaryReport {
        let prices = self.price_statistics();
        let total = self.records.len();
        let available = self.records.iter().filter(|r| r.is_available()).count();
        let sold = self
            .records
            .iter()
            .filter(|r| r.status == VehicleStatus::Sold)
            .count();
        let by_brand = self.brand_distribution();

        SummaryReport {
            overview: InventoryOverview {
                total_vehicles: total,
                available,
                sold,
                available_percent: available as f64 / total as f64 * 100.0,
                total_value: prices.as_ref().map_or(0.0, |p| p.sum),
                unique_brands: by_brand.len(),
            },
            prices,
            years: self.year_statistics(),
            mileage: self.mileage_statistics(),
            age: self.age_statistics(),
            distributions: Distributions {
                by_status: self.status_distribution(),
                by_brand,
                by_color: self.color_distribution(),
                by_condition: self.condition_distribution(),
            },
        }
    }

    fn brand_profile(&self, brand: &str) -> Result<BrandProfile, StatsError> {
        let members: Vec<VehicleRecord> = self
            .records
            .iter()
            .filter(|r| r.brand.to_lowercase() == brand.to_lowercase())
            .cloned()
            .collect();
        if members.is_empty() {
            return Err(StatsError::NotFound(format!("no vehicles of brand {}", brand)));
        }

        let prices: Vec<f64> = members.iter().map(|r| r.price).collect();
        let ages: Vec<f64> = members
            .iter()
            .map(|r| r.age(self.reference_year) as f64)
            .collect();

        Ok(BrandProfile {
            brand: brand.to_string(),
            count: members.len(),
            avg_price: mean(&prices),
            median_price: median(&prices),
            min_price: min_value(&prices),
            max_price: max_value(&prices),
            avg_age: mean(&ages),
            total_value: prices.iter().sum(),
            status_distribution: distribution::by_status(&members),
        })
    }

    /// Compare two brands, matched case-insensitively
    pub fn compare_brands(&self, first: &str, second: &str) -> Result<BrandComparison, StatsError> {
        let first = self.brand_profile(first)?;
        let second = self.brand_profile(second)?;

        let comparison = HeadToHead {
            price_difference: first.avg_price - second.avg_price,
            price_ratio: if second.avg_price > 0.0 {
                first.avg_price / second.avg_price
            } else {
                0.0
            },
            count_difference: first.count as i64 - second.count as i64,
        };

        Ok(BrandComparison {
            first,
            second,
            comparison,
        })
    }

    /// Full statistics export using the configured bucket count
    pub fn export(&self) -> Result<StatisticsExport, StatsError> {
        Ok(StatisticsExport {
            summary: self.summary(),
            price_distribution: self.price_distribution(self.config.price_bins)?,
            year_distribution: self.year_distribution(),
            top_brands: self.top_brands(EXPORT_TOP_BRANDS),
            price_by_age: self.price_by_age(),
            depreciation: self.depreciation_analysis(),
            price_trend: self.price_trend(),
            correlations: self.correlations(),
            generated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use vehicle_model::Condition;

    fn day(offset: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap() + Duration::days(offset)
    }

    fn fleet() -> Vec<VehicleRecord> {
        vec![
            VehicleRecord::new("Toyota", "Camry", 2020, 1_500_000.0)
                .with_mileage(45_000.0)
                .with_color("Black")
                .with_created_at(day(0)),
            VehicleRecord::new("Toyota", "RAV4", 2022, 2_500_000.0)
                .with_mileage(20_000.0)
                .with_color("White")
                .with_status(VehicleStatus::Sold)
                .with_created_at(day(0)),
            VehicleRecord::new("BMW", "X5", 2018, 3_000_000.0)
                .with_mileage(90_000.0)
                .with_color("Black")
                .with_condition(Condition::Excellent)
                .with_created_at(day(1)),
            VehicleRecord::new("Lada", "Vesta", 2012, 400_000.0)
                .with_color("White")
                .with_status(VehicleStatus::Reserved)
                .with_created_at(day(2)),
            VehicleRecord::new("toyota", "Corolla", 2024, 1_800_000.0)
                .with_color("Red")
                .with_created_at(day(2)),
        ]
    }

    #[test]
    fn test_empty_dataset_rejected() {
        let err = StatisticsEngine::with_reference_year(&[], 2024).unwrap_err();
        assert!(matches!(err, StatsError::EmptyDataset(_)));
    }

    #[test]
    fn test_single_record_statistics() {
        let records = vec![VehicleRecord::new("Kia", "Rio", 2020, 900_000.0)];
        let engine = StatisticsEngine::with_reference_year(&records, 2024).unwrap();
        let prices = engine.price_statistics().unwrap();
        assert_eq!(prices.variance, 0.0);
        assert_eq!(prices.std_dev, 0.0);
        assert_eq!(prices.mean, 900_000.0);
        assert_eq!(prices.median, 900_000.0);
        assert_eq!(prices.mode, Some(900_000.0));
        // zero mileage is not recorded
        assert!(engine.mileage_statistics().is_none());
        assert!(engine.correlations().is_none());
        assert!(engine.depreciation_analysis().is_none());
        assert!(engine.price_trend().is_none());
    }

    #[test]
    fn test_price_distribution_sums_to_records() {
        let records = fleet();
        let engine = StatisticsEngine::with_reference_year(&records, 2024).unwrap();
        let buckets = engine.price_distribution(10).unwrap();
        assert_eq!(buckets.len(), 10);
        assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), records.len());
        assert!(matches!(
            engine.price_distribution(0),
            Err(StatsError::InvalidInput { field: "bins", .. })
        ));
    }

    #[test]
    fn test_top_brands_ranking() {
        let records = fleet();
        let engine = StatisticsEngine::with_reference_year(&records, 2024).unwrap();
        let top = engine.top_brands(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].brand, "Toyota");
        assert_eq!(top[0].count, 2);
        assert_eq!(top[0].avg_price, 2_000_000.0);
        assert_eq!(top[0].total_value, 4_000_000.0);
        assert_eq!((top[0].min_year, top[0].max_year), (2020, 2022));
        assert!(top[0].price_std > 0.0);
        // single-vehicle brands have zero spread
        assert_eq!(top[1].brand, "BMW");
        assert_eq!(top[1].price_std, 0.0);
    }

    #[test]
    fn test_price_by_age_bands() {
        let records = fleet();
        let engine = StatisticsEngine::with_reference_year(&records, 2024).unwrap();
        let bands = engine.price_by_age();
        let labels: Vec<AgeBand> = bands.iter().map(|b| b.band).collect();
        assert_eq!(
            labels,
            vec![AgeBand::New, AgeBand::Young, AgeBand::Medium, AgeBand::Vintage]
        );
        let medium = &bands[2];
        assert_eq!(medium.count, 2);
        assert_eq!(medium.min_price, 1_500_000.0);
        assert_eq!(medium.max_price, 3_000_000.0);
        assert_eq!(medium.median, 2_250_000.0);
    }

    #[test]
    fn test_age_band_boundaries() {
        assert_eq!(AgeBand::for_age(-1), None);
        assert_eq!(AgeBand::for_age(0), Some(AgeBand::New));
        assert_eq!(AgeBand::for_age(1), Some(AgeBand::New));
        assert_eq!(AgeBand::for_age(2), Some(AgeBand::Young));
        assert_eq!(AgeBand::for_age(6), Some(AgeBand::Medium));
        assert_eq!(AgeBand::for_age(10), Some(AgeBand::Old));
        assert_eq!(AgeBand::for_age(11), Some(AgeBand::Vintage));
    }

    #[test]
    fn test_next_year_models_have_no_age_band() {
        let records = vec![
            VehicleRecord::new("Kia", "EV9", 2025, 6_000_000.0),
            VehicleRecord::new("Kia", "Rio", 2024, 1_000_000.0),
        ];
        let engine = StatisticsEngine::with_reference_year(&records, 2024).unwrap();
        let bands = engine.price_by_age();
        assert_eq!(bands.len(), 1);
        assert_eq!(bands[0].band, AgeBand::New);
        assert_eq!(bands[0].count, 1);
        assert_eq!(bands[0].max_price, 1_000_000.0);
    }

    #[test]
    fn test_unpriced_records_left_out_of_price_series() {
        let records = vec![
            VehicleRecord::new("Toyota", "Camry", 2020, 0.0),
            VehicleRecord::new("Kia", "Rio", 2019, 800_000.0),
            VehicleRecord::new("Kia", "Ceed", 2021, 1_200_000.0),
        ];
        let engine = StatisticsEngine::with_reference_year(&records, 2024).unwrap();
        let prices = engine.price_statistics().unwrap();
        assert_eq!(prices.count, 2);
        assert_eq!(prices.min, 800_000.0);
        assert_eq!(prices.mean, 1_000_000.0);
        let buckets = engine.price_distribution(4).unwrap();
        assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), 2);
        assert_eq!(buckets[0].lower, 800_000.0);
        // the unpriced record still counts as inventory
        assert_eq!(engine.summary().overview.total_vehicles, 3);
    }

    #[test]
    fn test_depreciation_analysis() {
        let records = vec![
            VehicleRecord::new("A", "1", 2020, 1_000_000.0),
            VehicleRecord::new("A", "2", 2021, 800_000.0),
            VehicleRecord::new("A", "3", 2021, 800_000.0),
            VehicleRecord::new("A", "4", 2022, 600_000.0),
        ];
        let engine = StatisticsEngine::with_reference_year(&records, 2024).unwrap();
        let d = engine.depreciation_analysis().unwrap();
        // 20% then 25%
        assert!((d.avg_annual_depreciation - 22.5).abs() < 1e-9);
        assert!((d.total_depreciation - 40.0).abs() < 1e-9);
        assert_eq!((d.first_year, d.last_year), (2020, 2022));
        assert_eq!(d.oldest_avg_price, 1_000_000.0);
        assert_eq!(d.newest_avg_price, 600_000.0);
    }

    #[test]
    fn test_depreciation_needs_two_years() {
        let records = vec![
            VehicleRecord::new("A", "1", 2020, 1_000_000.0),
            VehicleRecord::new("A", "2", 2020, 900_000.0),
        ];
        let engine = StatisticsEngine::with_reference_year(&records, 2024).unwrap();
        assert!(engine.depreciation_analysis().is_none());
    }

    #[test]
    fn test_price_series_groups_by_date() {
        let records = fleet();
        let engine = StatisticsEngine::with_reference_year(&records, 2024).unwrap();
        let series = engine.price_series();
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].1, 2_000_000.0);
        assert_eq!(series[0].0, Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap());
        assert_eq!(series[2].1, 1_100_000.0);

        let trend = engine.price_trend().unwrap();
        assert_eq!(trend.data_points, 3);
        assert_eq!(trend.direction, TrendDirection::Falling);
        assert!((trend.total_growth + 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_forecast_and_smoothing_use_config() {
        let records = fleet();
        let config = StatsConfig {
            forecast_days: 4,
            moving_average_window: 2,
            ..StatsConfig::default()
        };
        let engine = StatisticsEngine::with_reference_year(&records, 2024)
            .unwrap()
            .with_config(config);
        assert_eq!(engine.price_forecast().len(), 4);
        assert_eq!(engine.smoothed_prices().len(), 2);
    }

    #[test]
    fn test_summary_report() {
        let records = fleet();
        let engine = StatisticsEngine::with_reference_year(&records, 2024).unwrap();
        let summary = engine.summary();
        assert_eq!(summary.overview.total_vehicles, 5);
        assert_eq!(summary.overview.available, 3);
        assert_eq!(summary.overview.sold, 1);
        assert!((summary.overview.available_percent - 60.0).abs() < 1e-9);
        assert_eq!(summary.overview.total_value, 9_200_000.0);
        // brand keys are exact, so "toyota" counts separately
        assert_eq!(summary.overview.unique_brands, 4);
        assert_eq!(summary.mileage.as_ref().unwrap().count, 3);
        assert_eq!(summary.distributions.by_color.buckets()[0].count, 2);
        assert_eq!(summary.distributions.by_status.total(), 5);
        assert_eq!(summary.distributions.by_condition.total(), 5);
    }

    #[test]
    fn test_compare_brands_case_insensitive() {
        let records = fleet();
        let engine = StatisticsEngine::with_reference_year(&records, 2024).unwrap();
        let cmp = engine.compare_brands("TOYOTA", "bmw").unwrap();
        assert_eq!(cmp.first.count, 3);
        assert_eq!(cmp.first.brand, "TOYOTA");
        assert_eq!(cmp.first.min_price, 1_500_000.0);
        assert_eq!(cmp.first.max_price, 2_500_000.0);
        assert_eq!(cmp.first.status_distribution.get("Sold"), Some(1));
        assert_eq!(cmp.second.count, 1);
        assert_eq!(cmp.comparison.count_difference, 2);
        assert!((cmp.comparison.price_difference - (-1_066_666.666_666_666_7)).abs() < 1e-3);
        assert!(cmp.comparison.price_ratio < 1.0);
    }

    #[test]
    fn test_compare_unknown_brand_not_found() {
        let records = fleet();
        let engine = StatisticsEngine::with_reference_year(&records, 2024).unwrap();
        assert!(matches!(
            engine.compare_brands("Tesla", "BMW"),
            Err(StatsError::NotFound(_))
        ));
        assert!(matches!(
            engine.compare_brands("BMW", "Tesla"),
            Err(StatsError::NotFound(_))
        ));
    }

    #[test]
    fn test_export_serializes() {
        let records = fleet();
        let engine = StatisticsEngine::with_reference_year(&records, 2024).unwrap();
        let export = engine.export().unwrap();
        assert_eq!(export.price_distribution.len(), 10);
        assert!(export.correlations.is_some());
        let json = serde_json::to_value(&export).unwrap();
        assert_eq!(json["summary"]["overview"]["total_vehicles"], 5);
        assert_eq!(json["year_distribution"]["2020"], 1);
        assert_eq!(json["summary"]["distributions"]["by_brand"][0]["label"], "Toyota");
    }

    #[test]
    fn test_records_are_not_mutated() {
        let records = fleet();
        let before = records.clone();
        let engine = StatisticsEngine::with_reference_year(&records, 2024).unwrap();
        let _ = engine.export().unwrap();
        assert_eq!(records, before);
    }
}
