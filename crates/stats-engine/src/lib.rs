//! Inventory Statistics Engine
//!
//! Descriptive statistics, categorical distributions, time-series trends,
//! and Pearson correlations over a snapshot of vehicle records.

mod config;
mod correlation;
mod descriptive;
mod distribution;
mod engine;
mod report;
mod trend;

pub use config::StatsConfig;
pub use correlation::{pearson, CorrelationMatrix};
pub use descriptive::{
    coefficient_of_variation, max_value, mean, median, min_value, mode, percentile, skewness,
    std_dev, variance, StatSummary,
};
pub use distribution::{Distribution, DistributionBucket, PriceBucket};
pub use engine::{
    AgeBand, AgeBandStats, BrandComparison, BrandProfile, BrandSummary, DepreciationAnalysis,
    Distributions, HeadToHead, InventoryOverview, PriceTrend, StatisticsEngine, StatisticsExport,
    SummaryReport,
};
pub use report::{render_summary_report, SummaryText};
pub use trend::{GrowthRate, LinearTrend, TrendAnalyzer, TrendDirection};

use thiserror::Error;

/// Statistics errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// Not enough records for the requested aggregate
    #[error("Empty dataset: {0}")]
    EmptyDataset(String),

    /// A lookup matched no records
    #[error("Not found: {0}")]
    NotFound(String),

    /// A tuning parameter is out of range
    #[error("invalid {field}: {value}")]
    InvalidInput { field: &'static str, value: String },
}
