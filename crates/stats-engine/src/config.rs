//! Statistics configuration

use serde::{Deserialize, Serialize};

/// Tunables for distributions, rankings, and trend analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Number of equal-width price buckets
    pub price_bins: usize,

    /// Brands listed in top-brand rankings
    pub top_brands: usize,

    /// Trailing window of the moving average
    pub moving_average_window: usize,

    /// Days projected by the price forecast
    pub forecast_days: u32,

    /// Lower quartile percentile
    pub lower_percentile: f64,

    /// Upper quartile percentile
    pub upper_percentile: f64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            price_bins: 10,
            top_brands: 5,
            moving_average_window: 7,
            forecast_days: 30,
            lower_percentile: 25.0,
            upper_percentile: 75.0,
        }
    }
}
