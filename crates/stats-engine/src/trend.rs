//! Time-Series Trend Analysis

use crate::descriptive::mean;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::debug;

/// Direction of a fitted linear trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Rising,
    Falling,
    Stable,
}

impl TrendDirection {
    fn from_slope(slope: f64) -> Self {
        if slope > 0.0 {
            TrendDirection::Rising
        } else if slope < 0.0 {
            TrendDirection::Falling
        } else {
            TrendDirection::Stable
        }
    }
}

/// Ordinary least-squares fit of value against days since the first point
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearTrend {
    /// Value change per day
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub direction: TrendDirection,
}

impl LinearTrend {
    fn flat() -> Self {
        Self {
            slope: 0.0,
            intercept: 0.0,
            r_squared: 0.0,
            direction: TrendDirection::Stable,
        }
    }
}

/// Growth between the first and last values of a series, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthRate {
    /// `(last - first) / first * 100`; `+inf` if `first == 0` and `last > 0`
    pub total_growth: f64,
    /// Mean of stepwise percentage changes
    pub average_growth: f64,
    pub first_value: f64,
    pub last_value: f64,
}

/// Analyzer over a `(timestamp, value)` series.
///
/// The input is copied and sorted by timestamp; the caller's series is not
/// touched.
#[derive(Debug, Clone)]
pub struct TrendAnalyzer {
    points: Vec<(DateTime<Utc>, f64)>,
}

impl TrendAnalyzer {
    pub fn new(series: &[(DateTime<Utc>, f64)]) -> Self {
        let mut points = series.to_vec();
        points.sort_by_key(|(ts, _)| *ts);
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, v)| *v).collect()
    }

    /// Whole days elapsed since the first timestamp
    fn day_offsets(&self) -> Vec<f64> {
        let Some((start, _)) = self.points.first() else {
            return Vec::new();
        };
        self.points
            .iter()
            .map(|(ts, _)| (*ts - *start).num_days() as f64)
            .collect()
    }

    /// Least-squares linear trend.
    ///
    /// Fewer than two points, or all points on the same day, produce a flat
    /// `Stable` result.
    pub fn linear_trend(&self) -> LinearTrend {
        if self.points.len() < 2 {
            return LinearTrend::flat();
        }

        let x = self.day_offsets();
        let y = self.values();
        let n = x.len() as f64;

        let sum_x: f64 = x.iter().sum();
        let sum_y: f64 = y.iter().sum();
        let sum_xy: f64 = x.iter().zip(&y).map(|(a, b)| a * b).sum();
        let sum_x2: f64 = x.iter().map(|a| a * a).sum();

        let denominator = n * sum_x2 - sum_x * sum_x;
        if denominator == 0.0 {
            debug!("Linear trend: zero variance in x over {} points", x.len());
            return LinearTrend::flat();
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        let y_mean = sum_y / n;
        let ss_tot: f64 = y.iter().map(|v| (v - y_mean).powi(2)).sum();
        let ss_reg: f64 = x
            .iter()
            .map(|xi| (slope * xi + intercept - y_mean).powi(2))
            .sum();
        let r_squared = if ss_tot > 0.0 { ss_reg / ss_tot } else { 0.0 };

        LinearTrend {
            slope,
            intercept,
            r_squared,
            direction: TrendDirection::from_slope(slope),
        }
    }

    /// Trailing simple moving average. A series shorter than the window
    /// (or a zero window) is returned unchanged.
    pub fn moving_average(&self, window: usize) -> Vec<f64> {
        let values = self.values();
        if window == 0 || values.len() < window {
            return values;
        }
        values.windows(window).map(mean).collect()
    }

    /// Total and average stepwise growth in percent.
    ///
    /// Steps whose previous value is zero are skipped, but the average still
    /// divides by the full number of steps.
    pub fn growth_rate(&self) -> GrowthRate {
        let values = self.values();
        let (Some(&first), Some(&last)) = (values.first(), values.last()) else {
            return GrowthRate {
                total_growth: 0.0,
                average_growth: 0.0,
                first_value: 0.0,
                last_value: 0.0,
            };
        };

        if values.len() < 2 {
            return GrowthRate {
                total_growth: 0.0,
                average_growth: 0.0,
                first_value: first,
                last_value: last,
            };
        }

        let total_growth = if first == 0.0 {
            if last > 0.0 {
                f64::INFINITY
            } else {
                0.0
            }
        } else {
            (last - first) / first * 100.0
        };

        let step_sum: f64 = values
            .windows(2)
            .filter(|w| w[0] != 0.0)
            .map(|w| (w[1] - w[0]) / w[0] * 100.0)
            .sum();
        let average_growth = step_sum / (values.len() - 1) as f64;

        GrowthRate {
            total_growth,
            average_growth,
            first_value: first,
            last_value: last,
        }
    }

    /// Project `days_ahead` daily points past the last timestamp along the
    /// linear trend, clamped at zero.
    pub fn forecast(&self, days_ahead: u32) -> Vec<(DateTime<Utc>, f64)> {
        let (Some((start, _)), Some((last, _))) = (self.points.first(), self.points.last()) else {
            return Vec::new();
        };

        let trend = self.linear_trend();
        (1..=i64::from(days_ahead))
            .map(|i| {
                let ts = *last + Duration::days(i);
                let x = (ts - *start).num_days() as f64;
                (ts, (trend.slope * x + trend.intercept).max(0.0))
            })
            .collect()
    }
}
