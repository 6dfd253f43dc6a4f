//! Descriptive Statistics
//!
//! Every helper is total: empty or too-short series produce `0.0`
//! (or `None` for the mode) instead of an error.

use serde::Serialize;
use std::collections::HashMap;

/// Arithmetic mean
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Middle value; average of the two middle values for even lengths
pub fn median(values: &[f64]) -> f64 {
    percentile(values, 50.0)
}

/// Most frequent value. Ties resolve to the value seen first.
pub fn mode(values: &[f64]) -> Option<f64> {
    // key -> (first index, count); -0.0 and 0.0 share a key
    let mut counts: HashMap<u64, (usize, usize)> = HashMap::new();
    for (i, &v) in values.iter().enumerate() {
        let key = if v == 0.0 { 0f64.to_bits() } else { v.to_bits() };
        counts.entry(key).or_insert((i, 0)).1 += 1;
    }

    counts
        .values()
        .max_by(|(ia, ca), (ib, cb)| ca.cmp(cb).then(ib.cmp(ia)))
        .map(|(first, _)| values[*first])
}

/// Sample variance (n - 1 denominator); needs at least 2 points
pub fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let m2: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    m2 / (values.len() - 1) as f64
}

/// Sample standard deviation; needs at least 2 points
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

pub fn min_value(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().cloned().fold(f64::MAX, f64::min)
}

pub fn max_value(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().cloned().fold(f64::MIN, f64::max)
}

/// Percentile `p` in `[0, 100]` with linear interpolation between the two
/// bracketing order statistics (index `(n - 1) * p / 100`).
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let index = (sorted.len() - 1) as f64 * p.clamp(0.0, 100.0) / 100.0;
    let lower = index.floor() as usize;
    let fraction = index - lower as f64;
    if fraction == 0.0 || lower + 1 >= sorted.len() {
        return sorted[lower];
    }
    sorted[lower] + (sorted[lower + 1] - sorted[lower]) * fraction
}

/// Standard deviation relative to the mean; 0 when the mean is 0
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    let m = mean(values);
    if m == 0.0 {
        return 0.0;
    }
    std_dev(values) / m
}

/// Skewness: Σ(x - μ)³ / (n · s³) with the sample standard deviation.
/// Needs at least 3 points.
pub fn skewness(values: &[f64]) -> f64 {
    if values.len() < 3 {
        return 0.0;
    }
    let m = mean(values);
    let s = std_dev(values);
    if s == 0.0 {
        return 0.0;
    }
    let m3: f64 = values.iter().map(|v| (v - m).powi(3)).sum();
    m3 / (values.len() as f64 * s.powi(3))
}

/// Summary statistics of one numeric series
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatSummary {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    pub mode: Option<f64>,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub variance: f64,
    pub std_dev: f64,
    /// Coefficient of variation
    pub cv: f64,
    /// Lower quartile
    pub q1: f64,
    /// Upper quartile
    pub q3: f64,
    /// Interquartile range
    pub iqr: f64,
}

impl StatSummary {
    /// Summary with quartiles at the 25th and 75th percentiles
    pub fn compute(values: &[f64]) -> Self {
        Self::compute_with_percentiles(values, 25.0, 75.0)
    }

    /// Summary with custom lower/upper percentiles in place of the quartiles
    pub fn compute_with_percentiles(values: &[f64], lower: f64, upper: f64) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let min = min_value(values);
        let max = max_value(values);
        let q1 = percentile(values, lower);
        let q3 = percentile(values, upper);

        Self {
            count: values.len(),
            sum: values.iter().sum(),
            mean: mean(values),
            median: median(values),
            mode: mode(values),
            min,
            max,
            range: max - min,
            variance: variance(values),
            std_dev: std_dev(values),
            cv: coefficient_of_variation(values),
            q1,
            q3,
            iqr: q3 - q1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn finite_vec(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(-1e9f64..1e9, min_len..=max_len)
    }

    proptest! {
        #[test]
        fn percentile_endpoints_and_median(values in finite_vec(1, 60)) {
            prop_assert_eq!(percentile(&values, 0.0), min_value(&values));
            prop_assert_eq!(percentile(&values, 100.0), max_value(&values));
            prop_assert_eq!(percentile(&values, 50.0), median(&values));
        }

        #[test]
        fn variance_non_negative(values in finite_vec(2, 60)) {
            prop_assert!(variance(&values) >= 0.0);
        }

        #[test]
        fn percentile_within_bounds(values in finite_vec(1, 60), p in 0.0f64..=100.0) {
            let v = percentile(&values, p);
            prop_assert!(v >= min_value(&values) - 1e-6);
            prop_assert!(v <= max_value(&values) + 1e-6);
        }
    }
}
