//! Pearson Correlation

use serde::Serialize;
use vehicle_model::VehicleRecord;

/// Pearson correlation coefficient of two equally long series.
///
/// Returns 0 when either series is constant or has fewer than two points.
/// Extra elements of the longer series are ignored.
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n < 2 {
        return 0.0;
    }
    let (x, y) = (&x[..n], &y[..n]);

    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return 0.0;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}

/// Pairwise correlations between price, year, mileage, and age
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    pub price_year: f64,
    pub price_mileage: f64,
    pub price_age: f64,
    pub year_mileage: f64,
    pub year_age: f64,
    pub age_mileage: f64,
}

impl CorrelationMatrix {
    /// `None` for fewer than two records
    pub fn compute(records: &[VehicleRecord], reference_year: i32) -> Option<Self> {
        if records.len() < 2 {
            return None;
        }

        let prices: Vec<f64> = records.iter().map(|r| r.price).collect();
        let years: Vec<f64> = records.iter().map(|r| r.year as f64).collect();
        let mileages: Vec<f64> = records.iter().map(|r| r.mileage).collect();
        let ages: Vec<f64> = records.iter().map(|r| r.age(reference_year) as f64).collect();

        Some(Self {
            price_year: pearson(&prices, &years),
            price_mileage: pearson(&prices, &mileages),
            price_age: pearson(&prices, &ages),
            year_mileage: pearson(&years, &mileages),
            year_age: pearson(&years, &ages),
            age_mileage: pearson(&ages, &mileages),
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn correlation_is_bounded(
            pairs in proptest::collection::vec((-1e6f64..1e6, -1e6f64..1e6), 2..80)
        ) {
            let (x, y): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
            let r = pearson(&x, &y);
            prop_assert!(r >= -1.0 - 1e-9 && r <= 1.0 + 1e-9);
        }
    }
}
