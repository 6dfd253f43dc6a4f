//! Categorical and Bucketed Distributions

use crate::descriptive::{max_value, min_value};
use serde::Serialize;
use std::collections::BTreeMap;
use vehicle_model::VehicleRecord;

/// One category and the number of records in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionBucket {
    pub label: String,
    pub count: usize,
}

/// Ordered label -> count mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Distribution {
    buckets: Vec<DistributionBucket>,
}

impl Distribution {
    /// Count labels, keeping first-seen order
    fn tally<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut buckets: Vec<DistributionBucket> = Vec::new();
        for label in labels {
            match buckets.iter_mut().find(|b| b.label == label) {
                Some(bucket) => bucket.count += 1,
                None => buckets.push(DistributionBucket { label, count: 1 }),
            }
        }
        Self { buckets }
    }

    /// Stable sort by count, largest first
    fn sorted_by_count(mut self) -> Self {
        self.buckets.sort_by(|a, b| b.count.cmp(&a.count));
        self
    }

    pub fn buckets(&self) -> &[DistributionBucket] {
        &self.buckets
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.buckets.iter().find(|b| b.label == label).map(|b| b.count)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|b| b.count).sum()
    }
}

/// Equal-width price bucket `[lower, upper)`; the last bucket also holds the max
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBucket {
    pub label: String,
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Partition prices into `bins` equal-width buckets between min and max.
///
/// Callers guarantee `bins > 0`. When all prices are equal the bucket width
/// is 1 and every price lands in the first bucket.
pub(crate) fn price_buckets(prices: &[f64], bins: usize) -> Vec<PriceBucket> {
    if prices.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = min_value(prices);
    let max = max_value(prices);
    let width = if max > min { (max - min) / bins as f64 } else { 1.0 };

    let lower_bound = |i: usize| min + i as f64 * width;
    let last = bins - 1;

    // membership is decided against the same bounds the buckets report
    let mut counts = vec![0usize; bins];
    for &price in prices {
        let mut index = (((price - min) / width).floor() as usize).min(last);
        while index > 0 && price < lower_bound(index) {
            index -= 1;
        }
        while index < last && price >= lower_bound(index + 1) {
            index += 1;
        }
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let lower = lower_bound(i);
            let upper = if i == last {
                max.max(lower + width)
            } else {
                lower_bound(i + 1)
            };
            PriceBucket {
                label: format!("{:.0} - {:.0}", lower, upper),
                lower,
                upper,
                count,
            }
        })
        .collect()
}

/// Records per model year, ascending
pub(crate) fn by_year(records: &[VehicleRecord]) -> BTreeMap<i32, usize> {
    let mut distribution = BTreeMap::new();
    for record in records {
        *distribution.entry(record.year).or_insert(0) += 1;
    }
    distribution
}

/// Records per brand, most common first
pub(crate) fn by_brand(records: &[VehicleRecord]) -> Distribution {
    Distribution::tally(records.iter().map(|r| r.brand.clone())).sorted_by_count()
}

/// Records per status label, first-seen order
pub(crate) fn by_status(records: &[VehicleRecord]) -> Distribution {
    Distribution::tally(records.iter().map(|r| r.status.label().to_string()))
}

/// Records per color, most common first
pub(crate) fn by_color(records: &[VehicleRecord]) -> Distribution {
    Distribution::tally(records.iter().map(|r| r.color.clone())).sorted_by_count()
}

/// Records per condition label, first-seen order
pub(crate) fn by_condition(records: &[VehicleRecord]) -> Distribution {
    Distribution::tally(records.iter().map(|r| r.condition.label().to_string()))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn price_bucket_counts_sum_to_input(
            prices in proptest::collection::vec(1.0f64..10_000_000.0, 1..200),
            bins in 1usize..25,
        ) {
            let buckets = price_buckets(&prices, bins);
            prop_assert_eq!(buckets.len(), bins);
            prop_assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), prices.len());
        }

        #[test]
        fn price_bucket_counts_match_reported_bounds(
            prices in proptest::collection::vec(1.0f64..10_000_000.0, 1..100),
            bins in 1usize..25,
        ) {
            let buckets = price_buckets(&prices, bins);
            for (i, bucket) in buckets.iter().enumerate() {
                let inside = prices
                    .iter()
                    .filter(|&&p| {
                        p >= bucket.lower
                            && (p < bucket.upper || (i == bins - 1 && p <= bucket.upper))
                    })
                    .count();
                prop_assert_eq!(bucket.count, inside);
            }
        }

        #[test]
        fn bucket_lower_bounds_land_in_their_bucket(
            min in 1.0f64..1_000_000.0,
            spread in 1.0f64..10_000_000.0,
            bins in 2usize..25,
        ) {
            let max = min + spread;
            let bounds = price_buckets(&[min, max], bins);
            for i in 1..bins {
                let lower = bounds[i].lower;
                if lower >= max {
                    continue;
                }
                let buckets = price_buckets(&[min, lower, max], bins);
                prop_assert_eq!(buckets[i].lower, lower);
                prop_assert!(buckets[i].count >= 1);
            }
        }

        #[test]
        fn brand_counts_sum_to_input(brands in proptest::collection::vec("[A-C]", 1..50)) {
            let records: Vec<VehicleRecord> = brands
                .iter()
                .map(|b| VehicleRecord::new(b.as_str(), "X", 2020, 1000.0))
                .collect();
            prop_assert_eq!(by_brand(&records).total(), records.len());
            prop_assert_eq!(by_year(&records).values().sum::<usize>(), records.len());
        }
    }
}
