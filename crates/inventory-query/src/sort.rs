//! Sorting through the field accessor table

use crate::QueryError;
use vehicle_model::{current_year, SortField, VehicleRecord};

/// Stable sort of a copy of `records` by `field`.
///
/// Brand compares case-insensitively. Equal keys keep their input order in
/// both directions.
pub fn sort_by(records: &[VehicleRecord], field: SortField, descending: bool) -> Vec<VehicleRecord> {
    // age order does not depend on which reference year is used
    let reference_year = current_year();
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = field
            .extract(a, reference_year)
            .compare(&field.extract(b, reference_year));
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
    sorted
}

/// Sort by a field name (`price`, `year`, `mileage`, `age`, `brand`)
pub fn sort_by_name(
    records: &[VehicleRecord],
    name: &str,
    descending: bool,
) -> Result<Vec<VehicleRecord>, QueryError> {
    let field: SortField = name.parse()?;
    Ok(sort_by(records, field, descending))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleet() -> Vec<VehicleRecord> {
        vec![
            VehicleRecord::new("toyota", "Camry", 2020, 1_500_000.0).with_mileage(30_000.0),
            VehicleRecord::new("BMW", "X5", 2022, 4_000_000.0).with_mileage(10_000.0),
            VehicleRecord::new("Audi", "A4", 2020, 1_500_000.0).with_mileage(60_000.0),
        ]
    }

    fn models(records: &[VehicleRecord]) -> Vec<&str> {
        records.iter().map(|r| r.model.as_str()).collect()
    }

    #[test]
    fn test_sort_by_price_is_stable() {
        let records = fleet();
        assert_eq!(
            models(&sort_by(&records, SortField::Price, false)),
            vec!["Camry", "A4", "X5"]
        );
        assert_eq!(
            models(&sort_by(&records, SortField::Price, true)),
            vec!["X5", "Camry", "A4"]
        );
        // input untouched
        assert_eq!(models(&records), vec!["Camry", "X5", "A4"]);
    }

    #[test]
    fn test_sort_by_brand_ignores_case() {
        assert_eq!(
            models(&sort_by(&fleet(), SortField::Brand, false)),
            vec!["A4", "X5", "Camry"]
        );
    }

    #[test]
    fn test_sort_by_age_is_reverse_year() {
        assert_eq!(
            models(&sort_by(&fleet(), SortField::Age, false)),
            vec!["X5", "Camry", "A4"]
        );
        assert_eq!(
            models(&sort_by(&fleet(), SortField::Mileage, true)),
            vec!["A4", "Camry", "X5"]
        );
    }

    #[test]
    fn test_sort_by_name() {
        let sorted = sort_by_name(&fleet(), "YEAR", true).unwrap();
        assert_eq!(sorted[0].model, "X5");
        assert!(matches!(
            sort_by_name(&fleet(), "color", false),
            Err(QueryError::InvalidInput { field: "sort_field", .. })
        ));
    }
}
