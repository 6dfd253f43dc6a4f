//! Free-text search

use vehicle_model::{SearchField, VehicleRecord};

/// Case-insensitive substring search over `fields`.
///
/// An empty `fields` list searches brand and model. A blank query returns
/// nothing. Each matching record appears once, in input order.
pub fn search(records: &[VehicleRecord], query: &str, fields: &[SearchField]) -> Vec<VehicleRecord> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    let fields: &[SearchField] = if fields.is_empty() {
        &SearchField::DEFAULT
    } else {
        fields
    };

    records
        .iter()
        .filter(|record| {
            fields
                .iter()
                .any(|field| field.extract(record).to_lowercase().contains(&query))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleet() -> Vec<VehicleRecord> {
        vec![
            VehicleRecord::new("Toyota", "Camry", 2020, 1_500_000.0)
                .with_description("One owner, camry hybrid"),
            VehicleRecord::new("Toyota", "Corolla", 2019, 1_100_000.0)
                .with_vin("JTDBR32E720123456"),
            VehicleRecord::new("Kia", "Rio", 2021, 900_000.0).with_color("Camry Red"),
        ]
    }

    #[test]
    fn test_default_fields_brand_and_model() {
        let found = search(&fleet(), "CAMRY", &[]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].model, "Camry");

        assert_eq!(search(&fleet(), "toy", &[]).len(), 2);
    }

    #[test]
    fn test_explicit_fields() {
        let records = fleet();
        let by_color = search(&records, "camry", &[SearchField::Color]);
        assert_eq!(by_color.len(), 1);
        assert_eq!(by_color[0].brand, "Kia");

        // a record matching several fields is returned once
        let all = search(&records, "camry", &SearchField::ALL);
        assert_eq!(all.len(), 2);

        let by_vin = search(&records, "jtdbr", &[SearchField::Vin]);
        assert_eq!(by_vin[0].model, "Corolla");
    }

    #[test]
    fn test_blank_query_is_empty() {
        assert!(search(&fleet(), "", &[]).is_empty());
        assert!(search(&fleet(), "   ", &SearchField::ALL).is_empty());
    }
}
