//! JSON inventory files

use crate::StorageError;
use data_validator::{ValidationError, Validator};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info, warn};
use vehicle_model::VehicleRecord;

/// A stored record that failed validation, with its position in the file
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    pub index: usize,
    pub errors: Vec<ValidationError>,
}

/// Outcome of a checked record import
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordImport {
    pub accepted: Vec<VehicleRecord>,
    pub rejected: Vec<RejectedRecord>,
}

/// Pretty-printed JSON array of records
pub fn to_json_string(records: &[VehicleRecord]) -> Result<String, StorageError> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub fn from_json_str(json: &str) -> Result<Vec<VehicleRecord>, StorageError> {
    Ok(serde_json::from_str(json)?)
}

/// Write `records` to `path`, replacing any existing file
pub fn export_json(records: &[VehicleRecord], path: impl AsRef<Path>) -> Result<(), StorageError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    info!("Exported {} vehicles to {}", records.len(), path.display());
    Ok(())
}

/// Read a JSON array of records from `path`
pub fn import_json(path: impl AsRef<Path>) -> Result<Vec<VehicleRecord>, StorageError> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let records: Vec<VehicleRecord> = serde_json::from_reader(reader)?;
    debug!("Imported {} vehicles from {}", records.len(), path.display());
    Ok(records)
}

/// Read a JSON array of records from `path`, keeping only those that pass
/// `validator`
pub fn import_json_checked(
    path: impl AsRef<Path>,
    validator: &Validator,
) -> Result<RecordImport, StorageError> {
    let path = path.as_ref();
    let records = import_json(path)?;
    let total = records.len();

    let mut outcome = RecordImport::default();
    for (index, record) in records.into_iter().enumerate() {
        let errors = validator.validate_record(&record);
        if errors.is_empty() {
            outcome.accepted.push(record);
            continue;
        }
        warn!(
            "Record {} ({}) rejected: {}",
            index,
            record.full_name(),
            errors[0]
        );
        outcome.rejected.push(RejectedRecord { index, errors });
    }

    info!(
        "Imported {} of {} vehicles from {}",
        outcome.accepted.len(),
        total,
        path.display()
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vehicle_model::{Condition, VehicleStatus};

    fn fleet() -> Vec<VehicleRecord> {
        vec![
            VehicleRecord::new("Toyota", "Camry", 2020, 1_500_000.0)
                .with_vin("JTDBR32E720123456")
                .with_mileage(45_000.0)
                .with_condition(Condition::Excellent),
            VehicleRecord::new("Lada", "Vesta", 2019, 700_000.0).with_status(VehicleStatus::Sold),
        ]
    }

    #[test]
    fn test_file_export_import() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let records = fleet();

        export_json(&records, &path).unwrap();
        assert_eq!(import_json(&path).unwrap(), records);
    }

    #[test]
    fn test_checked_import_skips_invalid_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        let mut records = fleet();
        records.insert(1, VehicleRecord::new("Toyota", "Camry", 2020, 0.0));
        export_json(&records, &path).unwrap();

        let validator = Validator::default().with_reference_year(2024);
        let outcome = import_json_checked(&path, &validator).unwrap();

        records.remove(1);
        assert_eq!(outcome.accepted, records);
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].index, 1);
        assert_eq!(outcome.rejected[0].errors[0].field(), "price");
    }

    #[test]
    fn test_minimal_json_uses_defaults() {
        let records = from_json_str(
            r#"[{"brand": "Kia", "model": "Rio", "year": 2021, "price": 900000, "status": "in_transit"}]"#,
        )
        .unwrap();
        assert_eq!(records[0].status, VehicleStatus::InTransit);
        assert_eq!(records[0].mileage, 0.0);
        assert_eq!(records[0].color, "Unspecified");
    }

    #[test]
    fn test_string_form_is_pretty_array() {
        let json = to_json_string(&fleet()).unwrap();
        assert!(json.starts_with("[\n"));
        assert!(json.contains("\"condition\": \"excellent\""));
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            import_json("/definitely/not/here.json"),
            Err(StorageError::Io(_))
        ));
        assert!(matches!(from_json_str("{"), Err(StorageError::Serialization(_))));
    }
}
