//! Validated import of untyped drafts

use crate::StorageError;
use data_validator::{ValidationReport, Validator};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::{info, warn};
use vehicle_model::{VehicleDraft, VehicleRecord};

/// A draft that failed validation, with its position in the file
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedDraft {
    pub index: usize,
    pub report: ValidationReport,
}

/// Outcome of a draft import
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DraftImport {
    pub accepted: Vec<VehicleRecord>,
    pub rejected: Vec<RejectedDraft>,
    /// Warnings of accepted drafts, prefixed with their index
    pub warnings: Vec<String>,
}

/// Load a JSON array of drafts and validate each one in collect-all mode
pub fn import_drafts_json(
    path: impl AsRef<Path>,
    validator: &Validator,
) -> Result<DraftImport, StorageError> {
    let path = path.as_ref();
    let drafts: Vec<VehicleDraft> = serde_json::from_reader(BufReader::new(File::open(path)?))?;

    let mut outcome = DraftImport::default();
    for (index, report) in validator.validate_batch_all(&drafts).into_iter().enumerate() {
        if !report.is_valid() {
            warn!(
                "Draft {} rejected: {} error(s)",
                index,
                report.errors.len()
            );
            outcome.rejected.push(RejectedDraft { index, report });
            continue;
        }
        outcome
            .warnings
            .extend(report.warnings.iter().map(|w| format!("draft {}: {}", index, w)));
        if let Some(record) = report.record {
            outcome.accepted.push(record);
        }
    }

    info!(
        "Imported {} of {} drafts from {}",
        outcome.accepted.len(),
        drafts.len(),
        path.display()
    );
    Ok(outcome)
}

/// Load a JSON array of drafts; the first invalid draft fails the import
pub fn import_drafts_json_strict(
    path: impl AsRef<Path>,
    validator: &Validator,
) -> Result<Vec<VehicleRecord>, StorageError> {
    let drafts: Vec<VehicleDraft> =
        serde_json::from_reader(BufReader::new(File::open(path.as_ref())?))?;
    Ok(validator.validate_batch_strict(&drafts)?)
}
