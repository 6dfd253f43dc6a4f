//! Storage Layer
//!
//! Inventory files as pretty-printed JSON arrays, plus validated import of
//! untyped drafts and timestamped backups.

mod backup;
mod drafts;
mod json;

pub use backup::create_backup;
pub use drafts::{import_drafts_json, import_drafts_json_strict, DraftImport, RejectedDraft};
pub use json::{
    export_json, from_json_str, import_json, import_json_checked, to_json_string, RecordImport,
    RejectedRecord,
};

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(#[from] data_validator::ValidationError),
}
