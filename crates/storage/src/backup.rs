//! Timestamped file backups

use crate::StorageError;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Copy `path` next to itself as `<stem>_backup_<YYYYmmdd_HHMMSS>.<ext>`
/// and return the new path.
pub fn create_backup(path: impl AsRef<Path>) -> Result<PathBuf, StorageError> {
    let path = path.as_ref();
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "inventory".to_string());
    let stamp = Utc::now().format("%Y%m%d_%H%M%S");
    let name = match path.extension() {
        Some(ext) => format!("{}_backup_{}.{}", stem, stamp, ext.to_string_lossy()),
        None => format!("{}_backup_{}", stem, stamp),
    };
    let target = path.with_file_name(name);

    fs::copy(path, &target)?;
    info!("Backed up {} to {}", path.display(), target.display());
    Ok(target)
}
