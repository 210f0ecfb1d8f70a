// src/export/raw.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::RecordExport;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::path::Path;

/// Machine-readable flat CSV of raw record fields (header via serde).
pub(crate) fn export_raw_csv(records: &[RecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting raw records to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for item in records {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("Raw CSV", path);
    Ok(())
}
