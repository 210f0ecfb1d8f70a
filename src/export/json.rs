use crate::errors::{AppError, AppResult};
use crate::export::model::ReportRow;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Pretty-printed JSON of the same per-day rows the CSV report carries.
pub(crate) fn export_json(rows: &[ReportRow], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    notify_export_success("JSON", path);
    Ok(())
}
