// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::model::RecordExport;
use crate::export::raw::export_raw_csv;
use crate::export::{ExportFormat, month_file_name, notify_export_success, report};
use crate::store::AttendanceStore;
use crate::ui::messages::{info, warning};
use std::fs;
use std::path::PathBuf;

/// High-level logic for the `export` command.
pub struct ExportLogic;

impl ExportLogic {
    /// Export one (user, year, month). Returns the written path, or `None`
    /// when nothing was exported (raw dump of an empty month).
    ///
    /// Without `--file` the document lands in the current directory under the
    /// `<label>_<year>年<month>月` convention. The report formats render one
    /// row per calendar day even for an empty month; the raw dump warns and
    /// writes nothing when there are no records.
    #[allow(clippy::too_many_arguments)]
    pub fn export(
        store: &mut dyn AttendanceStore,
        user: &str,
        year: i32,
        month: u32,
        format: ExportFormat,
        file: Option<&String>,
        raw: bool,
        force: bool,
        label: &str,
    ) -> AppResult<Option<PathBuf>> {
        let records = store.daily_records_in_month(user, year, month)?;

        let extension = if raw { "csv" } else { format.as_str() };
        let path = match file {
            Some(f) => PathBuf::from(f),
            None => PathBuf::from(month_file_name(label, year, month, extension)),
        };

        if raw {
            if records.is_empty() {
                warning(format!("No records found for {}-{:02}.", year, month));
                return Ok(None);
            }

            ensure_writable(&path, force)?;
            let flat: Vec<RecordExport> =
                records.iter().map(RecordExport::from_record).collect();
            export_raw_csv(&flat, &path)?;
            return Ok(Some(path));
        }

        ensure_writable(&path, force)?;
        let rows = report::build_rows(year, month, &records);

        match format {
            ExportFormat::Csv => {
                info(format!("Exporting to CSV: {}", path.display()));
                fs::write(&path, report::render_csv(&rows))?;
                notify_export_success("CSV", &path);
            }
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(Some(path))
    }
}
