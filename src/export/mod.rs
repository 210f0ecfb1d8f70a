// src/export/mod.rs

mod fs_utils;
mod json;
mod model;
mod raw;
pub mod logic;
pub mod report;

pub use logic::ExportLogic;
pub use model::{RecordExport, ReportRow};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for all export formats.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{} export completed: {}", label, path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// File extension, which doubles as the format's display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// Human-facing default filename, e.g. `勤怠_2025年4月.csv`.
pub fn month_file_name(label: &str, year: i32, month: u32, extension: &str) -> String {
    format!("{}_{}年{}月.{}", label, year, month, extension)
}
