// src/export/model.rs

use crate::models::daily_record::DailyRecord;
use serde::Serialize;

/// One rendered line of the monthly report: every cell already formatted the
/// way it appears in the CSV document (minutes as "n分", labels in Japanese,
/// absent values empty). Shared by the CSV and JSON formats.
#[derive(Serialize, Clone, Debug)]
pub struct ReportRow {
    pub date: String,
    pub weekday: String,
    pub work_type: String,
    pub start_time: String,
    pub end_time: String,
    pub late_time: String,
    pub early_leave_time: String,
    pub overtime: String,
    pub night_overtime: String,
    pub leave_type: String,
    pub note: String,
}

/// Flat raw-field dump of a daily record for the machine-readable CSV
/// (`export --raw`); serde drives both header and rows.
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub user: String,
    pub work_date: String,
    pub work_type: &'static str,
    pub start_time: String,
    pub end_time: String,
    pub late_time: i32,
    pub early_leave_time: i32,
    pub overtime: i32,
    pub night_overtime: i32,
    pub leave_type: &'static str,
    pub work_pattern: u8,
    pub note: String,
    pub created_at: String,
}

impl RecordExport {
    pub fn from_record(r: &DailyRecord) -> Self {
        Self {
            user: r.user.clone(),
            work_date: r.date_str(),
            work_type: r.work_type.to_db_str(),
            start_time: r.start_str(),
            end_time: r.end_str(),
            late_time: r.late_time,
            early_leave_time: r.early_leave_time,
            overtime: r.overtime,
            night_overtime: r.night_overtime,
            leave_type: r.leave_type.map(|l| l.to_db_str()).unwrap_or(""),
            work_pattern: r.work_pattern.number(),
            note: r.note.clone(),
            created_at: r.created_at.clone(),
        }
    }
}
