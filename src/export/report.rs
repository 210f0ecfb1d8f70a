//! The monthly report document: fixed 11-column layout, one row per calendar
//! day of the month whether or not a record exists for it.
//!
//! Rendering rules, kept byte-compatible with the documents the payroll side
//! already consumes:
//! - UTF-8 with BOM;
//! - minute cells show `"<n>分"` when non-zero and stay empty otherwise;
//! - the note cell is always double-quoted with inner quotes doubled, and it
//!   is the only quoted cell.

use crate::export::model::ReportRow;
use crate::models::daily_record::DailyRecord;
use crate::utils::date;
use chrono::NaiveDate;
use std::collections::HashMap;

pub const REPORT_HEADERS: [&str; 11] = [
    "日付",
    "曜日",
    "勤務区分",
    "出勤時刻",
    "退勤時刻",
    "遅刻時間",
    "早退時間",
    "残業時間",
    "深夜残業時間",
    "休暇区分",
    "備考",
];

/// "n分" for non-zero minutes, empty cell otherwise.
pub fn minutes_cell(minutes: i32) -> String {
    if minutes == 0 {
        String::new()
    } else {
        format!("{}分", minutes)
    }
}

fn empty_day(day: NaiveDate) -> ReportRow {
    ReportRow {
        date: day.format("%Y-%m-%d").to_string(),
        weekday: date::weekday_jp(day).to_string(),
        work_type: String::new(),
        start_time: String::new(),
        end_time: String::new(),
        late_time: String::new(),
        early_leave_time: String::new(),
        overtime: String::new(),
        night_overtime: String::new(),
        leave_type: String::new(),
        note: String::new(),
    }
}

fn record_row(record: &DailyRecord) -> ReportRow {
    ReportRow {
        date: record.date_str(),
        weekday: date::weekday_jp(record.work_date).to_string(),
        work_type: record.work_type.label().to_string(),
        start_time: record.start_str(),
        end_time: record.end_str(),
        late_time: minutes_cell(record.late_time),
        early_leave_time: minutes_cell(record.early_leave_time),
        overtime: minutes_cell(record.overtime),
        night_overtime: minutes_cell(record.night_overtime),
        leave_type: record
            .leave_type
            .map(|l| l.label().to_string())
            .unwrap_or_default(),
        note: record.note.clone(),
    }
}

/// One row per calendar day of (year, month), ascending; days without a
/// record carry only date and weekday.
pub fn build_rows(year: i32, month: u32, records: &[DailyRecord]) -> Vec<ReportRow> {
    let by_date: HashMap<NaiveDate, &DailyRecord> =
        records.iter().map(|r| (r.work_date, r)).collect();

    date::all_days_of_month(year, month)
        .into_iter()
        .map(|day| match by_date.get(&day) {
            Some(record) => record_row(record),
            None => empty_day(day),
        })
        .collect()
}

/// Render the full CSV document, BOM included.
pub fn render_csv(rows: &[ReportRow]) -> String {
    let mut out = String::from("\u{feff}");
    out.push_str(&REPORT_HEADERS.join(","));
    out.push('\n');

    for row in rows {
        let note = format!("\"{}\"", row.note.replace('"', "\"\""));
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{},{}\n",
            row.date,
            row.weekday,
            row.work_type,
            row.start_time,
            row.end_time,
            row.late_time,
            row.early_leave_time,
            row.overtime,
            row.night_overtime,
            row.leave_type,
            note,
        ));
    }

    out
}
