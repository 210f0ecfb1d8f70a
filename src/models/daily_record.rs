use super::{leave_type::LeaveType, work_pattern::PatternSlot, work_type::WorkType};
use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;

/// One employee day, unique per (user, work_date).
///
/// `late_time`, `early_leave_time`, `overtime` and `night_overtime` are
/// derived minutes filled by the shift calculator before the record is
/// persisted; raw clock times stay authoritative.
#[derive(Debug, Clone, Serialize)]
pub struct DailyRecord {
    pub user: String,
    pub work_date: NaiveDate,     // ⇔ daily_records.work_date (TEXT "YYYY-MM-DD")
    pub work_type: WorkType,
    pub start_time: Option<NaiveTime>, // ⇔ start_time (TEXT "HH:MM", nullable)
    pub end_time: Option<NaiveTime>,   // ⇔ end_time (TEXT "HH:MM", nullable)
    pub late_time: i32,           // minutes
    pub early_leave_time: i32,    // minutes
    pub overtime: i32,            // minutes, total of the day's overtime split
    pub night_overtime: i32,      // minutes inside 22:00–05:00
    pub leave_type: Option<LeaveType>,
    pub work_pattern: PatternSlot,
    pub note: String,
    pub created_at: String,       // ISO8601
}

impl DailyRecord {
    /// Fresh record for a day, before any clock times are known.
    pub fn new(user: &str, work_date: NaiveDate) -> Self {
        Self {
            user: user.to_string(),
            work_date,
            work_type: WorkType::default(),
            start_time: None,
            end_time: None,
            late_time: 0,
            early_leave_time: 0,
            overtime: 0,
            night_overtime: 0,
            leave_type: None,
            work_pattern: PatternSlot::default(),
            note: String::new(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date_str(&self) -> String {
        self.work_date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }

    pub fn end_str(&self) -> String {
        self.end_time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }

    /// True when both clock times are present (a countable work day,
    /// holiday types excluded by the aggregator).
    pub fn has_both_times(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_some()
    }
}
