//! Per-day shift derivation: worked time, lateness, early leave and the
//! overtime categories.

use crate::core::clock::to_minutes;
use crate::core::pattern;
use crate::models::daily_record::DailyRecord;
use crate::models::monthly_settings::MonthlySettings;
use crate::models::work_pattern::WorkPattern;
use crate::models::work_type::WorkType;
use chrono::NaiveTime;

/// Night window bounds in minutes since midnight: 22:00 through next-day
/// 05:00.
pub const NIGHT_START_MIN: i32 = 22 * 60;
pub const NIGHT_END_MIN: i32 = 5 * 60;
const DAY_MIN: i32 = 24 * 60;

/// Five-way overtime split for one day. `night` is always 0 here; the
/// caller merges the separately computed night overtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OvertimeSplit {
    pub total: i32,
    pub normal: i32,
    pub night: i32,
    pub legal_holiday: i32,
    pub extra_holiday: i32,
}

/// Sum of the pattern's break spans. A pair with only one end present is
/// silently ignored.
pub fn break_minutes(pattern: &WorkPattern) -> i32 {
    pattern
        .breaks
        .iter()
        .filter(|b| b.is_complete())
        .map(|b| to_minutes(b.end) - to_minutes(b.start))
        .sum()
}

/// Net worked minutes: shift span minus breaks. 0 when either clock time is
/// absent. Not clamped at 0: a break larger than the span flows through as
/// a negative value.
pub fn worked_minutes(
    start: Option<NaiveTime>,
    end: Option<NaiveTime>,
    pattern: &WorkPattern,
) -> i32 {
    if start.is_none() || end.is_none() {
        return 0;
    }
    to_minutes(end) - to_minutes(start) - break_minutes(pattern)
}

/// Overtime split for one day. Holiday-type work counts its whole worked
/// span as holiday overtime; any other work type counts only the minutes
/// beyond the standard hours.
pub fn overtime(worked: i32, standard_hours: f64, work_type: WorkType) -> OvertimeSplit {
    let mut split = OvertimeSplit::default();
    match work_type {
        WorkType::LegalHoliday => {
            split.total = worked;
            split.legal_holiday = worked;
        }
        WorkType::ExtraHoliday => {
            split.total = worked;
            split.extra_holiday = worked;
        }
        _ => {
            let threshold = (standard_hours * 60.0).round() as i32;
            let normal = (worked - threshold).max(0);
            split.total = normal;
            split.normal = normal;
        }
    }
    split
}

/// Minutes of the shift inside the night window. Same-day arithmetic only:
/// the end time never rolls past 24:00, so a shift that truly crosses
/// midnight must be recorded as two days.
pub fn night_overtime(start: Option<NaiveTime>, end: Option<NaiveTime>) -> i32 {
    let (Some(start), Some(end)) = (start, end) else {
        return 0;
    };
    let s = to_minutes(Some(start));
    let e = to_minutes(Some(end));

    let late_night = (e.min(DAY_MIN) - s.max(NIGHT_START_MIN)).max(0);
    let early_morning = (e.min(NIGHT_END_MIN) - s).max(0);
    late_night + early_morning
}

/// Minutes arrived after the scheduled start; never negative, 0 when either
/// time is absent.
pub fn late_time(actual_start: Option<NaiveTime>, scheduled_start: Option<NaiveTime>) -> i32 {
    if actual_start.is_none() || scheduled_start.is_none() {
        return 0;
    }
    (to_minutes(actual_start) - to_minutes(scheduled_start)).max(0)
}

/// Minutes left before the scheduled end; never negative, 0 when either
/// time is absent.
pub fn early_leave_time(actual_end: Option<NaiveTime>, scheduled_end: Option<NaiveTime>) -> i32 {
    if actual_end.is_none() || scheduled_end.is_none() {
        return 0;
    }
    (to_minutes(scheduled_end) - to_minutes(actual_end)).max(0)
}

/// Fill the record's derived minute fields from its raw clock times, its
/// pattern slot and the month's settings.
pub fn derive(record: &mut DailyRecord, settings: Option<&MonthlySettings>) {
    let pattern = pattern::resolve(settings, record.work_pattern);
    let standard_hours = settings
        .map(|s| s.standard_hours)
        .unwrap_or(pattern::DEFAULT_STANDARD_HOURS);

    let worked = worked_minutes(record.start_time, record.end_time, &pattern);
    let split = overtime(worked, standard_hours, record.work_type);

    record.late_time = late_time(record.start_time, pattern.start);
    record.early_leave_time = early_leave_time(record.end_time, pattern.end);
    record.overtime = split.total;
    record.night_overtime = night_overtime(record.start_time, record.end_time);
}
