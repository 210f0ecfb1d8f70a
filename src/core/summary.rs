//! Monthly aggregation of derived daily records.

use crate::core::{pattern, shift};
use crate::models::daily_record::DailyRecord;
use crate::models::monthly_settings::MonthlySettings;
use crate::models::work_type::WorkType;
use serde::Serialize;

/// Month-level totals.
///
/// `total_work_minutes` is recomputed from the raw clock times of every
/// record; the overtime columns trust the per-day values stored at save
/// time. The two deliberately do not share a source.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct MonthlySummary {
    pub work_days: u32,
    pub total_work_minutes: i32,
    pub total_overtime: i32,
    pub night_overtime: i32,
    pub legal_holiday_overtime: i32,
    pub extra_holiday_overtime: i32,
}

/// Fold one month of records into totals.
pub fn build(records: &[DailyRecord], settings: Option<&MonthlySettings>) -> MonthlySummary {
    let mut summary = MonthlySummary::default();

    for record in records {
        if !record.work_type.is_holiday() && record.has_both_times() {
            summary.work_days += 1;
        }

        // Worked time: always re-derived through the record's own pattern
        // slot, never read back from stored derived fields.
        let resolved = pattern::resolve(settings, record.work_pattern);
        summary.total_work_minutes +=
            shift::worked_minutes(record.start_time, record.end_time, &resolved);

        match record.work_type {
            WorkType::LegalHoliday => summary.legal_holiday_overtime += record.overtime,
            WorkType::ExtraHoliday => summary.extra_holiday_overtime += record.overtime,
            _ => summary.total_overtime += record.overtime,
        }

        summary.night_overtime += record.night_overtime;
    }

    summary
}
