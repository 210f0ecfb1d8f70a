use chrono::{NaiveDate, NaiveTime};
use rkintai::core::summary;
use rkintai::models::daily_record::DailyRecord;
use rkintai::models::work_type::WorkType;

fn t(h: u32, m: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, 0)
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, d).expect("date")
}

#[test]
fn test_empty_month_aggregates_to_zero() {
    let summary = summary::build(&[], None);
    assert_eq!(summary.work_days, 0);
    assert_eq!(summary.total_work_minutes, 0);
    assert_eq!(summary.total_overtime, 0);
    assert_eq!(summary.night_overtime, 0);
}

#[test]
fn test_work_days_needs_both_times_and_excludes_holidays() {
    let mut full = DailyRecord::new("alice", day(1));
    full.start_time = t(9, 0);
    full.end_time = t(18, 0);

    let mut open = DailyRecord::new("alice", day(2));
    open.start_time = t(9, 0); // no end yet

    let mut holiday = DailyRecord::new("alice", day(6));
    holiday.work_type = WorkType::LegalHoliday;
    holiday.start_time = t(9, 0);
    holiday.end_time = t(15, 0);

    let summary = summary::build(&[full, open, holiday], None);
    assert_eq!(summary.work_days, 1);
}

#[test]
fn test_total_work_is_recomputed_not_read_back() {
    let mut record = DailyRecord::new("alice", day(1));
    record.start_time = t(9, 0);
    record.end_time = t(18, 0);
    // a stale stored overtime value must not leak into the worked total
    record.overtime = 999;

    let summary = summary::build(&[record], None);
    assert_eq!(summary.total_work_minutes, 480);
    assert_eq!(summary.total_overtime, 999); // but it is trusted as overtime
}

#[test]
fn test_overtime_columns_route_by_work_type() {
    let mut office = DailyRecord::new("alice", day(1));
    office.work_type = WorkType::Work;
    office.overtime = 90;
    office.night_overtime = 30;

    let mut remote = DailyRecord::new("alice", day(2));
    remote.work_type = WorkType::Remote;
    remote.overtime = 15;

    let mut legal = DailyRecord::new("alice", day(6));
    legal.work_type = WorkType::LegalHoliday;
    legal.overtime = 120;

    let mut extra = DailyRecord::new("alice", day(12));
    extra.work_type = WorkType::ExtraHoliday;
    extra.overtime = 200;
    extra.night_overtime = 45;

    let summary = summary::build(&[office, remote, legal, extra], None);
    assert_eq!(summary.total_overtime, 105);
    assert_eq!(summary.legal_holiday_overtime, 120);
    assert_eq!(summary.extra_holiday_overtime, 200);
    assert_eq!(summary.night_overtime, 75);
}

#[test]
fn test_worked_total_resolves_each_records_own_pattern() {
    use rkintai::models::monthly_settings::MonthlySettings;
    use rkintai::models::work_pattern::{BreakSpan, PatternSlot};

    let mut settings = MonthlySettings::new("alice", 2025, 4, 8.0);
    let p2 = settings.pattern_mut(PatternSlot::new(2).expect("slot"));
    p2.start = t(7, 0);
    p2.end = t(16, 0);
    p2.breaks[0] = BreakSpan::new(
        t(11, 0).expect("time"),
        t(11, 30).expect("time"),
    );

    // slot 1 record: empty slot resolves to defaulted bounds, no break
    let mut first = DailyRecord::new("alice", day(1));
    first.start_time = t(9, 0);
    first.end_time = t(18, 0);

    // slot 2 record: the early shift with its 30-minute break
    let mut second = DailyRecord::new("alice", day(2));
    second.work_pattern = PatternSlot::new(2).expect("slot");
    second.start_time = t(7, 0);
    second.end_time = t(16, 0);

    let summary = summary::build(&[first, second], Some(&settings));
    // 540 (no break defaulted in) + 510
    assert_eq!(summary.total_work_minutes, 1050);
    assert_eq!(summary.work_days, 2);
}
