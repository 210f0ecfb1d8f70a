use chrono::NaiveTime;
use rkintai::core::{clock, pattern, shift};
use rkintai::models::monthly_settings::MonthlySettings;
use rkintai::models::work_pattern::{BreakSpan, PatternSlot, WorkPattern};
use rkintai::models::work_type::WorkType;

fn t(h: u32, m: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, 0)
}

fn slot(n: u8) -> PatternSlot {
    PatternSlot::new(n).expect("valid slot")
}

#[test]
fn test_parse_hhmm_accepts_and_rejects() {
    assert_eq!(clock::parse_hhmm("09:30"), t(9, 30));
    assert_eq!(clock::parse_hhmm("9:30"), t(9, 30));
    assert_eq!(clock::parse_hhmm(" 23:59 "), t(23, 59));
    assert_eq!(clock::parse_hhmm(""), None);
    assert_eq!(clock::parse_hhmm("25:00"), None);
    assert_eq!(clock::parse_hhmm("0930"), None);
}

#[test]
fn test_to_minutes_treats_absent_as_zero() {
    assert_eq!(clock::to_minutes(t(9, 0)), 540);
    assert_eq!(clock::to_minutes(t(0, 0)), 0);
    assert_eq!(clock::to_minutes(None), 0);
}

#[test]
fn test_to_time_string_clamps_negative() {
    assert_eq!(clock::to_time_string(600), "10:00");
    assert_eq!(clock::to_time_string(90), "1:30");
    assert_eq!(clock::to_time_string(5), "0:05");
    assert_eq!(clock::to_time_string(0), "0:00");
    assert_eq!(clock::to_time_string(-30), "0:00");
}

#[test]
fn test_default_pattern_shape() {
    let p = pattern::default_pattern();
    assert_eq!(p.start, t(9, 0));
    assert_eq!(p.end, t(18, 0));
    assert_eq!(p.breaks[0].start, t(12, 0));
    assert_eq!(p.breaks[0].end, t(13, 0));
    assert!(!p.breaks[1].is_complete());
    assert!(!p.breaks[2].is_complete());
}

#[test]
fn test_resolve_without_settings_uses_default() {
    let p = pattern::resolve(None, slot(2));
    assert_eq!(p, pattern::default_pattern());
}

#[test]
fn test_resolve_defaults_missing_bounds_but_not_breaks() {
    let mut settings = MonthlySettings::new("alice", 2025, 4, 8.0);
    settings.pattern_mut(slot(1)).start = t(10, 0);
    // end and breaks stay unset

    let p = pattern::resolve(Some(&settings), slot(1));
    assert_eq!(p.start, t(10, 0));
    assert_eq!(p.end, t(18, 0)); // defaulted per field
    assert_eq!(shift::break_minutes(&p), 0); // breaks are never defaulted

    // an entirely empty slot gets both bounds defaulted
    let p2 = pattern::resolve(Some(&settings), slot(2));
    assert_eq!(p2.start, t(9, 0));
    assert_eq!(p2.end, t(18, 0));
    assert_eq!(shift::break_minutes(&p2), 0);
}

#[test]
fn test_break_minutes_ignores_half_open_spans() {
    let mut p = WorkPattern::new(t(9, 0), t(18, 0));
    p.breaks[0] = BreakSpan::new(
        t(12, 0).expect("time"),
        t(13, 0).expect("time"),
    );
    p.breaks[1].start = t(15, 0); // no end: ignored
    assert_eq!(shift::break_minutes(&p), 60);
}

#[test]
fn test_worked_minutes_basics() {
    let p = pattern::default_pattern();
    assert_eq!(shift::worked_minutes(t(9, 0), t(18, 0), &p), 480);
    assert_eq!(shift::worked_minutes(t(9, 0), t(20, 0), &p), 600);
    assert_eq!(shift::worked_minutes(None, t(18, 0), &p), 0);
    assert_eq!(shift::worked_minutes(t(9, 0), None, &p), 0);
}

#[test]
fn test_worked_minutes_can_go_negative() {
    // a break longer than the worked span flows through unclamped
    let mut p = WorkPattern::new(t(9, 0), t(18, 0));
    p.breaks[0] = BreakSpan::new(
        t(9, 0).expect("time"),
        t(18, 0).expect("time"),
    );
    assert_eq!(shift::worked_minutes(t(10, 0), t(12, 0), &p), -420);
}

#[test]
fn test_overtime_normal_threshold() {
    let split = shift::overtime(600, 8.0, WorkType::Work);
    assert_eq!(split.total, 120);
    assert_eq!(split.normal, 120);
    assert_eq!(split.legal_holiday, 0);
    assert_eq!(split.extra_holiday, 0);

    // below the threshold nothing accrues
    let none = shift::overtime(400, 8.0, WorkType::Remote);
    assert_eq!(none.total, 0);

    // fractional standard hours round to whole minutes (7.75h = 465min)
    let frac = shift::overtime(500, 7.75, WorkType::Work);
    assert_eq!(frac.total, 35);
}

#[test]
fn test_overtime_holiday_work_routes_whole_span() {
    let legal = shift::overtime(300, 8.0, WorkType::LegalHoliday);
    assert_eq!(legal.total, 300);
    assert_eq!(legal.legal_holiday, 300);
    assert_eq!(legal.normal, 0);

    let extra = shift::overtime(480, 8.0, WorkType::ExtraHoliday);
    assert_eq!(extra.total, 480);
    assert_eq!(extra.extra_holiday, 480);
}

#[test]
fn test_night_overtime_windows() {
    // evening overlap only
    assert_eq!(shift::night_overtime(t(20, 0), t(23, 0)), 60);
    // entirely inside the late-night window
    assert_eq!(shift::night_overtime(t(22, 0), t(23, 30)), 90);
    // early-morning side
    assert_eq!(shift::night_overtime(t(4, 0), t(4, 30)), 30);
    // spans the 05:00 boundary: only the first hour counts
    assert_eq!(shift::night_overtime(t(4, 0), t(9, 0)), 60);
    // an ordinary day shift never touches the window
    assert_eq!(shift::night_overtime(t(9, 0), t(18, 0)), 0);
    // absent times degrade to zero
    assert_eq!(shift::night_overtime(None, t(23, 0)), 0);
}

#[test]
fn test_late_and_early_leave_clamp_at_zero() {
    assert_eq!(shift::late_time(t(9, 30), t(9, 0)), 30);
    assert_eq!(shift::late_time(t(8, 30), t(9, 0)), 0);
    assert_eq!(shift::late_time(None, t(9, 0)), 0);

    assert_eq!(shift::early_leave_time(t(17, 0), t(18, 0)), 60);
    assert_eq!(shift::early_leave_time(t(19, 0), t(18, 0)), 0);
    assert_eq!(shift::early_leave_time(t(17, 0), None), 0);
}

#[test]
fn test_derive_fills_all_minute_fields() {
    use chrono::NaiveDate;
    use rkintai::models::daily_record::DailyRecord;

    let date = NaiveDate::from_ymd_opt(2025, 4, 7).expect("date");
    let mut record = DailyRecord::new("alice", date);
    record.start_time = t(9, 30);
    record.end_time = t(23, 0);

    shift::derive(&mut record, None);

    // 09:30-23:00 minus the default break = 750 worked, 270 past 8h
    assert_eq!(record.late_time, 30);
    assert_eq!(record.early_leave_time, 0);
    assert_eq!(record.overtime, 270);
    assert_eq!(record.night_overtime, 60);
}

#[test]
fn test_derive_respects_monthly_settings() {
    use chrono::NaiveDate;
    use rkintai::models::daily_record::DailyRecord;

    let mut settings = MonthlySettings::new("alice", 2025, 4, 7.5);
    let p = settings.pattern_mut(slot(1));
    p.start = t(10, 0);
    p.end = t(19, 0);
    p.breaks[0] = BreakSpan::new(
        t(13, 0).expect("time"),
        t(14, 0).expect("time"),
    );

    let date = NaiveDate::from_ymd_opt(2025, 4, 8).expect("date");
    let mut record = DailyRecord::new("alice", date);
    record.start_time = t(10, 0);
    record.end_time = t(19, 0);

    shift::derive(&mut record, Some(&settings));

    // 8h net against a 7.5h threshold
    assert_eq!(record.overtime, 30);
    assert_eq!(record.late_time, 0);
    assert_eq!(record.early_leave_time, 0);
}
