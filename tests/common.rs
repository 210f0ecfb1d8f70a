#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;

pub fn rk() -> Command {
    cargo_bin_cmd!("rkintai")
}

/// Fresh per-test database path under the system temp dir.
pub fn setup_test_db(name: &str) -> String {
    let db_path = env::temp_dir()
        .join(format!("{name}_rkintai.sqlite"))
        .display()
        .to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Fresh output-file path under the system temp dir.
pub fn temp_out(name: &str, ext: &str) -> String {
    let out = env::temp_dir()
        .join(format!("{name}_out.{ext}"))
        .display()
        .to_string();
    fs::remove_file(&out).ok();
    out
}

/// Initialize DB and add a small April 2025 dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables)
    rk().args(["--db", db_path, "--test", "init"]) // uses --test init to create schema
        .assert()
        .success();

    // two plain office days; defaults apply (09:00-18:00, break 12:00-13:00)
    rk().args([
        "--db",
        db_path,
        "add",
        "2025-04-01",
        "--in",
        "09:00",
        "--out",
        "18:00",
    ])
    .assert()
    .success();

    rk().args([
        "--db",
        db_path,
        "add",
        "2025-04-02",
        "--in",
        "09:00",
        "--out",
        "20:00",
    ])
    .assert()
    .success();
}

/// Populate a month of records directly via the library store API for tests
/// that need volume without going through the CLI each time.
pub fn seed_month(db_path: &str, user: &str, year: i32, month: u32, days: u32) {
    use chrono::{NaiveDate, NaiveTime};
    use rkintai::models::daily_record::DailyRecord;
    use rkintai::store::AttendanceStore;

    let mut pool = rkintai::db::pool::DbPool::new(db_path).expect("open db");
    rkintai::db::initialize::init_db(&pool.conn).expect("init db");

    for day in 1..=days {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid date");
        let mut record = DailyRecord::new(user, date);
        record.start_time = NaiveTime::from_hms_opt(9, 0, 0);
        record.end_time = NaiveTime::from_hms_opt(18, 0, 0);
        pool.save_daily_record(&record).expect("save record");
    }
}
