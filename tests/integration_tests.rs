use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::env;
use std::fs;

mod common;
use common::rk;

/// Fresh per-test database path under the system temp dir.
fn setup_test_db(name: &str) -> String {
    let db_path = env::temp_dir()
        .join(format!("{name}_rkintai.sqlite"))
        .display()
        .to_string();
    let _ = std::fs::remove_file(&db_path);
    db_path
}

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_schema");

    rk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("rkintai initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    for table in [
        "daily_records",
        "monthly_settings",
        "approvals",
        "annual_holidays",
        "log",
    ] {
        let found: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [table],
                |row| row.get(0),
            )
            .expect("sqlite_master");
        assert_eq!(found, 1, "missing table {table}");
    }
}

#[test]
fn test_list_shows_month_table_and_summary() {
    let db_path = setup_test_db("list_table");

    common::init_db_with_data(&db_path);

    rk().args(["--db", &db_path, "list", "-m", "2025-04"])
        .assert()
        .success()
        .stdout(contains("日付"))
        .stdout(contains("2025-04-01"))
        .stdout(contains("2025-04-02"))
        .stdout(contains("出勤"))
        .stdout(contains("120分"))
        .stdout(contains("work days"))
        .stdout(contains("未申請"));
}

#[test]
fn test_list_empty_month() {
    let db_path = setup_test_db("list_empty");

    rk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rk().args(["--db", &db_path, "list", "-m", "2025-06"])
        .assert()
        .success()
        .stdout(contains("No records for 2025-06"));

    rk().args(["--db", &db_path, "list", "-m", "2025-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

#[test]
fn test_approval_cycle_locks_and_unlocks_the_month() {
    let db_path = setup_test_db("approval_cycle");

    common::init_db_with_data(&db_path);

    rk().args(["--db", &db_path, "approval", "-m", "2025-04", "--request"])
        .assert()
        .success()
        .stdout(contains("submitted for approval"));

    rk().args(["--db", &db_path, "approval", "-m", "2025-04", "--status"])
        .assert()
        .success()
        .stdout(contains("承認待ち"));

    // a plain actor cannot settle the request
    rk().args(["--db", &db_path, "approval", "-m", "2025-04", "--approve"])
        .assert()
        .failure()
        .stderr(contains("Permission denied"));

    rk().args([
        "--db",
        &db_path,
        "--role",
        "approver",
        "approval",
        "-m",
        "2025-04",
        "--approve",
    ])
    .assert()
    .success()
    .stdout(contains("read-only"));

    rk().args(["--db", &db_path, "approval", "-m", "2025-04", "--status"])
        .assert()
        .success()
        .stdout(contains("承認済み"))
        .stdout(contains("handled by"));

    // edits are rejected while approved
    rk().args([
        "--db",
        &db_path,
        "add",
        "2025-04-03",
        "--in",
        "09:00",
        "--out",
        "18:00",
    ])
    .assert()
    .failure()
    .stderr(contains("approved and read-only"));

    // cancel reopens the month
    rk().args([
        "--db",
        &db_path,
        "--role",
        "approver",
        "approval",
        "-m",
        "2025-04",
        "--cancel",
    ])
    .assert()
    .success()
    .stdout(contains("editable again"));

    rk().args(["--db", &db_path, "approval", "-m", "2025-04", "--status"])
        .assert()
        .success()
        .stdout(contains("未申請"));

    rk().args([
        "--db",
        &db_path,
        "add",
        "2025-04-03",
        "--in",
        "09:00",
        "--out",
        "18:00",
    ])
    .assert()
    .success();
}

#[test]
fn test_rejection_reason_shows_in_status() {
    let db_path = setup_test_db("reject_reason");

    common::init_db_with_data(&db_path);

    rk().args(["--db", &db_path, "approval", "-m", "2025-04", "--request"])
        .assert()
        .success();

    rk().args([
        "--db",
        &db_path,
        "--role",
        "approver",
        "approval",
        "-m",
        "2025-04",
        "--reject",
        "day 2 looks wrong",
    ])
    .assert()
    .success()
    .stdout(contains("day 2 looks wrong"));

    rk().args(["--db", &db_path, "approval", "-m", "2025-04", "--status"])
        .assert()
        .success()
        .stdout(contains("却下"))
        .stdout(contains("day 2 looks wrong"));

    // rejected months stay editable
    rk().args([
        "--db",
        &db_path,
        "add",
        "2025-04-02",
        "--out",
        "19:00",
    ])
    .assert()
    .success();
}

#[test]
fn test_holiday_registration_and_listing() {
    let db_path = setup_test_db("holiday_listing");

    rk().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rk().args([
        "--db",
        &db_path,
        "holiday",
        "2025-01-01",
        "--type",
        "legal-holiday",
    ])
    .assert()
    .success()
    .stdout(contains("法定休日"));

    // --type defaults to legal-holiday
    rk().args(["--db", &db_path, "holiday", "2025-05-05"])
        .assert()
        .success();

    rk().args([
        "--db",
        &db_path,
        "holiday",
        "2025-12-28",
        "--type",
        "extra-holiday",
    ])
    .assert()
    .success();

    rk().args(["--db", &db_path, "holiday", "--list", "--year", "2025"])
        .assert()
        .success()
        .stdout(contains("2025-01-01"))
        .stdout(contains("2025-05-05"))
        .stdout(contains("2025-12-28"))
        .stdout(contains("法定外休日"))
        .stdout(contains("3 holiday(s) in 2025"));

    // other years stay out of the listing
    rk().args(["--db", &db_path, "holiday", "--list", "--year", "2024"])
        .assert()
        .success()
        .stdout(contains("No holidays registered for 2024"))
        .stdout(contains("2025-01-01").not());

    rk().args(["--db", &db_path, "holiday", "2025-14-99"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_db_maintenance_commands() {
    let db_path = setup_test_db("db_maintenance");

    common::init_db_with_data(&db_path);

    rk().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));

    rk().args(["--db", &db_path, "db", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Vacuum completed"));

    // re-running migrations on an up-to-date schema is a no-op
    rk().args(["--db", &db_path, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Migration completed"));

    rk().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Daily records:"))
        .stdout(contains("Registered holidays:"))
        .stdout(contains("pending"));

    rk().args(["--db", &db_path, "db"])
        .assert()
        .success()
        .stdout(contains("Nothing to do"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_operations");

    common::init_db_with_data(&db_path);

    rk().args(["--db", &db_path, "approval", "-m", "2025-04", "--request"])
        .assert()
        .success();

    rk().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("request"))
        .stdout(contains("2025-04-01"));
}

#[test]
fn test_export_default_filename_uses_month_convention() {
    let db_path = setup_test_db("export_default_name");

    let out_dir = env::temp_dir().join("rkintai_default_name_test");
    let _ = fs::remove_dir_all(&out_dir);
    fs::create_dir_all(&out_dir).expect("create out dir");

    common::init_db_with_data(&db_path);

    rk().current_dir(&out_dir)
        .args(["--db", &db_path, "export", "-m", "2025-04"])
        .assert()
        .success();

    let produced: Vec<String> = fs::read_dir(&out_dir)
        .expect("read out dir")
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();

    assert_eq!(produced.len(), 1);
    assert!(
        produced[0].ends_with("_2025年4月.csv"),
        "unexpected filename {:?}",
        produced
    );
}
