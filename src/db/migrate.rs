use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create all attendance tables with the current schema.
fn create_attendance_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS daily_records (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            user             TEXT NOT NULL,
            work_date        TEXT NOT NULL,
            work_type        TEXT NOT NULL DEFAULT 'work'
                             CHECK(work_type IN ('work','remote','late','early-leave',
                                                 'late-early','legal-holiday','extra-holiday')),
            start_time       TEXT,
            end_time         TEXT,
            late_time        INTEGER NOT NULL DEFAULT 0,
            early_leave_time INTEGER NOT NULL DEFAULT 0,
            overtime         INTEGER NOT NULL DEFAULT 0,
            night_overtime   INTEGER NOT NULL DEFAULT 0,
            leave_type       TEXT
                             CHECK(leave_type IN ('paid','absent','special','congratulation')),
            work_pattern     INTEGER NOT NULL DEFAULT 1 CHECK(work_pattern BETWEEN 1 AND 3),
            note             TEXT NOT NULL DEFAULT '',
            created_at       TEXT NOT NULL,
            UNIQUE (user, work_date)
        );

        CREATE TABLE IF NOT EXISTS monthly_settings (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            user           TEXT NOT NULL,
            year           INTEGER NOT NULL,
            month          INTEGER NOT NULL CHECK(month BETWEEN 1 AND 12),
            standard_hours REAL NOT NULL DEFAULT 8.0,

            pattern1_start TEXT, pattern1_end TEXT,
            pattern1_break1_start TEXT, pattern1_break1_end TEXT,
            pattern1_break2_start TEXT, pattern1_break2_end TEXT,
            pattern1_break3_start TEXT, pattern1_break3_end TEXT,

            pattern2_start TEXT, pattern2_end TEXT,
            pattern2_break1_start TEXT, pattern2_break1_end TEXT,
            pattern2_break2_start TEXT, pattern2_break2_end TEXT,
            pattern2_break3_start TEXT, pattern2_break3_end TEXT,

            pattern3_start TEXT, pattern3_end TEXT,
            pattern3_break1_start TEXT, pattern3_break1_end TEXT,
            pattern3_break2_start TEXT, pattern3_break2_end TEXT,
            pattern3_break3_start TEXT, pattern3_break3_end TEXT,

            UNIQUE (user, year, month)
        );

        CREATE TABLE IF NOT EXISTS approvals (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            user             TEXT NOT NULL,
            year             INTEGER NOT NULL,
            month            INTEGER NOT NULL CHECK(month BETWEEN 1 AND 12),
            status           TEXT NOT NULL DEFAULT 'draft'
                             CHECK(status IN ('draft','pending','approved','rejected')),
            requested_at     TEXT,
            approved_by      TEXT,
            approved_at      TEXT,
            rejection_reason TEXT,
            UNIQUE (user, year, month)
        );

        CREATE TABLE IF NOT EXISTS annual_holidays (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            user         TEXT NOT NULL,
            year         INTEGER NOT NULL,
            holiday_date TEXT NOT NULL,
            holiday_type TEXT NOT NULL
                         CHECK(holiday_type IN ('legal-holiday','extra-holiday','saturday-work')),
            UNIQUE (user, year, holiday_date)
        );

        CREATE INDEX IF NOT EXISTS idx_records_user_month
            ON daily_records(user, work_date);
        CREATE INDEX IF NOT EXISTS idx_approvals_status
            ON approvals(status);
        "#,
    )?;
    Ok(())
}

/// Databases created before rejection tracking lack the reason column.
fn migrate_add_rejection_reason(conn: &Connection) -> Result<()> {
    let version = "20250412_0003_add_rejection_reason";

    if !table_exists(conn, "approvals")? || table_has_column(conn, "approvals", "rejection_reason")?
    {
        return Ok(());
    }

    conn.execute("ALTER TABLE approvals ADD COLUMN rejection_reason TEXT;", [])?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added rejection_reason to approvals')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'rejection_reason' to approvals table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create missing attendance tables (idempotent)
    let fresh = !table_exists(conn, "daily_records")?;
    create_attendance_tables(conn)?;
    if fresh {
        success("Created attendance tables (current schema).");
    }

    // 3) Column upgrades for databases from older releases
    migrate_add_rejection_reason(conn)?;

    Ok(())
}
