//! `db --info` report: file size, row counts, date range and the approval
//! queue, straight off the connection with no store indirection.

use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::{Connection, OptionalExtension};
use std::fmt::Display;
use std::fs;

fn bullet(label: &str, value: impl Display) {
    println!("{CYAN}• {label}:{RESET} {value}");
}

fn count(conn: &Connection, sql: &str) -> rusqlite::Result<i64> {
    conn.query_row(sql, [], |row| row.get(0))
}

fn edge_date(conn: &Connection, order: &str) -> rusqlite::Result<Option<String>> {
    conn.query_row(
        &format!("SELECT work_date FROM daily_records ORDER BY work_date {order} LIMIT 1"),
        [],
        |row| row.get(0),
    )
    .optional()
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    let conn = &pool.conn;
    println!();

    let bytes = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    bullet("File", format!("{YELLOW}{db_path}{RESET}"));
    bullet("Size", format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0)));

    let records = count(conn, "SELECT COUNT(*) FROM daily_records")?;
    let users = count(conn, "SELECT COUNT(DISTINCT user) FROM daily_records")?;
    let holidays = count(conn, "SELECT COUNT(*) FROM annual_holidays")?;
    bullet("Daily records", format!("{GREEN}{records}{RESET}"));
    bullet("Users", format!("{GREEN}{users}{RESET}"));
    bullet("Registered holidays", format!("{GREEN}{holidays}{RESET}"));

    let none = || format!("{GREY}--{RESET}");
    let first = edge_date(conn, "ASC")?.unwrap_or_else(none);
    let last = edge_date(conn, "DESC")?.unwrap_or_else(none);
    println!("{CYAN}• Date range:{RESET}");
    println!("    from: {first}");
    println!("    to:   {last}");

    let pending = count(conn, "SELECT COUNT(*) FROM approvals WHERE status = 'pending'")?;
    let approved = count(conn, "SELECT COUNT(*) FROM approvals WHERE status = 'approved'")?;
    bullet(
        "Approvals",
        format!("{YELLOW}{pending}{RESET} pending, {GREEN}{approved}{RESET} approved"),
    );

    println!();
    Ok(())
}
