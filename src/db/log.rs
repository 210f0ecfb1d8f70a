use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Append one line to the internal `log` table.
///
/// Handlers call this after every successful write: `add`, `settings`,
/// `request`/`approve`/`reject`/`cancel`, `holiday`, `export`, `init`.
/// `target` identifies the touched row ("user YYYY-MM" or "user date"),
/// `message` summarizes the change.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;
    stmt.execute(params![
        Local::now().to_rfc3339(),
        operation,
        target,
        message
    ])?;

    Ok(())
}
