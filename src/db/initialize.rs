use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the attendance database.
/// The whole schema (`daily_records`, `monthly_settings`, `approvals`,
/// `annual_holidays`, `log`) is created and upgraded by the migration
/// engine; nothing is created directly here.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    Ok(run_pending_migrations(conn)?)
}
