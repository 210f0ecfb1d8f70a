//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // IO
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // Database-related
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // Parsing errors
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid month (expected YYYY-MM): {0}")]
    InvalidMonth(String),

    #[error("Invalid work type: {0}")]
    InvalidWorkType(String),

    #[error("Invalid leave type: {0}")]
    InvalidLeaveType(String),

    #[error("Invalid holiday type: {0}")]
    InvalidHolidayType(String),

    #[error("Invalid work pattern number (expected 1-3): {0}")]
    InvalidPattern(String),

    // Workflow errors
    #[error("Approval state conflict: {0}")]
    StateConflict(String),

    #[error("Month is locked by an approved request: {0}")]
    MonthLocked(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Export errors
    #[error("Export error: {0}")]
    Export(String),

    // Generic fallback
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
