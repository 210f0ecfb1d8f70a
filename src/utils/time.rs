//! Time parsing helpers for the CLI boundary.
//!
//! Unlike the calculators, which degrade bad input to zero, these fail
//! loudly: a mistyped `--start` should be an error, not a silent 0:00.

use crate::core::clock;
use crate::errors::{AppError, AppResult};
use crate::models::work_pattern::BreakSpan;
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> AppResult<NaiveTime> {
    clock::parse_hhmm(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    match input {
        Some(s) => parse_time(s).map(Some),
        None => Ok(None),
    }
}

/// Parse "HH:MM-HH:MM" into a break span (used by `settings --break1` etc).
pub fn parse_break_span(input: &str) -> AppResult<BreakSpan> {
    let (start, end) = input
        .split_once('-')
        .ok_or_else(|| AppError::InvalidTime(format!("{input} (expected HH:MM-HH:MM)")))?;
    Ok(BreakSpan::new(parse_time(start)?, parse_time(end)?))
}

/// Signed H:MM rendering for surplus-style values (`-0:30`, `1:05`).
pub fn format_minutes(mins: i32) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{}:{:02}", sign, m / 60, m % 60)
}
