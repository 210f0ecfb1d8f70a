//! Wall-clock arithmetic: "HH:MM" ↔ minutes since midnight.
//! Absent input degrades to 0/None so the calculation pipeline stays total;
//! callers guard separately where zero would be ambiguous.

use chrono::{NaiveTime, Timelike};

/// Minutes since midnight; an absent time counts as a zero offset.
pub fn to_minutes(t: Option<NaiveTime>) -> i32 {
    match t {
        Some(t) => (t.hour() * 60 + t.minute()) as i32,
        None => 0,
    }
}

/// Permissive "HH:MM" parse: empty or malformed input yields None.
pub fn parse_hhmm(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").ok()
}

/// Minutes → "H:MM" display string (hour unpadded, minutes zero-padded).
/// Negative input floors to 0.
pub fn to_time_string(minutes: i32) -> String {
    let m = minutes.max(0);
    format!("{}:{:02}", m / 60, m % 60)
}
