//! Work-pattern resolution: turns a month's settings plus a pattern slot
//! into a concrete shift template, falling back to the system default.

use crate::core::clock;
use crate::models::monthly_settings::MonthlySettings;
use crate::models::work_pattern::{PatternSlot, WorkPattern};

/// Fallback shift bounds. A pattern always needs bounds to compute worked
/// time; absent breaks legitimately mean "no break" and are never defaulted.
pub const DEFAULT_START: &str = "09:00";
pub const DEFAULT_END: &str = "18:00";
pub const DEFAULT_BREAK_START: &str = "12:00";
pub const DEFAULT_BREAK_END: &str = "13:00";

/// Overtime threshold applied when a month has no settings row.
pub const DEFAULT_STANDARD_HOURS: f64 = 8.0;

/// System default pattern: 09:00–18:00 with a single 12:00–13:00 break.
pub fn default_pattern() -> WorkPattern {
    let mut p = WorkPattern::new(
        clock::parse_hhmm(DEFAULT_START),
        clock::parse_hhmm(DEFAULT_END),
    );
    p.breaks[0].start = clock::parse_hhmm(DEFAULT_BREAK_START);
    p.breaks[0].end = clock::parse_hhmm(DEFAULT_BREAK_END);
    p
}

/// Concrete pattern for a slot.
///
/// Absent settings resolve to [`default_pattern`]. Otherwise the stored slot
/// is used with missing bounds defaulted per field; missing breaks stay
/// absent.
pub fn resolve(settings: Option<&MonthlySettings>, slot: PatternSlot) -> WorkPattern {
    let Some(settings) = settings else {
        return default_pattern();
    };

    let mut resolved = settings.pattern(slot).clone();
    if resolved.start.is_none() {
        resolved.start = clock::parse_hhmm(DEFAULT_START);
    }
    if resolved.end.is_none() {
        resolved.end = clock::parse_hhmm(DEFAULT_END);
    }
    resolved
}
