use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One of the three fixed work-pattern slots of a month's settings.
/// Always in range 1–3; use [`PatternSlot::new`] to build one from user input.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PatternSlot(u8);

impl PatternSlot {
    pub fn new(n: u8) -> Option<Self> {
        (1..=3).contains(&n).then_some(Self(n))
    }

    /// Pattern number as shown to the user (1–3).
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Zero-based index into `MonthlySettings::patterns`.
    pub fn index(&self) -> usize {
        (self.0 - 1) as usize
    }
}

impl Default for PatternSlot {
    fn default() -> Self {
        Self(1)
    }
}

/// A single break interval inside a shift. Either end may be absent;
/// a half-open span contributes no break time.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BreakSpan {
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
}

impl BreakSpan {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// A shift template: start/end clock times plus up to 3 break intervals.
/// Breaks are carried as given; overlapping spans are not rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkPattern {
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub breaks: [BreakSpan; 3],
}

impl WorkPattern {
    pub fn new(start: Option<NaiveTime>, end: Option<NaiveTime>) -> Self {
        Self {
            start,
            end,
            breaks: [BreakSpan::default(); 3],
        }
    }

    /// True when neither bound nor any break end has been set.
    pub fn is_empty(&self) -> bool {
        self.start.is_none()
            && self.end.is_none()
            && self.breaks.iter().all(|b| b.start.is_none() && b.end.is_none())
    }
}
