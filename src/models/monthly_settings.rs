use super::work_pattern::{PatternSlot, WorkPattern};
use serde::{Deserialize, Serialize};

/// Per-(user, year, month) settings: the overtime threshold and the three
/// selectable work patterns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlySettings {
    pub user: String,
    pub year: i32,
    pub month: u32,
    /// Daily threshold in decimal hours below which worked time is not
    /// overtime (e.g. 7.5).
    pub standard_hours: f64,
    pub patterns: [WorkPattern; 3],
}

impl MonthlySettings {
    pub fn new(user: &str, year: i32, month: u32, standard_hours: f64) -> Self {
        Self {
            user: user.to_string(),
            year,
            month,
            standard_hours,
            patterns: [
                WorkPattern::default(),
                WorkPattern::default(),
                WorkPattern::default(),
            ],
        }
    }

    pub fn pattern(&self, slot: PatternSlot) -> &WorkPattern {
        &self.patterns[slot.index()]
    }

    pub fn pattern_mut(&mut self, slot: PatternSlot) -> &mut WorkPattern {
        &mut self.patterns[slot.index()]
    }

    /// Same settings re-keyed to another month (used by copy-from-previous).
    pub fn for_month(&self, year: i32, month: u32) -> Self {
        let mut copy = self.clone();
        copy.year = year;
        copy.month = month;
        copy
    }
}
