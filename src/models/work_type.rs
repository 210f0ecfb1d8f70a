use serde::{Deserialize, Serialize};

/// Classification of a single attendance day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum WorkType {
    #[default]
    Work,
    Remote,
    Late,
    EarlyLeave,
    LateEarly,
    LegalHoliday,
    ExtraHoliday,
}

impl WorkType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            WorkType::Work => "work",
            WorkType::Remote => "remote",
            WorkType::Late => "late",
            WorkType::EarlyLeave => "early-leave",
            WorkType::LateEarly => "late-early",
            WorkType::LegalHoliday => "legal-holiday",
            WorkType::ExtraHoliday => "extra-holiday",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "work" => Some(WorkType::Work),
            "remote" => Some(WorkType::Remote),
            "late" => Some(WorkType::Late),
            "early-leave" => Some(WorkType::EarlyLeave),
            "late-early" => Some(WorkType::LateEarly),
            "legal-holiday" => Some(WorkType::LegalHoliday),
            "extra-holiday" => Some(WorkType::ExtraHoliday),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (lowercase or mixed case)
    pub fn from_code(code: &str) -> Option<Self> {
        WorkType::from_db_str(&code.to_lowercase())
    }

    /// Fixed display label (used in CSV/list output).
    pub fn label(&self) -> &'static str {
        match self {
            WorkType::Work => "出勤",
            WorkType::Remote => "在宅勤務",
            WorkType::Late => "遅刻",
            WorkType::EarlyLeave => "早退",
            WorkType::LateEarly => "遅刻早退",
            WorkType::LegalHoliday => "法定休日出勤",
            WorkType::ExtraHoliday => "法定外休日出勤",
        }
    }

    /// Holiday-type work routes its whole worked span into holiday overtime.
    pub fn is_holiday(&self) -> bool {
        matches!(self, WorkType::LegalHoliday | WorkType::ExtraHoliday)
    }
}
