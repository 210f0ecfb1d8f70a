use super::work_type::WorkType;
use serde::{Deserialize, Serialize};

/// Classification of a pre-registered annual holiday.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HolidayType {
    LegalHoliday,
    ExtraHoliday,
    SaturdayWork,
}

impl HolidayType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            HolidayType::LegalHoliday => "legal-holiday",
            HolidayType::ExtraHoliday => "extra-holiday",
            HolidayType::SaturdayWork => "saturday-work",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "legal-holiday" => Some(HolidayType::LegalHoliday),
            "extra-holiday" => Some(HolidayType::ExtraHoliday),
            "saturday-work" => Some(HolidayType::SaturdayWork),
            _ => None,
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        HolidayType::from_db_str(&code.to_lowercase())
    }

    pub fn label(&self) -> &'static str {
        match self {
            HolidayType::LegalHoliday => "法定休日",
            HolidayType::ExtraHoliday => "法定外休日",
            HolidayType::SaturdayWork => "土曜出勤",
        }
    }

    /// Work type pre-seeded on a day registered with this holiday type.
    pub fn default_work_type(&self) -> WorkType {
        match self {
            HolidayType::LegalHoliday => WorkType::LegalHoliday,
            HolidayType::ExtraHoliday => WorkType::ExtraHoliday,
            HolidayType::SaturdayWork => WorkType::Work,
        }
    }
}
