use super::holiday_type::HolidayType;
use chrono::NaiveDate;
use serde::Serialize;

/// Pre-registered holiday for one (user, year, date); only consumed to
/// pre-seed the default work type of a day being recorded.
#[derive(Debug, Clone, Serialize)]
pub struct AnnualHoliday {
    pub user: String,
    pub year: i32,
    pub holiday_date: NaiveDate,
    pub holiday_type: HolidayType,
}

impl AnnualHoliday {
    pub fn new(user: &str, holiday_date: NaiveDate, holiday_type: HolidayType) -> Self {
        use chrono::Datelike;
        Self {
            user: user.to_string(),
            year: holiday_date.year(),
            holiday_date,
            holiday_type,
        }
    }

    pub fn date_str(&self) -> String {
        self.holiday_date.format("%Y-%m-%d").to_string()
    }
}
