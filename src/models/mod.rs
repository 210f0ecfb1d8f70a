pub mod annual_holiday;
pub mod approval;
pub mod daily_record;
pub mod holiday_type;
pub mod leave_type;
pub mod monthly_settings;
pub mod work_pattern;
pub mod work_type;
