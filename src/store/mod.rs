//! Storage collaborator contract.
//!
//! Every row type is addressed by its natural key: (user, work_date) for
//! daily records, (user, year, month) for settings and approvals. Every
//! write is a single insert-or-update primitive. Mutations on records and
//! settings must check the owning month's approval status inside the same
//! transaction as the write; approval writes are compare-and-set. This keeps
//! check-then-act races out of the callers entirely.

use crate::errors::AppResult;
use crate::models::annual_holiday::AnnualHoliday;
use crate::models::approval::{Approval, ApprovalStatus};
use crate::models::daily_record::DailyRecord;
use crate::models::monthly_settings::MonthlySettings;
use chrono::NaiveDate;

pub trait AttendanceStore {
    fn daily_record(&mut self, user: &str, date: NaiveDate) -> AppResult<Option<DailyRecord>>;

    /// All records of one calendar month, ascending by date.
    fn daily_records_in_month(
        &mut self,
        user: &str,
        year: i32,
        month: u32,
    ) -> AppResult<Vec<DailyRecord>>;

    /// Insert-or-update by (user, work_date). Fails with `MonthLocked` when
    /// the owning month's approval is `Approved`; the status check and the
    /// write happen in one transaction.
    fn save_daily_record(&mut self, record: &DailyRecord) -> AppResult<()>;

    fn monthly_settings(
        &mut self,
        user: &str,
        year: i32,
        month: u32,
    ) -> AppResult<Option<MonthlySettings>>;

    /// Insert-or-update by (user, year, month), gated like record saves.
    fn save_monthly_settings(&mut self, settings: &MonthlySettings) -> AppResult<()>;

    fn approval(&mut self, user: &str, year: i32, month: u32) -> AppResult<Option<Approval>>;

    /// Compare-and-set: persist `approval` only while the current status (a
    /// missing row reads as `Draft`) is one of `allowed_from`. Returns
    /// whether the write happened; `false` means no mutation at all.
    fn store_approval_when(
        &mut self,
        approval: &Approval,
        allowed_from: &[ApprovalStatus],
    ) -> AppResult<bool>;

    fn annual_holiday(&mut self, user: &str, date: NaiveDate) -> AppResult<Option<AnnualHoliday>>;

    fn annual_holidays_in_year(&mut self, user: &str, year: i32)
    -> AppResult<Vec<AnnualHoliday>>;

    /// Insert-or-update by (user, year, holiday_date).
    fn save_annual_holiday(&mut self, holiday: &AnnualHoliday) -> AppResult<()>;
}
