//! High-level business logic for the `add` command.
//!
//! Saving a day is a merge: fields the caller provides overwrite the stored
//! record, everything else survives. A brand-new record on a registered
//! holiday starts from that holiday's work type instead of plain `work`.

use crate::core::approval::Actor;
use crate::core::shift;
use crate::errors::{AppError, AppResult};
use crate::models::daily_record::DailyRecord;
use crate::models::leave_type::LeaveType;
use crate::models::work_pattern::PatternSlot;
use crate::models::work_type::WorkType;
use crate::store::AttendanceStore;
use chrono::{Datelike, NaiveDate, NaiveTime};

/// Caller-supplied fields for one save. `None` means "keep what is stored".
#[derive(Debug, Clone, Default)]
pub struct RecordInput {
    pub work_type: Option<WorkType>,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    pub leave: Option<LeaveType>,
    /// Drop a previously stored leave type (`--no-leave`).
    pub clear_leave: bool,
    pub pattern: Option<PatternSlot>,
    pub note: Option<String>,
}

pub struct RecordLogic;

impl RecordLogic {
    /// Merge `input` into the stored record for (user, date), re-derive the
    /// calculated minute fields and persist the result. The store rejects the
    /// write with `MonthLocked` when the month is already approved.
    pub fn save(
        store: &mut dyn AttendanceStore,
        actor: &Actor,
        user: &str,
        date: NaiveDate,
        input: &RecordInput,
    ) -> AppResult<DailyRecord> {
        if !actor.may_act_for(user) {
            return Err(AppError::PermissionDenied(format!(
                "'{}' cannot edit records of '{}'",
                actor.id, user
            )));
        }

        //
        // 1. Start from the stored record, or a fresh one pre-seeded from the
        //    holiday calendar.
        //
        let mut record = match store.daily_record(user, date)? {
            Some(existing) => existing,
            None => {
                let mut fresh = DailyRecord::new(user, date);
                if let Some(holiday) = store.annual_holiday(user, date)? {
                    fresh.work_type = holiday.holiday_type.default_work_type();
                }
                fresh
            }
        };

        //
        // 2. Merge the provided fields.
        //
        if let Some(work_type) = input.work_type {
            record.work_type = work_type;
        }
        if let Some(start) = input.start {
            record.start_time = Some(start);
        }
        if let Some(end) = input.end {
            record.end_time = Some(end);
        }
        if input.clear_leave {
            record.leave_type = None;
        } else if let Some(leave) = input.leave {
            record.leave_type = Some(leave);
        }
        if let Some(slot) = input.pattern {
            record.work_pattern = slot;
        }
        if let Some(ref note) = input.note {
            record.note = note.clone();
        }

        //
        // 3. Validate the merged clock times. The calculators assume a
        //    same-day span; an end before the start would mean an overnight
        //    shift, which is not supported.
        //
        if let (Some(start), Some(end)) = (record.start_time, record.end_time)
            && end < start
        {
            return Err(AppError::InvalidTime(format!(
                "end {} is before start {}; overnight shifts are not supported",
                end.format("%H:%M"),
                start.format("%H:%M"),
            )));
        }

        //
        // 4. Re-derive late/early-leave/overtime/night minutes and save.
        //
        let settings = store.monthly_settings(user, date.year(), date.month())?;
        shift::derive(&mut record, settings.as_ref());
        store.save_daily_record(&record)?;

        Ok(record)
    }
}
