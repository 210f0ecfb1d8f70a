//! Row mapping and the SQLite implementation of the attendance store.
//!
//! All writes go through natural-key upserts. Record and settings saves open
//! an immediate transaction, check the owning month's approval status and
//! only then write; approval saves are compare-and-set on the current status.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::annual_holiday::AnnualHoliday;
use crate::models::approval::{Approval, ApprovalStatus};
use crate::models::daily_record::DailyRecord;
use crate::models::holiday_type::HolidayType;
use crate::models::leave_type::LeaveType;
use crate::models::monthly_settings::MonthlySettings;
use crate::models::work_pattern::PatternSlot;
use crate::models::work_type::WorkType;
use crate::store::AttendanceStore;
use chrono::{Datelike, NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, TransactionBehavior, params};

fn conversion_err(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_date_col(s: String) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&s, "%Y-%m-%d")
        .map_err(|_| conversion_err(AppError::InvalidDate(s)))
}

fn parse_time_col(value: Option<String>) -> Result<Option<NaiveTime>> {
    match value {
        None => Ok(None),
        Some(s) => NaiveTime::parse_from_str(&s, "%H:%M")
            .map(Some)
            .map_err(|_| conversion_err(AppError::InvalidTime(s))),
    }
}

fn time_col(t: Option<NaiveTime>) -> Option<String> {
    t.map(|t| t.format("%H:%M").to_string())
}

/// "YYYY-MM-%" LIKE pattern covering one calendar month of ISO dates.
fn month_like(year: i32, month: u32) -> String {
    format!("{:04}-{:02}-%", year, month)
}

pub fn map_record_row(row: &Row) -> Result<DailyRecord> {
    let date_str: String = row.get("work_date")?;
    let work_date = parse_date_col(date_str)?;

    let type_str: String = row.get("work_type")?;
    let work_type = WorkType::from_db_str(&type_str)
        .ok_or_else(|| conversion_err(AppError::InvalidWorkType(type_str)))?;

    let leave_type = match row.get::<_, Option<String>>("leave_type")? {
        None => None,
        Some(s) => Some(
            LeaveType::from_db_str(&s)
                .ok_or_else(|| conversion_err(AppError::InvalidLeaveType(s)))?,
        ),
    };

    let slot: i64 = row.get("work_pattern")?;
    let work_pattern = PatternSlot::new(slot as u8)
        .ok_or_else(|| conversion_err(AppError::InvalidPattern(slot.to_string())))?;

    Ok(DailyRecord {
        user: row.get("user")?,
        work_date,
        work_type,
        start_time: parse_time_col(row.get("start_time")?)?,
        end_time: parse_time_col(row.get("end_time")?)?,
        late_time: row.get("late_time")?,
        early_leave_time: row.get("early_leave_time")?,
        overtime: row.get("overtime")?,
        night_overtime: row.get("night_overtime")?,
        leave_type,
        work_pattern,
        note: row.get("note")?,
        created_at: row.get("created_at")?,
    })
}

pub fn map_settings_row(row: &Row) -> Result<MonthlySettings> {
    let user: String = row.get("user")?;
    let year: i32 = row.get("year")?;
    let month: u32 = row.get("month")?;
    let standard_hours: f64 = row.get("standard_hours")?;

    let mut settings = MonthlySettings::new(&user, year, month, standard_hours);

    for n in 1..=3usize {
        let pattern = &mut settings.patterns[n - 1];
        pattern.start = parse_time_col(row.get(format!("pattern{n}_start").as_str())?)?;
        pattern.end = parse_time_col(row.get(format!("pattern{n}_end").as_str())?)?;
        for k in 1..=3usize {
            let span = &mut pattern.breaks[k - 1];
            span.start =
                parse_time_col(row.get(format!("pattern{n}_break{k}_start").as_str())?)?;
            span.end = parse_time_col(row.get(format!("pattern{n}_break{k}_end").as_str())?)?;
        }
    }

    Ok(settings)
}

pub fn map_approval_row(row: &Row) -> Result<Approval> {
    let status_str: String = row.get("status")?;
    let status = ApprovalStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_err(AppError::Other(format!(
            "unknown approval status '{status_str}'"
        ))))?;

    Ok(Approval {
        user: row.get("user")?,
        year: row.get("year")?,
        month: row.get("month")?,
        status,
        requested_at: row.get("requested_at")?,
        approved_by: row.get("approved_by")?,
        approved_at: row.get("approved_at")?,
        rejection_reason: row.get("rejection_reason")?,
    })
}

pub fn map_holiday_row(row: &Row) -> Result<AnnualHoliday> {
    let date_str: String = row.get("holiday_date")?;
    let holiday_date = parse_date_col(date_str)?;

    let type_str: String = row.get("holiday_type")?;
    let holiday_type = HolidayType::from_db_str(&type_str)
        .ok_or_else(|| conversion_err(AppError::InvalidHolidayType(type_str)))?;

    Ok(AnnualHoliday {
        user: row.get("user")?,
        year: row.get("year")?,
        holiday_date,
        holiday_type,
    })
}

/// Approval status of a month as visible to `conn` (inside its transaction
/// when one is open). A missing row reads as draft.
fn approval_status(conn: &Connection, user: &str, year: i32, month: u32) -> Result<ApprovalStatus> {
    let mut stmt = conn.prepare_cached(
        "SELECT status FROM approvals WHERE user = ?1 AND year = ?2 AND month = ?3",
    )?;
    let status: Option<String> = stmt
        .query_row(params![user, year, month], |row| row.get(0))
        .optional()?;

    match status {
        None => Ok(ApprovalStatus::Draft),
        Some(s) => ApprovalStatus::from_db_str(&s)
            .ok_or_else(|| conversion_err(AppError::Other(format!(
                "unknown approval status '{s}'"
            )))),
    }
}

fn ensure_month_editable(
    conn: &Connection,
    user: &str,
    year: i32,
    month: u32,
) -> AppResult<()> {
    if approval_status(conn, user, year, month)? == ApprovalStatus::Approved {
        return Err(AppError::MonthLocked(format!(
            "{}-{:02} of '{}' is approved and read-only",
            year, month, user
        )));
    }
    Ok(())
}

fn upsert_record(conn: &Connection, record: &DailyRecord) -> Result<()> {
    conn.execute(
        "INSERT INTO daily_records
            (user, work_date, work_type, start_time, end_time,
             late_time, early_leave_time, overtime, night_overtime,
             leave_type, work_pattern, note, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
         ON CONFLICT(user, work_date) DO UPDATE SET
            work_type        = excluded.work_type,
            start_time       = excluded.start_time,
            end_time         = excluded.end_time,
            late_time        = excluded.late_time,
            early_leave_time = excluded.early_leave_time,
            overtime         = excluded.overtime,
            night_overtime   = excluded.night_overtime,
            leave_type       = excluded.leave_type,
            work_pattern     = excluded.work_pattern,
            note             = excluded.note,
            created_at       = excluded.created_at",
        params![
            record.user,
            record.date_str(),
            record.work_type.to_db_str(),
            time_col(record.start_time),
            time_col(record.end_time),
            record.late_time,
            record.early_leave_time,
            record.overtime,
            record.night_overtime,
            record.leave_type.map(|l| l.to_db_str()),
            record.work_pattern.number(),
            record.note,
            record.created_at,
        ],
    )?;
    Ok(())
}

fn upsert_settings(conn: &Connection, s: &MonthlySettings) -> Result<()> {
    let [p1, p2, p3] = &s.patterns;
    conn.execute(
        "INSERT INTO monthly_settings
            (user, year, month, standard_hours,
             pattern1_start, pattern1_end,
             pattern1_break1_start, pattern1_break1_end,
             pattern1_break2_start, pattern1_break2_end,
             pattern1_break3_start, pattern1_break3_end,
             pattern2_start, pattern2_end,
             pattern2_break1_start, pattern2_break1_end,
             pattern2_break2_start, pattern2_break2_end,
             pattern2_break3_start, pattern2_break3_end,
             pattern3_start, pattern3_end,
             pattern3_break1_start, pattern3_break1_end,
             pattern3_break2_start, pattern3_break2_end,
             pattern3_break3_start, pattern3_break3_end)
         VALUES (?1, ?2, ?3, ?4,
                 ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12,
                 ?13, ?14, ?15, ?16, ?17, ?18, ?19, ?20,
                 ?21, ?22, ?23, ?24, ?25, ?26, ?27, ?28)
         ON CONFLICT(user, year, month) DO UPDATE SET
            standard_hours        = excluded.standard_hours,
            pattern1_start        = excluded.pattern1_start,
            pattern1_end          = excluded.pattern1_end,
            pattern1_break1_start = excluded.pattern1_break1_start,
            pattern1_break1_end   = excluded.pattern1_break1_end,
            pattern1_break2_start = excluded.pattern1_break2_start,
            pattern1_break2_end   = excluded.pattern1_break2_end,
            pattern1_break3_start = excluded.pattern1_break3_start,
            pattern1_break3_end   = excluded.pattern1_break3_end,
            pattern2_start        = excluded.pattern2_start,
            pattern2_end          = excluded.pattern2_end,
            pattern2_break1_start = excluded.pattern2_break1_start,
            pattern2_break1_end   = excluded.pattern2_break1_end,
            pattern2_break2_start = excluded.pattern2_break2_start,
            pattern2_break2_end   = excluded.pattern2_break2_end,
            pattern2_break3_start = excluded.pattern2_break3_start,
            pattern2_break3_end   = excluded.pattern2_break3_end,
            pattern3_start        = excluded.pattern3_start,
            pattern3_end          = excluded.pattern3_end,
            pattern3_break1_start = excluded.pattern3_break1_start,
            pattern3_break1_end   = excluded.pattern3_break1_end,
            pattern3_break2_start = excluded.pattern3_break2_start,
            pattern3_break2_end   = excluded.pattern3_break2_end,
            pattern3_break3_start = excluded.pattern3_break3_start,
            pattern3_break3_end   = excluded.pattern3_break3_end",
        params![
            s.user,
            s.year,
            s.month,
            s.standard_hours,
            time_col(p1.start),
            time_col(p1.end),
            time_col(p1.breaks[0].start),
            time_col(p1.breaks[0].end),
            time_col(p1.breaks[1].start),
            time_col(p1.breaks[1].end),
            time_col(p1.breaks[2].start),
            time_col(p1.breaks[2].end),
            time_col(p2.start),
            time_col(p2.end),
            time_col(p2.breaks[0].start),
            time_col(p2.breaks[0].end),
            time_col(p2.breaks[1].start),
            time_col(p2.breaks[1].end),
            time_col(p2.breaks[2].start),
            time_col(p2.breaks[2].end),
            time_col(p3.start),
            time_col(p3.end),
            time_col(p3.breaks[0].start),
            time_col(p3.breaks[0].end),
            time_col(p3.breaks[1].start),
            time_col(p3.breaks[1].end),
            time_col(p3.breaks[2].start),
            time_col(p3.breaks[2].end),
        ],
    )?;
    Ok(())
}

fn upsert_approval(conn: &Connection, a: &Approval) -> Result<()> {
    conn.execute(
        "INSERT INTO approvals
            (user, year, month, status, requested_at,
             approved_by, approved_at, rejection_reason)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
         ON CONFLICT(user, year, month) DO UPDATE SET
            status           = excluded.status,
            requested_at     = excluded.requested_at,
            approved_by      = excluded.approved_by,
            approved_at      = excluded.approved_at,
            rejection_reason = excluded.rejection_reason",
        params![
            a.user,
            a.year,
            a.month,
            a.status.to_db_str(),
            a.requested_at,
            a.approved_by,
            a.approved_at,
            a.rejection_reason,
        ],
    )?;
    Ok(())
}

impl AttendanceStore for DbPool {
    fn daily_record(&mut self, user: &str, date: NaiveDate) -> AppResult<Option<DailyRecord>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT * FROM daily_records WHERE user = ?1 AND work_date = ?2",
        )?;
        let record = stmt
            .query_row(
                params![user, date.format("%Y-%m-%d").to_string()],
                map_record_row,
            )
            .optional()?;
        Ok(record)
    }

    fn daily_records_in_month(
        &mut self,
        user: &str,
        year: i32,
        month: u32,
    ) -> AppResult<Vec<DailyRecord>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT * FROM daily_records
             WHERE user = ?1 AND work_date LIKE ?2
             ORDER BY work_date ASC",
        )?;
        let rows = stmt.query_map(params![user, month_like(year, month)], map_record_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn save_daily_record(&mut self, record: &DailyRecord) -> AppResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        ensure_month_editable(
            &tx,
            &record.user,
            record.work_date.year(),
            record.work_date.month(),
        )?;
        upsert_record(&tx, record)?;
        tx.commit()?;
        Ok(())
    }

    fn monthly_settings(
        &mut self,
        user: &str,
        year: i32,
        month: u32,
    ) -> AppResult<Option<MonthlySettings>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT * FROM monthly_settings WHERE user = ?1 AND year = ?2 AND month = ?3",
        )?;
        let settings = stmt
            .query_row(params![user, year, month], map_settings_row)
            .optional()?;
        Ok(settings)
    }

    fn save_monthly_settings(&mut self, settings: &MonthlySettings) -> AppResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        ensure_month_editable(&tx, &settings.user, settings.year, settings.month)?;
        upsert_settings(&tx, settings)?;
        tx.commit()?;
        Ok(())
    }

    fn approval(&mut self, user: &str, year: i32, month: u32) -> AppResult<Option<Approval>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT * FROM approvals WHERE user = ?1 AND year = ?2 AND month = ?3",
        )?;
        let approval = stmt
            .query_row(params![user, year, month], map_approval_row)
            .optional()?;
        Ok(approval)
    }

    fn store_approval_when(
        &mut self,
        approval: &Approval,
        allowed_from: &[ApprovalStatus],
    ) -> AppResult<bool> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let current = approval_status(&tx, &approval.user, approval.year, approval.month)?;
        if !allowed_from.contains(&current) {
            // Rolls back on drop; the row is left untouched.
            return Ok(false);
        }

        upsert_approval(&tx, approval)?;
        tx.commit()?;
        Ok(true)
    }

    fn annual_holiday(&mut self, user: &str, date: NaiveDate) -> AppResult<Option<AnnualHoliday>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT * FROM annual_holidays WHERE user = ?1 AND holiday_date = ?2",
        )?;
        let holiday = stmt
            .query_row(
                params![user, date.format("%Y-%m-%d").to_string()],
                map_holiday_row,
            )
            .optional()?;
        Ok(holiday)
    }

    fn annual_holidays_in_year(
        &mut self,
        user: &str,
        year: i32,
    ) -> AppResult<Vec<AnnualHoliday>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT * FROM annual_holidays
             WHERE user = ?1 AND year = ?2
             ORDER BY holiday_date ASC",
        )?;
        let rows = stmt.query_map(params![user, year], map_holiday_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn save_annual_holiday(&mut self, holiday: &AnnualHoliday) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO annual_holidays (user, year, holiday_date, holiday_type)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(user, year, holiday_date) DO UPDATE SET
                holiday_type = excluded.holiday_type",
            params![
                holiday.user,
                holiday.year,
                holiday.date_str(),
                holiday.holiday_type.to_db_str(),
            ],
        )?;
        Ok(())
    }
}
