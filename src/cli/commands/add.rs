use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::record::{RecordInput, RecordLogic};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::leave_type::LeaveType;
use crate::models::work_pattern::PatternSlot;
use crate::models::work_type::WorkType;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::parse_optional_time;

/// Add or update one day's attendance record.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        work_type,
        start,
        end,
        leave,
        no_leave,
        pattern,
        note,
    } = &cli.command
    {
        //
        // 1. Parse date (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        //
        // 2. Parse enum codes and times
        //
        let work_type = match work_type {
            Some(code) => Some(WorkType::from_code(code).ok_or_else(|| {
                AppError::InvalidWorkType(format!(
                    "'{}'. Use a valid code such as 'work', 'remote', 'legal-holiday', ...",
                    code
                ))
            })?),
            None => None,
        };

        let leave = match leave {
            Some(code) => Some(LeaveType::from_code(code).ok_or_else(|| {
                AppError::InvalidLeaveType(format!(
                    "'{}'. Use a valid code such as 'paid', 'absent', ...",
                    code
                ))
            })?),
            None => None,
        };

        let slot = match pattern {
            Some(n) => {
                Some(PatternSlot::new(*n).ok_or_else(|| AppError::InvalidPattern(n.to_string()))?)
            }
            None => None,
        };

        let input = RecordInput {
            work_type,
            start: parse_optional_time(start.as_ref())?,
            end: parse_optional_time(end.as_ref())?,
            leave,
            clear_leave: *no_leave,
            pattern: slot,
            note: note.clone(),
        };

        //
        // 3. Execute logic
        //
        let actor = cli.actor(cfg);
        let user = cli.target_user(cfg);
        let mut pool = DbPool::new(&cfg.database)?;

        let record = RecordLogic::save(&mut pool, &actor, user, d, &input)?;

        ttlog(
            &pool.conn,
            "add",
            &format!("{} {}", user, record.date_str()),
            &format!(
                "{} {} → {} (overtime {} min, night {} min)",
                record.work_type.to_db_str(),
                record.start_str(),
                record.end_str(),
                record.overtime,
                record.night_overtime
            ),
        )?;

        let or_blank = |s: String| if s.is_empty() { "--:--".to_string() } else { s };
        success(format!(
            "Saved {} for {} ({} {} → {}).",
            record.date_str(),
            user,
            record.work_type.label(),
            or_blank(record.start_str()),
            or_blank(record.end_str())
        ));
    }

    Ok(())
}
