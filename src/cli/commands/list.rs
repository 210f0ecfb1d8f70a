use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::approval::ApprovalFlow;
use crate::core::summary;
use crate::core::{pattern, shift};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::report::minutes_cell;
use crate::store::AttendanceStore;
use crate::ui::messages::{detail, info};
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::date;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_minutes;

/// Show one month's records and the aggregated footer.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month } = &cli.command {
        let (year, month) = date::resolve_month(month.as_ref())?;
        let user = cli.target_user(cfg);
        let mut pool = DbPool::new(&cfg.database)?;

        let records = pool.daily_records_in_month(user, year, month)?;
        let settings = pool.monthly_settings(user, year, month)?;
        let status = ApprovalFlow::status(&mut pool, user, year, month)?;

        if records.is_empty() {
            info(format!(
                "No records for {}-{:02} of '{}'.",
                year, month, user
            ));
        } else {
            let mut table = Table::new(vec![
                Column::left("日付"),
                Column::left("曜"),
                Column::left("勤務区分"),
                Column::right("出勤"),
                Column::right("退勤"),
                Column::right("実働"),
                Column::right("遅刻"),
                Column::right("早退"),
                Column::right("残業"),
                Column::right("深夜"),
                Column::left("休暇"),
                Column::left("備考"),
            ]);

            for r in &records {
                let resolved = pattern::resolve(settings.as_ref(), r.work_pattern);
                let worked = shift::worked_minutes(r.start_time, r.end_time, &resolved);
                let worked_cell = if r.has_both_times() {
                    format_minutes(worked)
                } else {
                    String::new()
                };

                table.add_row(vec![
                    r.date_str(),
                    date::weekday_jp(r.work_date).to_string(),
                    r.work_type.label().to_string(),
                    r.start_str(),
                    r.end_str(),
                    worked_cell,
                    minutes_cell(r.late_time),
                    minutes_cell(r.early_leave_time),
                    minutes_cell(r.overtime),
                    minutes_cell(r.night_overtime),
                    r.leave_type.map(|l| l.label().to_string()).unwrap_or_default(),
                    r.note.clone(),
                ]);
            }

            print!("{}", table.render());
        }

        //
        // Summary footer
        //
        let totals = summary::build(&records, settings.as_ref());

        println!();
        println!("📊 {}-{:02} — {}", year, month, user);
        detail("work days", totals.work_days);
        detail("worked", format_minutes(totals.total_work_minutes));
        detail("overtime", format_minutes(totals.total_overtime));
        detail("night", format_minutes(totals.night_overtime));
        detail(
            "legal holiday",
            format_minutes(totals.legal_holiday_overtime),
        );
        detail(
            "extra holiday",
            format_minutes(totals.extra_holiday_overtime),
        );
        detail(
            "approval",
            format!(
                "{}{}{}",
                color_for_status(status.to_db_str()),
                status.label(),
                RESET
            ),
        );
    }

    Ok(())
}
