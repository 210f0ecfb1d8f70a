use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::annual_holiday::AnnualHoliday;
use crate::models::holiday_type::HolidayType;
use crate::store::AttendanceStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use crate::utils::table::{Column, Table};
use chrono::Datelike;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Holiday {
        date: holiday_date,
        holiday_type,
        list,
        year,
    } = &cli.command
    {
        let user = cli.target_user(cfg).to_string();
        let mut pool = DbPool::new(&cfg.database)?;

        if *list {
            let year = year.unwrap_or_else(|| date::today().year());
            return print_year(&mut pool, &user, year);
        }

        let Some(date_str) = holiday_date else {
            warning("Nothing to do. Pass a date to register, or --list to show a year.");
            return Ok(());
        };

        //
        // Register one holiday. Without --type the date is treated as a
        // national holiday (legal-holiday).
        //
        let parsed = date::parse_date(date_str)
            .ok_or_else(|| AppError::InvalidDate(date_str.to_string()))?;
        let kind = match holiday_type {
            Some(code) => HolidayType::from_code(code).ok_or_else(|| {
                AppError::InvalidHolidayType(format!(
                    "'{}'. Use 'legal-holiday', 'extra-holiday' or 'saturday-work'",
                    code
                ))
            })?,
            None => HolidayType::LegalHoliday,
        };

        let holiday = AnnualHoliday::new(&user, parsed, kind);
        pool.save_annual_holiday(&holiday)?;

        ttlog(
            &pool.conn,
            "holiday",
            &format!("{} {}", user, holiday.date_str()),
            kind.to_db_str(),
        )?;

        success(format!(
            "Registered {} as {} for '{}'.",
            holiday.date_str(),
            kind.label(),
            user
        ));
    }

    Ok(())
}

fn print_year(pool: &mut DbPool, user: &str, year: i32) -> AppResult<()> {
    let holidays = pool.annual_holidays_in_year(user, year)?;

    if holidays.is_empty() {
        info(format!("No holidays registered for {} of '{}'.", year, user));
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::left("日付"),
        Column::left("曜"),
        Column::left("区分"),
    ]);
    for h in &holidays {
        table.add_row(vec![
            h.date_str(),
            date::weekday_jp(h.holiday_date).to_string(),
            h.holiday_type.label().to_string(),
        ]);
    }
    print!("{}", table.render());
    println!("  {} holiday(s) in {}.", holidays.len(), year);

    Ok(())
}
