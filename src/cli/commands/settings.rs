use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::settings::{SettingsInput, SettingsLogic};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::monthly_settings::MonthlySettings;
use crate::models::work_pattern::{PatternSlot, WorkPattern};
use crate::store::AttendanceStore;
use crate::ui::messages::{detail, info, success};
use crate::utils::date;
use crate::utils::time::{parse_break_span, parse_optional_time};
use chrono::NaiveTime;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        month,
        show,
        standard_hours,
        pattern,
        start,
        end,
        break1,
        break2,
        break3,
        copy_previous,
    } = &cli.command
    {
        let (year, month) = date::resolve_month(month.as_ref())?;
        let user = cli.target_user(cfg).to_string();
        let mut pool = DbPool::new(&cfg.database)?;

        let wants_edit = standard_hours.is_some()
            || pattern.is_some()
            || start.is_some()
            || end.is_some()
            || break1.is_some()
            || break2.is_some()
            || break3.is_some()
            || *copy_previous;

        // `settings` with no edit flags behaves like `settings --show`.
        if *show || !wants_edit {
            print_settings(&mut pool, &user, year, month)?;
            return Ok(());
        }

        //
        // 1. Build the input from the CLI flags.
        //
        let slot = match pattern {
            Some(n) => {
                Some(PatternSlot::new(*n).ok_or_else(|| AppError::InvalidPattern(n.to_string()))?)
            }
            None => None,
        };

        let input = SettingsInput {
            standard_hours: *standard_hours,
            slot,
            start: parse_optional_time(start.as_ref())?,
            end: parse_optional_time(end.as_ref())?,
            breaks: [
                break1.as_ref().map(|s| parse_break_span(s)).transpose()?,
                break2.as_ref().map(|s| parse_break_span(s)).transpose()?,
                break3.as_ref().map(|s| parse_break_span(s)).transpose()?,
            ],
            copy_previous: *copy_previous,
        };

        //
        // 2. Merge and persist.
        //
        let actor = cli.actor(cfg);
        let saved = SettingsLogic::set(
            &mut pool,
            &actor,
            &user,
            year,
            month,
            cfg.standard_hours,
            &input,
        )?;

        //
        // 3. Audit log + feedback.
        //
        let mut changes: Vec<String> = Vec::new();
        if *copy_previous {
            let (py, pm) = date::previous_month(year, month);
            changes.push(format!("copied from {}-{:02}", py, pm));
        }
        if let Some(hours) = standard_hours {
            changes.push(format!("std-hours {}", hours));
        }
        if input.start.is_some() || input.end.is_some() || input.breaks.iter().any(Option::is_some)
        {
            let slot = input.slot.unwrap_or_default();
            changes.push(format!(
                "pattern {} {}",
                slot.number(),
                format_pattern(saved.pattern(slot))
            ));
        }

        ttlog(
            &pool.conn,
            "settings",
            &format!("{} {}-{:02}", user, year, month),
            &changes.join(", "),
        )?;

        success(format!(
            "Settings for {}-{:02} of '{}' saved ({}).",
            year,
            month,
            user,
            changes.join(", ")
        ));
    }

    Ok(())
}

fn print_settings(pool: &mut DbPool, user: &str, year: i32, month: u32) -> AppResult<()> {
    let stored = pool.monthly_settings(user, year, month)?;

    println!("📋 Settings for {}-{:02} — {}", year, month, user);
    match &stored {
        Some(settings) => print_stored(settings),
        None => {
            info("No settings stored for this month; the built-in defaults apply.");
            detail("standard hours", crate::core::pattern::DEFAULT_STANDARD_HOURS);
            detail(
                "pattern 1",
                format_pattern(&crate::core::pattern::default_pattern()),
            );
        }
    }

    Ok(())
}

fn print_stored(settings: &MonthlySettings) {
    detail("standard hours", settings.standard_hours);
    for n in 1..=3u8 {
        let slot = PatternSlot::new(n).unwrap_or_default();
        let pattern = settings.pattern(slot);
        let label = format!("pattern {}", n);
        if pattern.is_empty() {
            detail(&label, "(not set)");
        } else {
            detail(&label, format_pattern(pattern));
        }
    }
}

fn format_pattern(pattern: &WorkPattern) -> String {
    let fmt = |t: Option<NaiveTime>| {
        t.map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string())
    };

    let mut out = format!("{} → {}", fmt(pattern.start), fmt(pattern.end));
    let breaks: Vec<String> = pattern
        .breaks
        .iter()
        .filter(|b| b.start.is_some() || b.end.is_some())
        .map(|b| format!("{}-{}", fmt(b.start), fmt(b.end)))
        .collect();
    if !breaks.is_empty() {
        out.push_str(&format!(" (break {})", breaks.join(", ")));
    }
    out
}
