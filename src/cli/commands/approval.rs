use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::approval::ApprovalFlow;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::store::AttendanceStore;
use crate::ui::messages::{detail, success, warning};
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::date;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Approval {
        month,
        request,
        approve,
        reject,
        cancel,
        status,
    } = &cli.command
    {
        let (year, month) = date::resolve_month(month.as_ref())?;
        let user = cli.target_user(cfg).to_string();
        let actor = cli.actor(cfg);
        let mut pool = DbPool::new(&cfg.database)?;

        let actions =
            [*request, *approve, reject.is_some(), *cancel].iter().filter(|f| **f).count();
        if actions > 1 {
            return Err(AppError::Other(
                "choose one of --request, --approve, --reject, --cancel".to_string(),
            ));
        }

        let target = format!("{} {}-{:02}", user, year, month);

        if *request {
            ApprovalFlow::request(&mut pool, &actor, &user, year, month)?;
            ttlog(&pool.conn, "request", &target, "submitted for approval")?;
            success(format!(
                "{}-{:02} of '{}' submitted for approval.",
                year, month, user
            ));
        } else if *approve {
            ApprovalFlow::approve(&mut pool, &actor, &user, year, month)?;
            ttlog(
                &pool.conn,
                "approve",
                &target,
                &format!("approved by {}", actor.id),
            )?;
            success(format!(
                "{}-{:02} of '{}' approved. The month is now read-only.",
                year, month, user
            ));
        } else if let Some(reason) = reject {
            ApprovalFlow::reject(&mut pool, &actor, &user, year, month, reason)?;
            ttlog(
                &pool.conn,
                "reject",
                &target,
                &format!("rejected by {}: {}", actor.id, reason),
            )?;
            warning(format!(
                "{}-{:02} of '{}' rejected: {}",
                year, month, user, reason
            ));
        } else if *cancel {
            ApprovalFlow::cancel(&mut pool, &actor, &user, year, month)?;
            ttlog(
                &pool.conn,
                "cancel",
                &target,
                &format!("approval revoked by {}", actor.id),
            )?;
            success(format!(
                "Approval of {}-{:02} of '{}' revoked; the month is editable again.",
                year, month, user
            ));
        } else {
            // No action flag (or --status): show where the month stands.
            let _ = status;
            print_status(&mut pool, &user, year, month)?;
        }
    }

    Ok(())
}

fn print_status(pool: &mut DbPool, user: &str, year: i32, month: u32) -> AppResult<()> {
    let approval = pool.approval(user, year, month)?;

    println!("📋 Approval status for {}-{:02} — {}", year, month, user);
    let status = approval.as_ref().map(|a| a.status).unwrap_or_default();
    detail(
        "status",
        format!(
            "{}{} ({}){}",
            color_for_status(status.to_db_str()),
            status.label(),
            status.to_db_str(),
            RESET
        ),
    );

    if let Some(approval) = approval {
        if let Some(at) = &approval.requested_at {
            detail("requested at", at);
        }
        if let Some(by) = &approval.approved_by {
            detail("handled by", by);
        }
        if let Some(at) = &approval.approved_at {
            detail("handled at", at);
        }
        if let Some(reason) = &approval.rejection_reason {
            detail("reason", reason);
        }
    }

    Ok(())
}
