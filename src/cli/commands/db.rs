use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

fn running(what: &str) {
    println!("{CYAN}▶ Running {what}…{RESET}");
}

fn step_ok(outcome: &str) {
    println!("{GREEN}✔ {outcome}.{RESET}\n");
}

fn step_migrate(pool: &DbPool) -> AppResult<()> {
    running("migrations");
    run_pending_migrations(&pool.conn).map_err(|e| AppError::Migration(e.to_string()))?;
    step_ok("Migration completed");
    Ok(())
}

fn step_check(pool: &DbPool) -> AppResult<()> {
    running("integrity check");
    let verdict: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

    if verdict == "ok" {
        step_ok("Integrity check passed");
    } else {
        println!("{RED}✘ Integrity check failed:{RESET} {verdict}\n");
    }
    Ok(())
}

fn step_vacuum(pool: &DbPool) -> AppResult<()> {
    running("VACUUM");
    pool.conn.execute_batch("VACUUM;")?;
    step_ok("Vacuum completed");
    Ok(())
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = &cli.command
    {
        if !(*migrate || *check || *vacuum || *info) {
            warning("Nothing to do. Use --migrate, --check, --vacuum or --info.");
            return Ok(());
        }

        // One connection shared by all selected steps.
        let mut pool = DbPool::new(&cfg.database)?;

        if *migrate {
            step_migrate(&pool)?;
        }
        if *check {
            step_check(&pool)?;
        }
        if *vacuum {
            step_vacuum(&pool)?;
        }
        if *info {
            stats::print_db_info(&mut pool, &cfg.database)?;
        }
    }

    Ok(())
}
