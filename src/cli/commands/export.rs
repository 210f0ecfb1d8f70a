use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        month,
        file,
        raw,
        force,
    } = &cli.command
    {
        let (year, month) = date::resolve_month(month.as_ref())?;
        let user = cli.target_user(cfg).to_string();
        let mut pool = DbPool::new(&cfg.database)?;

        let written = ExportLogic::export(
            &mut pool,
            &user,
            year,
            month,
            *format,
            file.as_ref(),
            *raw,
            *force,
            &cfg.display_name,
        )?;

        if let Some(path) = written {
            ttlog(
                &pool.conn,
                "export",
                &format!("{} {}-{:02}", user, year, month),
                &format!(
                    "{}{} → {}",
                    format.as_str(),
                    if *raw { " (raw)" } else { "" },
                    path.display()
                ),
            )?;
        }
    }

    Ok(())
}
