use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use rusqlite::Connection;

/// First-run setup: config directory and file, the SQLite database and any
/// pending migrations. In test mode the config file is left alone.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing rkintai…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", cfg.database);

    let conn = Connection::open(&cfg.database)?;
    init_db(&conn)?;
    println!("✅ Schema ready in {}", cfg.database);

    // The audit entry is best-effort; setup already succeeded.
    let logged = log::ttlog(
        &conn,
        "init",
        &cfg.database,
        &format!("Database initialized at {}", cfg.database),
    );
    if let Err(e) = logged {
        eprintln!("⚠️ Audit log entry failed: {e}");
    }

    println!("🎉 rkintai initialization completed!");
    Ok(())
}
