use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success, warning};
use std::path::Path;
use std::process::Command;

/// Spawn `editor` on `path`; true when it exited successfully.
fn launch(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

/// $EDITOR, then $VISUAL, then a platform fallback.
fn platform_default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            let fallback = if cfg!(target_os = "windows") {
                "notepad"
            } else {
                "nano"
            };
            fallback.to_string()
        })
}

fn print_current(cfg: &Config) -> AppResult<()> {
    let yaml =
        serde_yaml::to_string(cfg).map_err(|e| AppError::Config(format!("serialization error: {e}")))?;
    println!("📄 Current configuration:\n");
    println!("{yaml}");
    Ok(())
}

fn edit(path: &Path, requested: Option<&String>) {
    let fallback = platform_default_editor();
    let chosen = requested.cloned().unwrap_or_else(|| fallback.clone());

    if launch(&chosen, path) {
        success(format!("Configuration edited with '{chosen}'."));
        return;
    }

    warning(format!(
        "Editor '{chosen}' did not run; retrying with '{fallback}'."
    ));
    if launch(&fallback, path) {
        success(format!("Configuration edited with fallback '{fallback}'."));
    } else {
        error(format!("Could not open the configuration in '{fallback}'."));
    }
}

/// Handle the `config` subcommand.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = &cli.command
    {
        if !(*print_config || *edit_config) {
            warning("Nothing to do. Use --print or --edit.");
            return Ok(());
        }

        if *print_config {
            print_current(cfg)?;
        }

        if *edit_config {
            edit(&Config::config_file(), editor.as_ref());
        }
    }

    Ok(())
}
