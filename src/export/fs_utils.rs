// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// y/yes on stdin, case-insensitive; anything else declines.
fn confirmed(prompt: &str) -> AppResult<bool> {
    print!("{prompt}");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Gate file creation on the overwrite rules: a missing target or `--force`
/// passes straight through, an existing file needs interactive consent.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("'{}' already exists.", path.display()));
    if confirmed("Overwrite? [y/N]: ")? {
        return Ok(());
    }

    Err(AppError::Export(
        "cancelled: existing file not overwritten".to_string(),
    ))
}
