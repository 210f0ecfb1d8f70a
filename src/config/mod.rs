use crate::core::pattern::DEFAULT_STANDARD_HOURS;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database path.
    pub database: String,
    /// Id of the person running the CLI; every command acts on this user's
    /// data unless `--user` targets someone else.
    #[serde(default = "default_user")]
    pub user: String,
    /// Human label used in export filenames.
    #[serde(default = "default_display_name")]
    pub display_name: String,
    /// Role flags granted permanently; `--role` can add them per invocation.
    #[serde(default)]
    pub approver: bool,
    #[serde(default)]
    pub admin: bool,
    /// Daily overtime threshold for months without stored settings.
    #[serde(default = "default_standard_hours")]
    pub standard_hours: f64,
}

fn default_user() -> String {
    env::var("USER").unwrap_or_else(|_| "user".to_string())
}

fn default_display_name() -> String {
    "勤怠".to_string()
}

fn default_standard_hours() -> f64 {
    DEFAULT_STANDARD_HOURS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().into_owned(),
            user: default_user(),
            display_name: default_display_name(),
            approver: false,
            admin: false,
            standard_hours: default_standard_hours(),
        }
    }
}

impl Config {
    /// Per-user configuration directory: `%APPDATA%\rkintai` on Windows,
    /// `~/.rkintai` everywhere else.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("."));
            appdata.join("rkintai")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rkintai")
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rkintai.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rkintai.sqlite")
    }

    /// Read the YAML config, falling back to defaults when none was written
    /// yet. A file that exists but does not parse is an error, not a
    /// silent reset.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    /// First-run setup of the config directory, the config file and an
    /// empty database. `is_test` skips the config file so test runs never
    /// touch the real one.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => absolute_in(&dir, &name),
            None => Self::database_file(),
        };

        if !is_test {
            let config = Config {
                database: db_path.to_string_lossy().into_owned(),
                ..Default::default()
            };
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("config serialization error: {e}")))?;
            fs::write(Self::config_file(), yaml)?;
            println!("✅ Config file: {}", Self::config_file().display());
        }

        crate::utils::path::ensure_parent_dir(&db_path)?;
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }
        println!("✅ Database:    {}", db_path.display());

        Ok(())
    }
}

/// Interpret `name` as-is when absolute, otherwise relative to `dir`.
fn absolute_in(dir: &Path, name: &str) -> PathBuf {
    let p = Path::new(name);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        dir.join(p)
    }
}
