use crate::config::Config;
use crate::core::approval::Actor;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rkintai
/// CLI application to track attendance and run the monthly approval workflow
#[derive(Parser)]
#[command(
    name = "rkintai",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance tracking CLI: record daily clock times, derive overtime, and run the monthly approval workflow on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Operate on this user's data instead of the configured user
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Assume a role for this invocation
    #[arg(global = true, long = "role", value_enum)]
    pub role: Option<Role>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Role {
    Approver,
    Admin,
}

impl Cli {
    /// Who is running the command: the configured identity, with `--role`
    /// adding capabilities for this invocation only.
    pub fn actor(&self, cfg: &Config) -> Actor {
        let mut actor = Actor {
            id: cfg.user.clone(),
            approver: cfg.approver,
            admin: cfg.admin,
        };
        match self.role {
            Some(Role::Approver) => actor.approver = true,
            Some(Role::Admin) => {
                actor.approver = true;
                actor.admin = true;
            }
            None => {}
        }
        actor
    }

    /// Whose data the command operates on (`--user`, or the configured user).
    pub fn target_user<'a>(&'a self, cfg: &'a Config) -> &'a str {
        self.user.as_deref().unwrap_or(&cfg.user)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add or update one day's attendance record
    Add {
        /// Date of the record (YYYY-MM-DD)
        date: String,

        #[arg(
            long = "type",
            help = "Work type: work, remote, late, early-leave, late-early, legal-holiday, extra-holiday"
        )]
        work_type: Option<String>,

        /// Clock-in time (HH:MM)
        #[arg(long = "in", help = "Clock-in time (HH:MM)")]
        start: Option<String>,

        /// Clock-out time (HH:MM)
        #[arg(long = "out", help = "Clock-out time (HH:MM)")]
        end: Option<String>,

        #[arg(
            long = "leave",
            help = "Leave type: paid, absent, special, congratulation"
        )]
        leave: Option<String>,

        /// Remove a previously stored leave type
        #[arg(long = "no-leave", conflicts_with = "leave")]
        no_leave: bool,

        #[arg(long = "pattern", help = "Work pattern slot (1-3)")]
        pattern: Option<u8>,

        #[arg(long = "note", help = "Free-text note")]
        note: Option<String>,
    },

    /// Show one month's records with the summary footer
    List {
        #[arg(long, short, help = "Month to list (YYYY-MM, default: current)")]
        month: Option<String>,
    },

    /// Show or edit monthly settings (standard hours, work patterns)
    Settings {
        #[arg(long, short, help = "Month to edit (YYYY-MM, default: current)")]
        month: Option<String>,

        #[arg(long = "show", help = "Print the month's settings and exit")]
        show: bool,

        #[arg(long = "std-hours", help = "Daily overtime threshold in hours (e.g. 7.5)")]
        standard_hours: Option<f64>,

        #[arg(long = "pattern", help = "Pattern slot the time flags apply to (1-3)")]
        pattern: Option<u8>,

        #[arg(long = "start", help = "Pattern start time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "end", help = "Pattern end time (HH:MM)")]
        end: Option<String>,

        #[arg(long = "break1", help = "First break (HH:MM-HH:MM)")]
        break1: Option<String>,

        #[arg(long = "break2", help = "Second break (HH:MM-HH:MM)")]
        break2: Option<String>,

        #[arg(long = "break3", help = "Third break (HH:MM-HH:MM)")]
        break3: Option<String>,

        /// Start from the previous month's settings
        #[arg(long = "copy-previous")]
        copy_previous: bool,
    },

    /// Monthly approval workflow
    Approval {
        #[arg(long, short, help = "Month to act on (YYYY-MM, default: current)")]
        month: Option<String>,

        #[arg(long = "request", help = "Submit the month for approval")]
        request: bool,

        #[arg(long = "approve", help = "Approve the month (approver role)")]
        approve: bool,

        #[arg(
            long = "reject",
            value_name = "REASON",
            help = "Reject the month with a reason (approver role)"
        )]
        reject: Option<String>,

        #[arg(long = "cancel", help = "Revoke an approval (approver role)")]
        cancel: bool,

        #[arg(long = "status", help = "Show the month's approval state")]
        status: bool,
    },

    /// Register or list annual holidays
    Holiday {
        /// Holiday date (YYYY-MM-DD)
        date: Option<String>,

        #[arg(
            long = "type",
            help = "Holiday type: legal-holiday, extra-holiday, saturday-work"
        )]
        holiday_type: Option<String>,

        #[arg(long = "list", help = "List registered holidays for a year")]
        list: bool,

        #[arg(long = "year", help = "Year for --list (default: current)")]
        year: Option<i32>,
    },

    /// Export one month's report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, short, help = "Month to export (YYYY-MM, default: current)")]
        month: Option<String>,

        #[arg(long, value_name = "FILE", help = "Output file (default: <label>_<year>年<month>月)")]
        file: Option<String>,

        /// Flat machine-readable dump of raw record fields
        #[arg(long)]
        raw: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
