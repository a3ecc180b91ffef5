//! CLI argument definitions for `listdeck`.

use clap::{Parser, Subcommand, ValueEnum};
use listdeck_core::{ConfigOverrides, SortKey, StudentFilter, TodoFilter};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevelArg {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Column for `students list --sort`.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum SortArg {
    Marks,
    Name,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Marks => Self::Marks,
            SortArg::Name => Self::Name,
        }
    }
}

/// Pass-status filter for `students list --filter`.
#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum PassFilterArg {
    #[default]
    All,
    Pass,
    Fail,
}

impl From<PassFilterArg> for StudentFilter {
    fn from(arg: PassFilterArg) -> Self {
        match arg {
            PassFilterArg::All => Self::All,
            PassFilterArg::Pass => Self::Pass,
            PassFilterArg::Fail => Self::Fail,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum FilterArg {
    #[default]
    All,
    Active,
    Completed,
}

impl From<FilterArg> for TodoFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => Self::All,
            FilterArg::Active => Self::Active,
            FilterArg::Completed => Self::Completed,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum StudentsCommand {
    /// Add a student. Invalid input is ignored.
    Add {
        #[arg(value_name = "NAME")]
        name: String,
        /// Marks out of 100; out-of-range values are clamped.
        #[arg(value_name = "MARKS", allow_hyphen_values = true)]
        marks: String,
    },
    /// Show the dashboard, highest marks first by default.
    List {
        #[arg(long, value_enum, default_value_t = SortArg::Marks)]
        sort: SortArg,
        /// Ascending instead of descending order.
        #[arg(long)]
        asc: bool,
        /// Show only passing or failing students.
        #[arg(long, value_enum, default_value_t = PassFilterArg::All)]
        filter: PassFilterArg,
    },
    /// Delete a student by id.
    Delete {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Remove every student (asks for confirmation).
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Show only the metric cards.
    Summary,
}

#[derive(Debug, Subcommand)]
pub enum TodoCommand {
    /// Create a todo. Blank text is ignored.
    Add {
        #[arg(value_name = "TEXT", allow_hyphen_values = true)]
        text: String,
    },
    /// Show the list.
    List {
        #[arg(long, value_enum, default_value_t = FilterArg::All)]
        filter: FilterArg,
    },
    /// Flip the completion flag of a todo.
    Toggle {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Replace the text of a todo; blank text deletes it.
    Edit {
        #[arg(value_name = "ID")]
        id: String,
        #[arg(value_name = "TEXT", allow_hyphen_values = true)]
        text: String,
    },
    /// Delete a todo by id.
    Delete {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Remove all completed todos.
    ClearCompleted,
    /// Remove every todo (asks for confirmation).
    Clear {
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Fetch and show one random user.
    Fetch,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML.
    Show,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Student-marks dashboard.
    Students {
        #[command(subcommand)]
        command: StudentsCommand,
    },
    /// Todo list.
    Todo {
        #[command(subcommand)]
        command: TodoCommand,
    },
    /// Random-user fetcher.
    User {
        #[command(subcommand)]
        command: UserCommand,
    },
    /// Inspect configuration.
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Persisted list widgets and a random-user fetcher.
#[derive(Debug, Parser)]
#[command(name = "listdeck", version, about)]
pub struct Cli {
    /// SQLite database file (overrides `storage.db_path`).
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Config file (defaults to the platform config directory).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level (overrides `logging.level`).
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log directory (overrides `logging.dir`).
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            db_path: self.db.clone(),
            log_level: self.log_level.map(|level| level.as_str().to_string()),
            log_dir: self.log_dir.clone(),
        }
    }
}
