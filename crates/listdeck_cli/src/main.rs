//! Command-line entry point for `listdeck`.
//!
//! # Responsibility
//! - Resolve configuration, start logging and open the key-value store.
//! - Dispatch one subcommand (one user action) and print the re-rendered view.
//!
//! # Invariants
//! - Storage, logging and config problems degrade to warnings; they never
//!   abort a command.

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use listdeck_core::storage::open_store;
use listdeck_core::{init_logging, AppConfig, KeyValueStore, MemoryStore};
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = load_config(&cli);
    start_logging(&config);

    match cli.command {
        Command::Students { command } => {
            let store = open_key_value_store(&config.resolved_db_path());
            commands::students::run(command, store, &config)
        }
        Command::Todo { command } => {
            let store = open_key_value_store(&config.resolved_db_path());
            commands::todo::run(command, store)
        }
        Command::User { command } => commands::user::run(command, &config),
        Command::Config { command } => commands::config::run(command, &config),
    }
}

fn load_config(cli: &Cli) -> AppConfig {
    let path = cli.config.clone().unwrap_or_else(AppConfig::default_path);
    let mut config = match AppConfig::load_repaired(&path) {
        Ok((config, rejected)) => {
            for message in rejected {
                eprintln!("warning: {message}; using the default for that key");
            }
            config
        }
        Err(err) => {
            eprintln!("warning: {err}; using default configuration");
            AppConfig::default()
        }
    };
    config.apply_overrides(&cli.to_config_overrides());
    config
}

fn start_logging(config: &AppConfig) {
    let log_dir = absolute(&config.resolved_log_dir());
    if let Err(err) = init_logging(&config.resolved_log_level(), &log_dir) {
        eprintln!("warning: file logging disabled: {err}");
    }
}

/// SQLite store at `path`, or an in-memory store when it cannot be opened.
fn open_key_value_store(path: &Path) -> Box<dyn KeyValueStore> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        if let Err(err) = std::fs::create_dir_all(parent) {
            warn!(
                "event=store_dir_create module=cli status=error path={} error={err}",
                parent.display()
            );
        }
    }

    match open_store(path) {
        Ok(store) => {
            info!(
                "event=store_ready module=cli status=ok path={}",
                path.display()
            );
            Box::new(store)
        }
        Err(err) => {
            eprintln!(
                "warning: cannot open `{}` ({err}); changes will not be saved",
                path.display()
            );
            Box::new(MemoryStore::new())
        }
    }
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(path))
        .unwrap_or_else(|_| path.to_path_buf())
}
