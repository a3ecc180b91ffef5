//! `config` subcommands.

use crate::args::ConfigCommand;
use listdeck_core::AppConfig;
use std::process::ExitCode;

pub fn run(command: ConfigCommand, config: &AppConfig) -> ExitCode {
    match command {
        ConfigCommand::Show => show(config),
    }
}

fn show(config: &AppConfig) -> ExitCode {
    match config.to_toml() {
        Ok(text) => {
            println!("# db:   {}", config.resolved_db_path().display());
            println!("# logs: {}", config.resolved_log_dir().display());
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
