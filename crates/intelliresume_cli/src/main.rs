//! IntelliResume command-line entry point.
//!
//! # Responsibility
//! - Resolve configuration, start logging and open the store.
//! - Hand parsed commands to the core service.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use intelliresume_core::db::open_db;
use intelliresume_core::{init_logging, AppConfig, ConfigOverrides, ResumeService, SqliteKeyValueStore};
use log::{error, info};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = AppConfig::resolve(&ConfigOverrides {
        db_path: cli.db.clone(),
        log_level: cli.log_level.clone(),
        log_dir: cli.log_dir.clone(),
    });

    // Logging failures must not block editing.
    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    let conn = match open_db(&config.db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!(
                "error: failed to open database `{}`: {err}",
                config.db_path.display()
            );
            return ExitCode::FAILURE;
        }
    };

    let mut service = ResumeService::load(SqliteKeyValueStore::new(&conn));
    match commands::execute(&mut service, cli.command) {
        Ok(()) => {
            info!("event=cli_command module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_command module=cli status=error");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
