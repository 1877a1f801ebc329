//! projects - interactive project entry
//!
//! Lists the available operations, prompts for each field of a project and
//! stores it in a local SQLite database. Press ENTER at the menu to quit.

mod cli;

use crate::cli::Cli;

use projects_app::{AppResult, Console, Menu, SqliteProjectService, logger};
use projects_config::Config;
use projects_db::ProjectRepository;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _cli = Cli::parse();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> AppResult<()> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting projects v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = projects_db::connect(&database_path).await?;

    let service = Arc::new(SqliteProjectService::new(ProjectRepository::new(
        pool.clone(),
    )));
    let mut menu = Menu::new(Console::stdio(), service);
    menu.run().await?;

    pool.close().await;
    info!("Shutdown complete");

    Ok(())
}
