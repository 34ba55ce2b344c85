pub mod cli;
pub mod core;

use crate::core::config::AppConfig;
use crate::core::dataset::Dataset;
use anyhow::Result;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    Overview,
    Properties,
    Performance,
    Dashboard,
    Session,
}

/// Loads config, optionally ingests an upload, then runs `command`.
pub async fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    upload: Option<&Path>,
) -> Result<()> {
    info!("Real estate dashboard starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let mut dataset = Dataset::default();
    if let Some(path) = upload {
        let notice = cli::upload::upload(&mut dataset, path).await?;
        println!("{notice}\n");
    }

    match command {
        AppCommand::Overview => cli::overview::run(&dataset, &config),
        AppCommand::Properties => cli::properties::run(&dataset, &config),
        AppCommand::Performance => cli::performance::run(&config),
        AppCommand::Dashboard => println!("{}", cli::render_dashboard(&dataset, &config)),
        AppCommand::Session => cli::session::run(dataset, &config).await?,
    }
    Ok(())
}
