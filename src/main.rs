use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use estatedash::core::log::init_logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// CSV file (address,value,rent) replacing the sample data
    #[arg(short, long, global = true)]
    upload: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for estatedash::AppCommand {
    fn from(cmd: Commands) -> estatedash::AppCommand {
        match cmd {
            Commands::Overview => estatedash::AppCommand::Overview,
            Commands::Properties => estatedash::AppCommand::Properties,
            Commands::Performance => estatedash::AppCommand::Performance,
            Commands::Dashboard => estatedash::AppCommand::Dashboard,
            Commands::Session => estatedash::AppCommand::Session,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Display portfolio summary metrics
    Overview,
    /// Display property listings with forecasts
    Properties,
    /// Display monthly performance
    Performance,
    /// Display every view
    Dashboard,
    /// Start an interactive dashboard session
    Session,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => estatedash::cli::setup::setup().map(|path| {
            println!("Created default configuration at {}", path.display());
        }),
        Some(cmd) => {
            estatedash::run_command(
                cmd.into(),
                cli.config_path.as_deref(),
                cli.upload.as_deref(),
            )
            .await
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
