//! Interactive dashboard session driven by commands read line by line.
//!
//! Every command runs to completion before the next line is read, so the
//! working set is only ever swapped between commands.

use super::{overview, performance, properties, ui, upload};
use crate::core::config::AppConfig;
use crate::core::dataset::Dataset;
use anyhow::{Result, anyhow, bail};
use std::path::PathBuf;
use std::str::FromStr;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

const HELP: &str = "Commands:
  overview            summary metrics
  properties          property listings with forecasts
  performance         monthly revenue and expenses
  dashboard           all of the above
  upload <file.csv>   replace the data with a CSV (address,value,rent)
  reset               restore the sample data
  help                show this message
  quit                leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Overview,
    Properties,
    Performance,
    Dashboard,
    Upload(PathBuf),
    Reset,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        match command.to_lowercase().as_str() {
            "overview" => Ok(SessionCommand::Overview),
            "properties" => Ok(SessionCommand::Properties),
            "performance" => Ok(SessionCommand::Performance),
            "dashboard" => Ok(SessionCommand::Dashboard),
            "upload" if arg.is_empty() => bail!("Usage: upload <file.csv>"),
            "upload" => Ok(SessionCommand::Upload(PathBuf::from(arg))),
            "reset" => Ok(SessionCommand::Reset),
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" => Ok(SessionCommand::Quit),
            other => Err(anyhow!("Unknown command '{other}', type 'help' for a list")),
        }
    }
}

pub struct Session {
    dataset: Dataset,
    config: AppConfig,
}

impl Session {
    pub fn new(dataset: Dataset, config: AppConfig) -> Self {
        Self { dataset, config }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Runs one command and returns its output, or `None` when the session should end.
    pub async fn handle(&mut self, command: SessionCommand) -> Result<Option<String>> {
        debug!(?command, "Handling session command");
        let output = match command {
            SessionCommand::Overview => overview::render(&self.dataset, &self.config),
            SessionCommand::Properties => properties::render(&self.dataset, &self.config),
            SessionCommand::Performance => performance::render(&self.config),
            SessionCommand::Dashboard => super::render_dashboard(&self.dataset, &self.config),
            SessionCommand::Upload(path) => upload::upload(&mut self.dataset, &path).await?,
            SessionCommand::Reset => {
                self.dataset.reset().await?;
                info!("Dataset reset to sample data");
                ui::style_text(
                    &format!("Restored sample data ({} properties)", self.dataset.len()),
                    ui::StyleType::Success,
                )
            }
            SessionCommand::Help => HELP.to_string(),
            SessionCommand::Quit => return Ok(None),
        };
        Ok(Some(output))
    }

    /// Reads commands from `reader` until `quit` or end of input.
    pub async fn run_with<R, W>(&mut self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        loop {
            writer.write_all(b"> ").await?;
            writer.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let outcome = match line.parse::<SessionCommand>() {
                Ok(command) => self.handle(command).await,
                Err(e) => Err(e),
            };
            let text = match outcome {
                Ok(Some(text)) => text,
                Ok(None) => break,
                Err(e) => ui::style_text(&format!("Error: {e:#}"), ui::StyleType::Error),
            };
            writer.write_all(text.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }
        writer.flush().await?;
        Ok(())
    }
}

pub async fn run(dataset: Dataset, config: &AppConfig) -> Result<()> {
    println!(
        "{}\n{}\n",
        ui::style_text("Real Estate Investment Dashboard", ui::StyleType::Title),
        ui::style_text("Type 'help' for commands.", ui::StyleType::Subtle)
    );
    let mut session = Session::new(dataset, config.clone());
    session
        .run_with(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
}
