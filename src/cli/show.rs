use crate::config::Config;
use crate::error::Result;
use clap::Subcommand;
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum ShowResource {
    /// Show the resolved configuration
    Config,
}

impl ShowResource {
    pub async fn execute(&self) -> Result<()> {
        match self {
            ShowResource::Config => show_config(),
        }
    }
}

fn show_config() -> Result<()> {
    let config = Config::from_env()?;

    info!(spreadsheet_id = %config.spreadsheet_id, "Target spreadsheet");
    info!(path = ?config.credentials_path, "Service account key");
    info!(sheet = %config.sheet_name, "Demo sheet");

    Ok(())
}
