mod auth;
mod run;
mod show;

use crate::error::Result;
use clap::{Parser, Subcommand};

pub use show::ShowResource;

#[derive(Parser, Debug)]
#[command(name = "sheets-playground")]
#[command(about = "Run a demo read/write/format workflow against a Google spreadsheet", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Run => run::execute().await,
            Commands::Auth => auth::execute().await,
            Commands::Show { resource } => resource.execute().await,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the demo workflow against the configured spreadsheet
    Run,
    /// Verify the service account credentials without touching any data
    Auth,
    Show {
        #[command(subcommand)]
        resource: ShowResource,
    },
}
