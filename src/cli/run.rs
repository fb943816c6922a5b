use crate::config::Config;
use crate::demo::run_demo;
use crate::error::Result;
use crate::sheets::SheetsClient;
use tracing::info;

pub async fn execute() -> Result<()> {
    let config = Config::from_env()?;
    let client = SheetsClient::new(&config).await?;

    run_demo(&client, &config.sheet_name).await?;

    info!(spreadsheet_id = %config.spreadsheet_id, "Demo completed");

    Ok(())
}
