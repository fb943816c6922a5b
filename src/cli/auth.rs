use crate::config::Config;
use crate::error::Result;
use crate::sheets::SheetsClient;
use tracing::info;

pub async fn execute() -> Result<()> {
    let config = Config::from_env()?;
    let _client = SheetsClient::new(&config).await?;

    info!("Service account authentication verified");

    Ok(())
}
