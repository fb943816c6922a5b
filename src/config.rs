use crate::error::{AppError, Result};
use std::env;
use std::path::PathBuf;

const SPREADSHEET_ID_VAR: &str = "SPREAD_SHEET_ID";
const CREDENTIALS_PATH_VAR: &str = "SERVICE_ACCOUNT_KEY";
const SHEET_NAME_VAR: &str = "SHEET_NAME";

const DEFAULT_CREDENTIALS_PATH: &str = "secret.json";
const DEFAULT_SHEET_NAME: &str = "Sheet1";

#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the service account JSON key file.
    pub credentials_path: PathBuf,
    /// Identifier of the spreadsheet all operations target.
    pub spreadsheet_id: String,
    /// Title of the sheet the demo workflow writes to.
    pub sheet_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup, so tests don't have
    /// to mutate the process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let spreadsheet_id = lookup(SPREADSHEET_ID_VAR)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                AppError::Config(format!("{} environment variable must be set", SPREADSHEET_ID_VAR))
            })?;

        let credentials_path = lookup(CREDENTIALS_PATH_VAR)
            .filter(|path| !path.is_empty())
            .unwrap_or_else(|| DEFAULT_CREDENTIALS_PATH.to_string());

        let sheet_name = lookup(SHEET_NAME_VAR)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_SHEET_NAME.to_string());

        Ok(Config {
            credentials_path: PathBuf::from(credentials_path),
            spreadsheet_id,
            sheet_name,
        })
    }
}
