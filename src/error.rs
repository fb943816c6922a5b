use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Google Sheets API error: {0}")]
    Sheets(String),

    #[error("OAuth2 authentication error: {0}")]
    Auth(String),

    #[error("sheet '{0}' not found in spreadsheet")]
    SheetNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
