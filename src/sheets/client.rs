use super::SpreadsheetOps;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::sheets::auth::create_and_verify_authenticator;
use crate::sheets::requests::{list_validation, repeat_cell_format};
use async_trait::async_trait;
use google_sheets4::FieldMask;
use google_sheets4::api::{
    BatchUpdateSpreadsheetRequest, CellFormat, GridRange, Scope, Sheets, ValueRange,
};
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use serde_json::Value;
use tracing::{debug, instrument};

// Full read/write access to the target spreadsheet.
pub(crate) const AUTH_SCOPE: Scope = Scope::Spreadsheet;

// Values are parsed as if typed into the UI, so the remote side may coerce
// strings into numbers or formulas.
const VALUE_INPUT_OPTION: &str = "USER_ENTERED";

pub struct SheetsClient {
    hub: Sheets<HttpsConnector<HttpConnector>>,
    spreadsheet_id: String,
}

impl SheetsClient {
    /// Create a new SheetsClient with authenticated access
    #[instrument(name = "Authenticating to Google Sheets", skip_all)]
    pub async fn new(config: &Config) -> Result<Self> {
        let auth = create_and_verify_authenticator(&config.credentials_path).await?;

        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()
            .unwrap()
            .https_or_http()
            .enable_http1()
            .build();

        let client = Client::builder(hyper_util::rt::TokioExecutor::new()).build(connector);
        let hub = Sheets::new(client, auth);

        Ok(Self {
            hub,
            spreadsheet_id: config.spreadsheet_id.clone(),
        })
    }
}

#[async_trait]
impl SpreadsheetOps for SheetsClient {
    #[instrument(name = "Reading range", skip(self))]
    async fn get(&self, range: &str) -> Result<Vec<Vec<Value>>> {
        let (_, response) = self
            .hub
            .spreadsheets()
            .values_get(&self.spreadsheet_id, range)
            .add_scope(AUTH_SCOPE)
            .doit()
            .await
            .map_err(|e| AppError::Sheets(format!("Failed to read range '{}': {}", range, e)))?;

        Ok(response.values.unwrap_or_default())
    }

    #[instrument(name = "Updating range", skip(self, rows))]
    async fn update(&self, range: &str, rows: Vec<Vec<Value>>) -> Result<()> {
        let value_range = ValueRange {
            values: Some(rows),
            ..Default::default()
        };

        self.hub
            .spreadsheets()
            .values_update(value_range, &self.spreadsheet_id, range)
            .value_input_option(VALUE_INPUT_OPTION)
            .add_scope(AUTH_SCOPE)
            .doit()
            .await
            .map_err(|e| AppError::Sheets(format!("Failed to update range '{}': {}", range, e)))?;

        Ok(())
    }

    #[instrument(name = "Appending rows", skip(self, rows))]
    async fn append(&self, sheet_name: &str, rows: Vec<Vec<Value>>) -> Result<()> {
        let value_range = ValueRange {
            values: Some(rows),
            ..Default::default()
        };

        self.hub
            .spreadsheets()
            .values_append(value_range, &self.spreadsheet_id, sheet_name)
            .value_input_option(VALUE_INPUT_OPTION)
            .insert_data_option("INSERT_ROWS")
            .add_scope(AUTH_SCOPE)
            .doit()
            .await
            .map_err(|e| {
                AppError::Sheets(format!("Failed to append to sheet '{}': {}", sheet_name, e))
            })?;

        Ok(())
    }

    #[instrument(name = "Formatting range", skip_all)]
    async fn format(&self, range: GridRange, format: CellFormat, fields: FieldMask) -> Result<()> {
        let batch_update = BatchUpdateSpreadsheetRequest {
            requests: Some(vec![repeat_cell_format(range, format, fields)]),
            ..Default::default()
        };

        self.hub
            .spreadsheets()
            .batch_update(batch_update, &self.spreadsheet_id)
            .add_scope(AUTH_SCOPE)
            .doit()
            .await
            .map_err(|e| AppError::Sheets(format!("Failed to format range: {}", e)))?;

        Ok(())
    }

    #[instrument(name = "Resolving sheet id", skip(self))]
    async fn sheet_id(&self, title: &str) -> Result<i32> {
        let (_, spreadsheet) = self
            .hub
            .spreadsheets()
            .get(&self.spreadsheet_id)
            .include_grid_data(false)
            .add_scope(AUTH_SCOPE)
            .doit()
            .await
            .map_err(|e| AppError::Sheets(format!("Failed to get spreadsheet: {}", e)))?;

        let sheet_id = spreadsheet
            .sheets
            .unwrap_or_default()
            .into_iter()
            .find(|sheet| {
                sheet
                    .properties
                    .as_ref()
                    .map(|props| props.title.as_deref() == Some(title))
                    .unwrap_or(false)
            })
            .and_then(|sheet| sheet.properties.and_then(|props| props.sheet_id));

        match sheet_id {
            Some(id) => {
                debug!(id, "Resolved sheet id");
                Ok(id)
            }
            None => Err(AppError::SheetNotFound(title.to_string())),
        }
    }

    #[instrument(name = "Setting list validation", skip_all)]
    async fn set_list_validation(&self, range: GridRange, values: &[String]) -> Result<()> {
        let batch_update = BatchUpdateSpreadsheetRequest {
            requests: Some(vec![list_validation(range, values)]),
            ..Default::default()
        };

        self.hub
            .spreadsheets()
            .batch_update(batch_update, &self.spreadsheet_id)
            .add_scope(AUTH_SCOPE)
            .doit()
            .await
            .map_err(|e| AppError::Sheets(format!("Failed to set validation rule: {}", e)))?;

        Ok(())
    }
}
