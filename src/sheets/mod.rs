mod auth;
mod client;
mod requests;

pub use client::SheetsClient;

use crate::error::Result;
use async_trait::async_trait;
use google_sheets4::FieldMask;
use google_sheets4::api::{CellFormat, GridRange};
use serde_json::Value;

/// The operations the demo workflow needs from a spreadsheet backend.
/// `SheetsClient` implements them against the remote API; tests substitute
/// an in-memory fake.
#[async_trait]
pub trait SpreadsheetOps {
    /// Fetch one rectangular range. Absent data comes back as an empty vec.
    async fn get(&self, range: &str) -> Result<Vec<Vec<Value>>>;

    /// Overwrite the range with the given rows.
    async fn update(&self, range: &str, rows: Vec<Vec<Value>>) -> Result<()>;

    /// Insert rows after the last populated row of the named sheet.
    async fn append(&self, sheet_name: &str, rows: Vec<Vec<Value>>) -> Result<()>;

    /// Patch the format of every cell in the range. Only the fields named in
    /// the mask are applied; everything else is left untouched.
    async fn format(&self, range: GridRange, format: CellFormat, fields: FieldMask) -> Result<()>;

    /// Resolve a sheet's numeric id from its title.
    async fn sheet_id(&self, title: &str) -> Result<i32>;

    /// Replace any validation on the range with a strict "one of a list" rule.
    async fn set_list_validation(&self, range: GridRange, values: &[String]) -> Result<()>;
}
