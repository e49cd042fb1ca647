// Sheets v4 `values.get` for one spreadsheet. The range is fixed to columns
// A-H over all rows; the consolidator owns the header-skip and row-width
// rules, this client just hands back the raw grid.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::error::Error;

use crate::core::sales::SheetValuesReader;

const CELL_RANGE: &str = "A:H";

#[derive(Debug, Deserialize)]
struct ValueRange {
    /// Absent entirely when the sheet is empty.
    #[serde(default)]
    values: Vec<Vec<String>>,
}

pub struct SheetsClient {
    client: Client,
}

impl SheetsClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SheetValuesReader for SheetsClient {
    async fn read_rows(
        &self,
        token: &str,
        spreadsheet_id: &str,
    ) -> Result<Vec<Vec<String>>, Box<dyn Error + Send + Sync>> {
        let url = format!(
            "https://sheets.googleapis.com/v4/spreadsheets/{}/values/{}",
            spreadsheet_id, CELL_RANGE
        );

        tracing::debug!("Reading values from spreadsheet {}", spreadsheet_id);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await?;
            return Err(format!("Sheets API error ({}): {}", status, text).into());
        }

        let range: ValueRange = response.json().await?;
        Ok(range.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_range_deserializes_the_grid() {
        let json = r#"{"range": "Sheet1!A1:H10", "values": [["Date", "ID"], ["2024-01-01", "T1"]]}"#;
        let range: ValueRange = serde_json::from_str(json).unwrap();

        assert_eq!(range.values.len(), 2);
        assert_eq!(range.values[1][1], "T1");
    }

    #[test]
    fn missing_values_block_is_an_empty_grid() {
        let range: ValueRange = serde_json::from_str(r#"{"range": "Sheet1!A1:H1"}"#).unwrap();
        assert!(range.values.is_empty());
    }
}
