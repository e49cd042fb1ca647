// Drive v3 `files.list` against the target folder. Only spreadsheets that
// are still in the folder (not trashed) count, and only id + name are
// requested. First page only - folders here hold a dozen monthly sheets,
// not thousands of files.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::error::Error;

use crate::core::sales::{DocumentRef, SpreadsheetCatalog};

const FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";
const SPREADSHEET_MIME: &str = "application/vnd.google-apps.spreadsheet";

#[derive(Debug, Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

#[derive(Debug, Deserialize)]
struct DriveFile {
    id: String,
    name: String,
}

pub struct DriveClient {
    client: Client,
}

impl DriveClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SpreadsheetCatalog for DriveClient {
    async fn list_spreadsheets(
        &self,
        token: &str,
        folder_id: &str,
    ) -> Result<Vec<DocumentRef>, Box<dyn Error + Send + Sync>> {
        let query = format!(
            "'{}' in parents and mimeType='{}' and trashed=false",
            folder_id, SPREADSHEET_MIME
        );

        tracing::debug!("Listing spreadsheets in folder {}", folder_id);

        let response = self
            .client
            .get(FILES_URL)
            .query(&[("q", query.as_str()), ("fields", "files(id,name)")])
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await?;
            return Err(format!("Drive API error ({}): {}", status, text).into());
        }

        let listing: FileList = response.json().await?;

        Ok(listing
            .files
            .into_iter()
            .map(|f| DocumentRef {
                id: f.id,
                name: f.name,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_deserializes_ids_and_names() {
        let json = r#"{"files": [{"id": "abc", "name": "Jan"}, {"id": "def", "name": "Feb"}]}"#;
        let listing: FileList = serde_json::from_str(json).unwrap();

        assert_eq!(listing.files.len(), 2);
        assert_eq!(listing.files[0].id, "abc");
        assert_eq!(listing.files[1].name, "Feb");
    }

    #[test]
    fn absent_files_key_means_empty_listing() {
        let listing: FileList = serde_json::from_str("{}").unwrap();
        assert!(listing.files.is_empty());
    }
}
