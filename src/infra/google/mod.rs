// =============================================================================
// GOOGLE API MODULE
// =============================================================================
//
// Integration with the Google APIs the pipeline depends on:
//
// - `auth`: service-account OAuth2 (signed JWT assertion -> bearer token)
// - `drive_client`: lists the spreadsheets inside the target Drive folder
// - `sheets_client`: reads the raw cell grid of one spreadsheet
//
// **Architecture:**
// These live in the infra layer because they handle external I/O (HTTP
// requests to Google). The core layer only knows the traits in
// `core::sales::pipeline` - it doesn't care where tokens or rows come from.
//
// **Authentication:**
// A service account is the right fit for a server answering on its own
// behalf: share the Drive folder with the service account email (Viewer is
// enough) and put the JSON key in `GOOGLE_SERVICE_ACCOUNT_JSON`.

pub mod auth;
pub mod drive_client;
pub mod sheets_client;

pub use auth::{ServiceAccountAuth, ServiceAccountCredentials};
pub use drive_client::DriveClient;
pub use sheets_client::SheetsClient;
