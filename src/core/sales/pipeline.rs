// This is the sales Q&A pipeline - the business logic that turns a question
// plus a Drive folder of monthly spreadsheets into an AI-written answer.
// Notice how this module has NO reqwest or Google-specific code: the outside
// world is reached only through the traits below, which the infra layer
// implements. That keeps the whole pipeline testable with in-memory fakes.

use async_trait::async_trait;
use thiserror::Error;

use super::consolidation::SalesTable;
use crate::core::ai::{AiProvider, AiService};

/// Error type shared by the seam traits below.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

// ============================================================================
// DOMAIN MODELS
// ============================================================================

/// One spreadsheet discovered in the target folder.
///
/// Identity is the Drive file id; the name is only used to tag consolidated
/// rows with their source month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    pub id: String,
    pub name: String,
}

/// Errors raised by the pipeline. All of them surface to the caller as a
/// single `{error}` envelope; only the message text differs per stage.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Missing required secrets")]
    MissingSecrets,
    #[error("{0}")]
    TokenExchange(String),
    #[error("{0}")]
    Discovery(String),
    #[error("No spreadsheets found in folder '{0}'")]
    NoSpreadsheets(String),
    #[error("Failed to read spreadsheet '{name}': {message}")]
    SheetRead { name: String, message: String },
    #[error("{0}")]
    Completion(String),
}

// ============================================================================
// SEAMS TO THE OUTSIDE WORLD
// ============================================================================

/// Produces a fresh bearer token for the Google APIs.
///
/// Every call mints a new token - nothing is cached, so each request pays
/// for its own signature and exchange round-trip.
#[async_trait]
pub trait AccessTokenSource: Send + Sync {
    async fn access_token(&self) -> Result<String, BoxError>;
}

/// Lists the spreadsheets contained in a folder.
#[async_trait]
pub trait SpreadsheetCatalog: Send + Sync {
    async fn list_spreadsheets(
        &self,
        token: &str,
        folder_id: &str,
    ) -> Result<Vec<DocumentRef>, BoxError>;
}

/// Reads the raw cell grid (columns A-H, all rows) of one spreadsheet.
#[async_trait]
pub trait SheetValuesReader: Send + Sync {
    async fn read_rows(
        &self,
        token: &str,
        spreadsheet_id: &str,
    ) -> Result<Vec<Vec<String>>, BoxError>;
}

// ============================================================================
// PIPELINE SERVICE
// ============================================================================

pub struct SalesQaService<T, C, R, P>
where
    T: AccessTokenSource,
    C: SpreadsheetCatalog,
    R: SheetValuesReader,
    P: AiProvider,
{
    tokens: T,
    catalog: C,
    sheets: R,
    ai: AiService<P>,
}

impl<T, C, R, P> SalesQaService<T, C, R, P>
where
    T: AccessTokenSource,
    C: SpreadsheetCatalog,
    R: SheetValuesReader,
    P: AiProvider,
{
    pub fn new(tokens: T, catalog: C, sheets: R, ai: AiService<P>) -> Self {
        Self {
            tokens,
            catalog,
            sheets,
            ai,
        }
    }

    /// Runs the full pipeline for one request:
    /// token -> discovery -> consolidation -> completion, strictly in order.
    ///
    /// Spreadsheets are fetched one at a time, so latency grows linearly
    /// with the number of documents in the folder. Any failure aborts the
    /// remaining steps; there are no retries and no partial answers.
    pub async fn answer(&self, query: &str, folder_id: &str) -> Result<String, PipelineError> {
        let token = self
            .tokens
            .access_token()
            .await
            .map_err(|e| PipelineError::TokenExchange(e.to_string()))?;

        let documents = self
            .catalog
            .list_spreadsheets(&token, folder_id)
            .await
            .map_err(|e| PipelineError::Discovery(e.to_string()))?;

        if documents.is_empty() {
            return Err(PipelineError::NoSpreadsheets(folder_id.to_string()));
        }

        tracing::info!("Found {} spreadsheet(s) in folder", documents.len());

        let mut table = SalesTable::new();
        for doc in &documents {
            let rows = self
                .sheets
                .read_rows(&token, &doc.id)
                .await
                .map_err(|e| PipelineError::SheetRead {
                    name: doc.name.clone(),
                    message: e.to_string(),
                })?;

            let stats = table.append_sheet(&rows, &doc.name);
            tracing::info!(
                "Consolidated '{}': {} row(s) appended",
                doc.name,
                stats.appended
            );
            if stats.dropped > 0 {
                tracing::warn!(
                    "Dropped {} row(s) with fewer than 8 cells from '{}'",
                    stats.dropped,
                    doc.name
                );
            }
        }

        tracing::info!("Consolidated table has {} data row(s)", table.row_count());

        self.ai
            .ask(query, &table.serialize())
            .await
            .map_err(|e| PipelineError::Completion(e.to_string()))
    }
}
