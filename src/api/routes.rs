use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::core::ai::AiService;
use crate::core::sales::{PipelineError, SalesQaService};
use crate::infra::ai::GatewayClient;
use crate::infra::config::AppConfig;
use crate::infra::google::{DriveClient, ServiceAccountAuth, SheetsClient};

// ============================================================================
// REQUEST / RESPONSE TYPES
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub query: String,
    #[serde(rename = "folderId")]
    pub folder_id: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// Pipeline failure mapped to the wire. Every error becomes a 500 with an
/// `{"error": ...}` body; the caller never sees a partial answer.
struct ApiError(PipelineError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.0.to_string() })),
        )
            .into_response()
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        Self(err)
    }
}

// ============================================================================
// STATE & PIPELINE CONSTRUCTION
// ============================================================================

/// Shared, read-only state: the secrets loaded at startup plus one reqwest
/// client (connection pool) reused across requests.
pub struct AppState {
    pub config: AppConfig,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Builds a fresh pipeline for one request from the injected config.
    ///
    /// Checked here, before any client is constructed, so a request with
    /// missing secrets never makes an outbound call.
    fn build_pipeline(
        &self,
    ) -> Result<
        SalesQaService<ServiceAccountAuth, DriveClient, SheetsClient, GatewayClient>,
        PipelineError,
    > {
        let (credentials, api_key) = match (&self.config.google_credentials, &self.config.ai_api_key)
        {
            (Some(credentials), Some(api_key)) => (credentials.clone(), api_key.clone()),
            _ => return Err(PipelineError::MissingSecrets),
        };

        Ok(SalesQaService::new(
            ServiceAccountAuth::new(credentials, self.http.clone()),
            DriveClient::new(self.http.clone()),
            SheetsClient::new(self.http.clone()),
            AiService::new(GatewayClient::new(api_key, self.http.clone())),
        ))
    }
}

// ============================================================================
// HANDLERS & ROUTER
// ============================================================================

async fn ask(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, ApiError> {
    tracing::info!("Answering question about folder {}", request.folder_id);

    let pipeline = state.build_pipeline()?;
    let answer = pipeline.answer(&request.query, &request.folder_id).await?;

    Ok(Json(AskResponse { answer }))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", post(ask))
        .route("/health", get(health))
        .layer(crate::api::cors::cors_layer())
        .layer(crate::api::cors::always_allow_origin())
        .layer(crate::api::cors::always_allow_headers())
        .with_state(state)
}
