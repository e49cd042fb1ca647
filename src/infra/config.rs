// Environment-supplied secrets, read once at process start.
//
// A missing secret is NOT fatal at startup: the server still binds, and
// every request that needs the missing secret gets the uniform
// "Missing required secrets" error envelope before any outbound call.

use crate::infra::google::ServiceAccountCredentials;

/// Read-only configuration loaded at process start and injected into each
/// request's pipeline. No other shared state exists.
#[derive(Clone)]
pub struct AppConfig {
    pub google_credentials: Option<ServiceAccountCredentials>,
    pub ai_api_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let google_credentials = match std::env::var("GOOGLE_SERVICE_ACCOUNT_JSON") {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(creds) => Some(creds),
                Err(e) => {
                    tracing::warn!("GOOGLE_SERVICE_ACCOUNT_JSON is not valid key JSON: {}", e);
                    None
                }
            },
            Err(_) => {
                tracing::warn!("GOOGLE_SERVICE_ACCOUNT_JSON is not set");
                None
            }
        };

        let ai_api_key = std::env::var("LOVABLE_API_KEY").ok();
        if ai_api_key.is_none() {
            tracing::warn!("LOVABLE_API_KEY is not set");
        }

        Self {
            google_credentials,
            ai_api_key,
        }
    }
}
