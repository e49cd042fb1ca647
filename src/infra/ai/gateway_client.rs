use crate::core::ai::{AiConfig, AiMessage, AiProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::error::Error;

const COMPLETIONS_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";

/// Chat-completion client for the Lovable AI gateway (OpenAI-shaped API).
pub struct GatewayClient {
    client: Client,
    api_key: String,
}

impl GatewayClient {
    pub fn new(api_key: String, client: Client) -> Self {
        Self { client, api_key }
    }
}

#[async_trait]
impl AiProvider for GatewayClient {
    async fn chat_complete(
        &self,
        messages: &[AiMessage],
        config: &AiConfig,
    ) -> Result<String, Box<dyn Error + Send + Sync>> {
        let payload = json!({
            "model": config.model,
            "messages": messages,
            "temperature": config.temperature,
        });

        let response = self
            .client
            .post(COMPLETIONS_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await?;
            // The body can carry quota details etc. - keep it in the server
            // log, surface only the status to the caller.
            tracing::error!("AI gateway returned {}: {}", status, text);
            return Err(format!("AI API error: {}", status.as_u16()).into());
        }

        let response_json: serde_json::Value = response.json().await?;

        // Extract content of the first choice
        let content = response_json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or("Failed to parse response content")?
            .to_string();

        Ok(content)
    }
}
