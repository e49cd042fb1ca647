use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiMessage {
    pub role: String,
    pub content: String,
}

/// Sampling configuration sent with every completion request.
///
/// Both fields are fixed for this service: the model identifier never varies
/// per request, and the temperature stays low because the analyst is supposed
/// to compute from the table, not improvise.
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub model: String,
    pub temperature: f32,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            model: "google/gemini-2.5-flash".to_string(),
            temperature: 0.2,
        }
    }
}
