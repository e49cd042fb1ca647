use super::models::{AiConfig, AiMessage};
use async_trait::async_trait;
use std::error::Error;

/// System instruction for the sales analyst persona. The AI answers strictly
/// from the consolidated table it receives in the user turn.
const SYSTEM_PROMPT: &str = "\
Você é um analista de vendas especializado. Você recebe uma tabela consolidada \
com dados de vendas de múltiplas planilhas mensais.

A tabela tem as colunas: date, transaction_id, product, category, region, \
quantity, unit_price, total_revenue, source_month. A coluna source_month \
indica de qual planilha mensal cada linha veio.

Regras:
- Responda APENAS com base nos dados fornecidos na tabela.
- Faça os cálculos necessários (somas, médias, comparações entre meses).
- Responda sempre em português brasileiro.
- Formate valores monetários como moeda brasileira (R$ 1.234,56).
- Use alguns emojis para deixar a resposta mais legível (📊 📈 💰).
- Seja direto e objetivo.";

#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Sends a chat completion request to the AI provider and returns the
    /// answer text of the first choice.
    async fn chat_complete(
        &self,
        messages: &[AiMessage],
        config: &AiConfig,
    ) -> Result<String, Box<dyn Error + Send + Sync>>;
}

pub struct AiService<P: AiProvider> {
    provider: P,
    config: AiConfig,
}

impl<P: AiProvider> AiService<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            config: AiConfig::default(),
        }
    }

    /// Builds the two-message exchange (analyst persona + question with the
    /// serialized table) and relays the provider's answer. One exchange per
    /// request; never retried.
    pub async fn ask(
        &self,
        query: &str,
        table: &str,
    ) -> Result<String, Box<dyn Error + Send + Sync>> {
        let messages = vec![
            AiMessage {
                role: "system".to_string(),
                content: SYSTEM_PROMPT.to_string(),
            },
            AiMessage {
                role: "user".to_string(),
                content: format!("{query}\n\nDados de vendas consolidados:\n{table}"),
            },
        ];

        self.provider.chat_complete(&messages, &self.config).await
    }

    #[cfg(test)]
    pub fn provider(&self) -> &P {
        &self.provider
    }
}
