use crate::core::error::AigenError;
use crate::providers::GenerativeAi;
use crate::providers::gemini::types::{GeminiContent, GeminiPart, GeminiRequest};
use async_trait::async_trait;

mod client;
pub mod types;

pub use client::GeminiClient;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Returned when the HTTP exchange with the Gemini API fails.
pub const COMMUNICATION_FALLBACK: &str = "Foi mal! Erro de comunicaçao com a API do Google Gemini";
/// Returned when the API reply does not carry the expected data.
pub const MALFORMED_REPLY_FALLBACK: &str =
    "Foi mal! O retorno da API dp Google Gemini não contem os dados esperados.";

pub struct GeminiProvider {
    client: GeminiClient,
}

impl GeminiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(DEFAULT_BASE_URL.to_string(), api_key)
    }

    pub fn with_endpoint(endpoint: String, api_key: String) -> Self {
        Self {
            client: GeminiClient::new(endpoint, api_key),
        }
    }

    // One content holding one part, never caller-supplied.
    fn build_payload(objective: &str, context: &str) -> GeminiRequest {
        let prompt = format!("{objective}\n{context}\n");

        GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
        }
    }
}

#[async_trait]
impl GenerativeAi for GeminiProvider {
    async fn generate_content(&self, objective: &str, context: &str) -> String {
        let req = Self::build_payload(objective, context);

        match self.client.text_only_input(&req).await {
            Ok(resp) => match resp
                .candidates
                .first()
                .and_then(|candidate| candidate.content.parts.first())
            {
                Some(part) => part.text.clone(),
                None => {
                    tracing::warn!("gemini reply carried no candidate text");
                    MALFORMED_REPLY_FALLBACK.to_string()
                }
            },
            Err(AigenError::Network(reason)) | Err(AigenError::Api(reason)) => {
                tracing::warn!(error = %reason, "gemini call failed");
                COMMUNICATION_FALLBACK.to_string()
            }
            Err(err) => {
                tracing::warn!(error = %err, "unexpected gemini reply");
                MALFORMED_REPLY_FALLBACK.to_string()
            }
        }
    }
}
