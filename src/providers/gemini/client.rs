use crate::core::error::AigenError;
use crate::providers::base_client::BaseApiClient;
use crate::providers::gemini::types::{GeminiRequest, GeminiResponse};

const GENERATE_CONTENT_PATH: &str = "v1beta/models/gemini-pro:generateContent";

pub struct GeminiClient {
    client: BaseApiClient,
}

impl GeminiClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: BaseApiClient::new(base_url, api_key),
        }
    }

    /// Single-shot text-only generation request.
    pub async fn text_only_input(
        &self,
        req: &GeminiRequest,
    ) -> Result<GeminiResponse, AigenError> {
        let response = self.client.post(GENERATE_CONTENT_PATH, req).await?;

        let response_body = response.text().await?;
        tracing::debug!(bytes = response_body.len(), "gemini response received");

        let parsed: GeminiResponse = serde_json::from_str(&response_body).map_err(|e| {
            AigenError::Serialization(format!("Failed to parse Gemini response: {}", e))
        })?;

        Ok(parsed)
    }
}
