use crate::core::error::AigenError;
use reqwest::{Client, Response};
use serde::Serialize;

/// HTTP client shared by provider adapters. Attaches the bearer token to
/// every outgoing request.
pub struct BaseApiClient {
    endpoint: String,
    api_key: String,
    client: Client,
}

impl BaseApiClient {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            endpoint,
            api_key,
            client: Client::new(),
        }
    }

    pub async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Response, AigenError> {
        let url = format!("{}/{}", self.endpoint, path);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .await?;

        Ok(response.error_for_status()?)
    }
}
