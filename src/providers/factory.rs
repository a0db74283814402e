use crate::config::{Provider, ProviderConfig};
use crate::core::error::AigenError;
use crate::providers::{GenerativeAi, gemini::GeminiProvider};
use std::collections::HashMap;

type ProviderCreator =
    Box<dyn Fn(&ProviderConfig) -> Result<Box<dyn GenerativeAi>, AigenError> + Send + Sync>;

pub struct ProviderFactory {
    creators: HashMap<Provider, ProviderCreator>,
}

impl ProviderFactory {
    pub fn new() -> Self {
        let mut creators = HashMap::new();

        creators.insert(
            Provider::Gemini,
            Box::new(|config: &ProviderConfig| {
                let api_key = config
                    .api_key
                    .clone()
                    .or_else(|| std::env::var("GEMINI_API_KEY").ok())
                    .ok_or_else(|| {
                        AigenError::Config("Missing API key for provider: gemini".to_string())
                    })?;
                let provider = if let Some(base_url) = &config.base_url {
                    GeminiProvider::with_endpoint(base_url.clone(), api_key)
                } else {
                    GeminiProvider::new(api_key)
                };
                Ok(Box::new(provider) as Box<dyn GenerativeAi>)
            }) as ProviderCreator,
        );

        Self { creators }
    }

    pub fn create(
        &self,
        provider: &Provider,
        config: &ProviderConfig,
    ) -> Result<Box<dyn GenerativeAi>, AigenError> {
        self.creators
            .get(provider)
            .ok_or_else(|| AigenError::Config(format!("Provider not found: {:?}", provider)))
            .and_then(|creator| creator(config))
    }
}
