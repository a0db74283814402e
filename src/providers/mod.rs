use async_trait::async_trait;

pub mod base_client;
pub mod factory;
pub mod gemini;

/// Capability implemented by every generative-AI provider: produce text from
/// an objective plus the context it should be grounded in.
///
/// Implementations never fail outward. A provider that cannot obtain an
/// answer substitutes its own fallback message instead of surfacing an error.
#[async_trait]
pub trait GenerativeAi: Send + Sync {
    async fn generate_content(&self, objective: &str, context: &str) -> String;
}
