/// Text-generation port trait
///
/// Defines the single capability shared by every Large Language Model provider.
/// Implementations: OpenAI, Anthropic, Google Gemini.
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for text-generation services
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends one user prompt and returns the provider's text verbatim
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is configured (has API key)
    fn is_configured(&self) -> bool;
}
