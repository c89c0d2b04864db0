/// Speech-synthesis port trait
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for text-to-speech services
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Renders `text` to encoded audio (MP3)
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>>;

    fn provider_name(&self) -> &str;
}
