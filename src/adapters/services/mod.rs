//! External service adapters
//!
//! This module contains adapters for external APIs including:
//! - LLM (Large Language Model) services
//! - Speech synthesis
//! - Cloud storage for the generated audio

pub mod cloud;
pub mod http;
pub mod llm;
pub mod speech;

use crate::domain::{AiProvider, Settings};
use crate::ports::{AudioStorage, ProviderFactory, SpeechSynthesizer, TextGenerator};
use cloud::GoogleDriveService;
use llm::{AnthropicService, GoogleService, OpenAIService};
use reqwest::Client;
use speech::ElevenLabsService;

/// Builds real HTTP adapters from the current settings
pub struct HttpProviders {
    client: Client,
}

impl HttpProviders {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl ProviderFactory for HttpProviders {
    fn text_generator(&self, provider: AiProvider, settings: &Settings) -> Box<dyn TextGenerator> {
        let client = self.client.clone();
        match provider {
            AiProvider::OpenAi => Box::new(OpenAIService::new(
                client,
                settings.openai_api_key.clone(),
            )),
            AiProvider::Anthropic => Box::new(AnthropicService::new(
                client,
                settings.anthropic_api_key.clone(),
            )),
            AiProvider::Google => Box::new(GoogleService::new(
                client,
                settings.google_api_key.clone(),
                settings.gemini_model(),
            )),
        }
    }

    fn speech_synthesizer(&self, settings: &Settings) -> Box<dyn SpeechSynthesizer> {
        Box::new(ElevenLabsService::new(
            self.client.clone(),
            settings.eleven_labs_api_key.clone(),
            settings.eleven_labs_voice_id.clone(),
        ))
    }

    fn audio_storage(&self, settings: &Settings) -> Box<dyn AudioStorage> {
        Box::new(GoogleDriveService::new(
            self.client.clone(),
            settings.google_access_token.clone(),
        ))
    }
}
