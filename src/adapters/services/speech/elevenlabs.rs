//! ElevenLabs text-to-speech adapter
//!
//! Implements the SpeechSynthesizer port. The voice id is part of the URL and
//! the response body is the encoded MP3.

use crate::adapters::services::http;
use crate::error::{AppError, Result};
use crate::ports::speech::SpeechSynthesizer;
use async_trait::async_trait;
use reqwest::{Client, Request};
use serde::Serialize;

const ELEVENLABS_API_BASE: &str = "https://api.elevenlabs.io/v1";
pub const ELEVENLABS_MODEL: &str = "eleven_turbo_v2_5";

/// ElevenLabs service implementation
pub struct ElevenLabsService {
    client: Client,
    api_key: String,
    voice_id: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct TextToSpeechRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
        }
    }
}

impl ElevenLabsService {
    pub fn new(client: Client, api_key: String, voice_id: String) -> Self {
        Self {
            client,
            api_key,
            voice_id,
            base_url: ELEVENLABS_API_BASE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn ensure_configured(&self) -> Result<()> {
        if self.api_key.is_empty() || self.voice_id.is_empty() {
            return Err(AppError::MissingCredential(
                "ElevenLabs API Key 또는 Voice ID가 설정되지 않았습니다.".to_string(),
            ));
        }
        Ok(())
    }

    fn build_request(&self, text: &str) -> Result<Request> {
        let request_body = TextToSpeechRequest {
            text,
            model_id: ELEVENLABS_MODEL,
            voice_settings: VoiceSettings::default(),
        };

        let request = self
            .client
            .post(format!("{}/text-to-speech/{}", self.base_url, self.voice_id))
            .header("xi-api-key", &self.api_key)
            .header("Accept", "audio/mpeg")
            .json(&request_body)
            .build()?;
        Ok(request)
    }
}

#[async_trait]
impl SpeechSynthesizer for ElevenLabsService {
    async fn synthesize(&self, text: &str) -> Result<Vec<u8>> {
        self.ensure_configured()?;

        log::info!(
            "Requesting ElevenLabs speech for {} characters with model: {}",
            text.chars().count(),
            ELEVENLABS_MODEL
        );

        let request = self.build_request(text)?;
        let response =
            http::send(&self.client, request, "ElevenLabs text-to-speech", AppError::Speech)
                .await?;

        let audio = response
            .bytes()
            .await
            .map_err(|e| AppError::Speech(format!("Failed to read audio response: {}", e)))?;

        log::info!("ElevenLabs returned {} bytes of audio", audio.len());
        Ok(audio.to_vec())
    }

    fn provider_name(&self) -> &str {
        "elevenlabs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::services::http::testing::{header, json_body};

    #[test]
    fn test_request_shape() {
        let service = ElevenLabsService::new(
            Client::new(),
            "xi-test".to_string(),
            "21m00Tcm4TlvDq8ikWAM".to_string(),
        );
        let request = service.build_request("안녕하세요").unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://api.elevenlabs.io/v1/text-to-speech/21m00Tcm4TlvDq8ikWAM"
        );
        assert_eq!(header(&request, "xi-api-key"), Some("xi-test"));
        assert_eq!(header(&request, "content-type"), Some("application/json"));
        assert_eq!(
            json_body(&request),
            serde_json::json!({
                "text": "안녕하세요",
                "model_id": "eleven_turbo_v2_5",
                "voice_settings": {"stability": 0.5, "similarity_boost": 0.75}
            })
        );
    }

    #[tokio::test]
    async fn test_missing_voice_fails_before_any_request() {
        // An unroutable base URL proves no request is attempted.
        let service = ElevenLabsService::new(Client::new(), "xi-test".to_string(), String::new())
            .with_base_url("http://invalid.invalid");
        let err = service.synthesize("script").await.unwrap_err();
        assert!(matches!(err, AppError::MissingCredential(_)));
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_request() {
        let service = ElevenLabsService::new(Client::new(), String::new(), "voice".to_string())
            .with_base_url("http://invalid.invalid");
        let err = service.synthesize("script").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "ElevenLabs API Key 또는 Voice ID가 설정되지 않았습니다."
        );
    }
}
