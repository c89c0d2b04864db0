//! Anthropic LLM service adapter
//!
//! Implements the TextGenerator port for Anthropic's messages API (Claude models).

use crate::adapters::services::http;
use crate::error::{AppError, Result};
use crate::ports::llm::TextGenerator;
use async_trait::async_trait;
use reqwest::{Client, Request};
use serde::{Deserialize, Serialize};

const ANTHROPIC_API_BASE: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_API_VERSION: &str = "2023-06-01";
pub const ANTHROPIC_MODEL: &str = "claude-3-haiku-20240307";
const MAX_TOKENS: u32 = 1000;

/// Anthropic service implementation
pub struct AnthropicService {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    text: Option<String>,
}

impl AnthropicService {
    /// Create a new Anthropic service with the given API key
    pub fn new(client: Client, api_key: String) -> Self {
        Self {
            client,
            api_key,
            base_url: ANTHROPIC_API_BASE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_request(&self, prompt: &str) -> Result<Request> {
        let request_body = MessagesRequest {
            model: ANTHROPIC_MODEL,
            max_tokens: MAX_TOKENS,
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        let request = self
            .client
            .post(format!("{}/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_API_VERSION)
            .json(&request_body)
            .build()?;
        Ok(request)
    }

    fn extract_text(response: MessagesResponse) -> Result<String> {
        response
            .content
            .into_iter()
            .next()
            .and_then(|block| block.text)
            .ok_or_else(|| AppError::Llm("No content blocks returned".to_string()))
    }
}

#[async_trait]
impl TextGenerator for AnthropicService {
    async fn generate(&self, prompt: &str) -> Result<String> {
        log::info!(
            "Calling Anthropic messages API with model: {}",
            ANTHROPIC_MODEL
        );

        let request = self.build_request(prompt)?;
        let response =
            http::send(&self.client, request, "Anthropic messages", AppError::Llm).await?;

        let messages_response: MessagesResponse = response.json().await.map_err(|e| {
            AppError::Llm(format!("Failed to parse messages response: {}", e))
        })?;

        let content = Self::extract_text(messages_response)?;
        log::info!(
            "Anthropic completion successful, generated {} characters",
            content.len()
        );
        Ok(content)
    }

    fn provider_name(&self) -> &str {
        "anthropic"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::services::http::testing::{header, json_body};

    #[test]
    fn test_anthropic_service_creation() {
        let service = AnthropicService::new(Client::new(), "test_api_key".to_string());
        assert_eq!(service.provider_name(), "anthropic");
        assert!(service.is_configured());
    }

    #[test]
    fn test_request_shape() {
        let service = AnthropicService::new(Client::new(), "sk-ant-test".to_string());
        let request = service.build_request("요약해 주세요").unwrap();

        assert_eq!(request.url().as_str(), "https://api.anthropic.com/v1/messages");
        assert_eq!(header(&request, "x-api-key"), Some("sk-ant-test"));
        assert_eq!(header(&request, "anthropic-version"), Some("2023-06-01"));
        assert!(header(&request, "authorization").is_none());
        assert_eq!(
            json_body(&request),
            serde_json::json!({
                "model": "claude-3-haiku-20240307",
                "max_tokens": 1000,
                "messages": [{"role": "user", "content": "요약해 주세요"}]
            })
        );
    }

    #[test]
    fn test_extract_text() {
        let response: MessagesResponse = serde_json::from_str(
            r#"{"id":"msg_1","type":"message","role":"assistant","content":[{"type":"text","text":"Claude reply"}],"usage":{"input_tokens":3,"output_tokens":2}}"#,
        )
        .unwrap();
        assert_eq!(AnthropicService::extract_text(response).unwrap(), "Claude reply");

        let empty: MessagesResponse = serde_json::from_str(r#"{"content":[]}"#).unwrap();
        let err = AnthropicService::extract_text(empty).unwrap_err();
        assert!(err.to_string().contains("No content blocks"));
    }
}
