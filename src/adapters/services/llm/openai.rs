//! OpenAI LLM service adapter
//!
//! Implements the TextGenerator port for OpenAI's chat completion API.

use crate::adapters::services::http;
use crate::error::{AppError, Result};
use crate::ports::llm::TextGenerator;
use async_trait::async_trait;
use reqwest::{Client, Request};
use serde::{Deserialize, Serialize};

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
pub const OPENAI_MODEL: &str = "gpt-3.5-turbo";

/// OpenAI service implementation
pub struct OpenAIService {
    client: Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAIService {
    /// Create a new OpenAI service with the given API key
    pub fn new(client: Client, api_key: String) -> Self {
        Self {
            client,
            api_key,
            base_url: OPENAI_API_BASE.to_string(),
        }
    }

    /// Point the adapter at another OpenAI-compatible endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_request(&self, prompt: &str) -> Result<Request> {
        let request_body = ChatCompletionRequest {
            model: OPENAI_MODEL,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .build()?;
        Ok(request)
    }

    fn extract_text(response: ChatCompletionResponse) -> Result<String> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::Llm("No choices returned".to_string()))
    }
}

#[async_trait]
impl TextGenerator for OpenAIService {
    async fn generate(&self, prompt: &str) -> Result<String> {
        log::info!("Calling OpenAI chat completion with model: {}", OPENAI_MODEL);

        let request = self.build_request(prompt)?;
        let response = http::send(&self.client, request, "OpenAI chat completion", AppError::Llm)
            .await?;

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            AppError::Llm(format!("Failed to parse chat completion response: {}", e))
        })?;

        let content = Self::extract_text(completion)?;
        log::info!(
            "OpenAI completion successful, generated {} characters",
            content.len()
        );
        Ok(content)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
