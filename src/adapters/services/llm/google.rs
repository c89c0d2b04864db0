//! Google Gemini LLM service adapter
//!
//! Implements the TextGenerator port for Google's generateContent API.
//! The API key travels as the `key` query parameter.

use crate::adapters::services::http;
use crate::error::{AppError, Result};
use crate::ports::llm::TextGenerator;
use async_trait::async_trait;
use reqwest::{Client, Request};
use serde::{Deserialize, Serialize};

const GOOGLE_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google Gemini service implementation
pub struct GoogleService {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GoogleService {
    /// Create a new Google Gemini service with the given API key and model
    pub fn new(client: Client, api_key: String, model: impl Into<String>) -> Self {
        Self {
            client,
            api_key,
            model: model.into(),
            base_url: GOOGLE_API_BASE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Model path segment, e.g. "gemini-pro" -> "models/gemini-pro"
    fn model_path(&self) -> String {
        format!("models/{}", self.model)
    }

    fn build_request(&self, prompt: &str) -> Result<Request> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let request = self
            .client
            .post(format!(
                "{}/{}:generateContent",
                self.base_url,
                self.model_path()
            ))
            .query(&[("key", &self.api_key)])
            .json(&request_body)
            .build()?;
        Ok(request)
    }

    fn extract_text(response: GenerateContentResponse) -> Result<String> {
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Llm("No candidates returned".to_string()))?;

        candidate
            .content
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or_else(|| AppError::Llm("No content parts in response".to_string()))
    }
}

#[async_trait]
impl TextGenerator for GoogleService {
    async fn generate(&self, prompt: &str) -> Result<String> {
        log::info!(
            "Calling Google generateContent with model: {}",
            self.model_path()
        );

        let request = self.build_request(prompt)?;
        let response =
            http::send(&self.client, request, "Google generateContent", AppError::Llm).await?;

        let content_response: GenerateContentResponse = response.json().await.map_err(|e| {
            AppError::Llm(format!("Failed to parse content response: {}", e))
        })?;

        let content = Self::extract_text(content_response)?;
        log::info!(
            "Google completion successful, generated {} characters",
            content.len()
        );
        Ok(content)
    }

    fn provider_name(&self) -> &str {
        "google"
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}
