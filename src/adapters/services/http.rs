//! Shared HTTP plumbing for provider adapters

use crate::error::{AppError, Result};
use reqwest::{Client, Request, Response};

/// Build the client shared by every adapter.
///
/// No timeout is set: a provider that never answers keeps the command waiting.
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .user_agent(concat!("note-insight/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

/// Execute `request` and keep the response only if it is a 2xx.
///
/// Transport failures and error bodies are wrapped with `wrap`, keeping the
/// provider's own text so it reaches the user unmodified.
pub(crate) async fn send(
    client: &Client,
    request: Request,
    action: &str,
    wrap: fn(String) -> AppError,
) -> Result<Response> {
    let response = client
        .execute(request)
        .await
        .map_err(|e| wrap(format!("{} request failed: {}", action, e)))?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(wrap(format!(
            "{} failed ({}): {}",
            action, status, error_text
        )));
    }

    Ok(response)
}
