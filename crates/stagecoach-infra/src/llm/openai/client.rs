//! OpenAiBackend -- concrete [`CompletionBackend`] for OpenAI-compatible
//! chat-completion APIs.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use stagecoach_core::llm::CompletionBackend;
use stagecoach_types::llm::{CompletionRequest, LlmError};

use super::types::ChatCompletionResponse;

/// Outbound request timeout. Upstream calls are never retried, so a hung
/// provider must not hold the gateway open indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// OpenAI-compatible chat-completion backend.
///
/// # API Key Security
///
/// Does NOT derive Debug so the key inside the client can never leak
/// through formatting or tracing output.
pub struct OpenAiBackend {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl OpenAiBackend {
    /// Create a new backend pointed at the OpenAI API.
    pub fn new(api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl CompletionBackend for OpenAiBackend {
    fn name(&self) -> &str {
        "openai"
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let response = self
            .client
            .post(self.url())
            .bearer_auth(self.api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmError::ResponseShape(e.to_string()))?;

        Ok(parsed.first_content().unwrap_or_default())
    }
}
