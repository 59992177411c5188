//! HTTP transport from the chat client to the gateway.

use std::time::Duration;

use stagecoach_core::client::GatewayTransport;
use stagecoach_types::chat::{ChatReply, ChatRequest};
use stagecoach_types::error::TransportError;

/// Submission timeout for one chat turn. Slightly longer than the
/// gateway's own upstream timeout so the server-side failure reply wins
/// when the provider hangs.
const SEND_TIMEOUT: Duration = Duration::from_secs(75);

/// reqwest-based [`GatewayTransport`] pointed at a running gateway.
pub struct HttpGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGateway {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:8017`.
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            endpoint: format!("{}/api/chat", base_url.trim_end_matches('/')),
        }
    }

    /// The chat endpoint this transport posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl GatewayTransport for HttpGateway {
    async fn send(&self, request: &ChatRequest) -> Result<ChatReply, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        response
            .json::<ChatReply>()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))
    }
}
