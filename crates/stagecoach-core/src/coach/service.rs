//! The gateway's single request-handling operation.

use stagecoach_types::chat::ChatRequest;
use stagecoach_types::error::CoachError;

use super::prompt;
use crate::llm::BoxCompletionBackend;

/// Reply substituted when the provider returns a completion with no
/// content, so the client never sees an empty reply.
pub const EMPTY_COMPLETION_REPLY: &str =
    "I couldn't generate a reply. Try asking again in a different way.";

/// Stateless request handler: validate, assemble the prompt, call the
/// completion backend once, shape the reply.
///
/// Holds nothing across requests. A service constructed without a backend
/// answers every request with [`CoachError::NotConfigured`] and never
/// attempts an external call.
pub struct CoachService {
    backend: Option<BoxCompletionBackend>,
}

impl CoachService {
    pub fn new(backend: Option<BoxCompletionBackend>) -> Self {
        Self { backend }
    }

    /// Whether a completion backend was configured at startup.
    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    /// Handle one chat turn.
    ///
    /// Every failure is a typed [`CoachError`]; the HTTP layer maps each
    /// variant to its fixed user-facing reply.
    pub async fn handle(&self, request: &ChatRequest) -> Result<String, CoachError> {
        let message = request
            .message
            .as_str()
            .filter(|m| !m.is_empty())
            .ok_or_else(|| {
                tracing::debug!("rejecting request without a usable message");
                CoachError::InvalidMessage
            })?;

        let Some(backend) = &self.backend else {
            tracing::error!("completion credential missing; refusing chat request");
            return Err(CoachError::NotConfigured);
        };

        let history = request.history.as_deref().unwrap_or_default();
        let completion = prompt::completion_request(request.section.as_deref(), message, history);

        let content = backend.complete(&completion).await.map_err(|e| {
            tracing::error!(backend = backend.name(), error = %e, "completion request failed");
            CoachError::Provider(e)
        })?;

        if content.is_empty() {
            tracing::warn!("provider returned an empty completion");
            return Ok(EMPTY_COMPLETION_REPLY.to_string());
        }

        Ok(content)
    }
}
