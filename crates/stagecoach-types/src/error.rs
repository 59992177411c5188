use thiserror::Error;

use crate::llm::LlmError;

/// Gateway-side failures for one chat turn.
///
/// Every variant maps to a fixed user-facing reply and status code in the
/// HTTP layer; none of the underlying detail reaches the client.
#[derive(Debug, Error)]
pub enum CoachError {
    /// `message` was absent, not a string, or empty.
    #[error("message must be a non-empty string")]
    InvalidMessage,

    /// No provider credential was configured at startup.
    #[error("no completion backend is configured")]
    NotConfigured,

    /// The completion provider call failed.
    #[error(transparent)]
    Provider(#[from] LlmError),
}

/// Client-side transport failures when talking to the gateway.
///
/// The chat client treats all of these the same way (fixed apology, nothing
/// appended to history); the variants exist for logs.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The gateway answered with a non-success status.
    #[error("gateway returned HTTP {0}")]
    Status(u16),

    /// The gateway could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The gateway answered 2xx but the body was not a reply payload.
    #[error("invalid gateway response: {0}")]
    Body(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coach_error_wraps_llm_error() {
        let err: CoachError = LlmError::Api {
            status: 503,
            body: "overloaded".to_string(),
        }
        .into();
        assert!(matches!(err, CoachError::Provider(_)));
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_transport_error_display() {
        assert!(TransportError::Status(500).to_string().contains("500"));
    }
}
