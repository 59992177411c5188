//! Completion request/response types.
//!
//! These model the one outbound call the gateway makes per chat turn:
//! an ordered message list with fixed sampling parameters, answered by a
//! completion whose first choice carries the reply text.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a message in the assembled prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for PromptRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptRole::System => write!(f, "system"),
            PromptRole::User => write!(f, "user"),
            PromptRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single message in the assembled prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: PromptRole,
    pub content: String,
}

impl PromptMessage {
    pub fn new(role: PromptRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Parameters for one completion call.
///
/// Serializes to the chat-completions wire body: `{model, messages,
/// temperature, max_tokens}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<PromptMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// Errors from completion backend operations.
///
/// The gateway treats every variant as the same user-facing failure class;
/// the distinction exists for server-side logs.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The HTTP request never produced a response (connect error, timeout).
    #[error("http request failed: {0}")]
    Transport(String),

    /// The provider answered with a non-success status.
    #[error("provider returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The provider answered 2xx but the body did not parse.
    #[error("failed to parse provider response: {0}")]
    ResponseShape(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_role_serde() {
        let json = serde_json::to_string(&PromptRole::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        let parsed: PromptRole = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(parsed, PromptRole::System);
    }

    #[test]
    fn test_prompt_role_display() {
        assert_eq!(PromptRole::User.to_string(), "user");
        assert_eq!(PromptRole::System.to_string(), "system");
    }

    #[test]
    fn test_completion_request_wire_shape() {
        let request = CompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![
                PromptMessage::new(PromptRole::System, "be helpful"),
                PromptMessage::new(PromptRole::User, "hi"),
            ],
            temperature: 0.6,
            max_tokens: 450,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["temperature"], 0.6);
        assert_eq!(json["max_tokens"], 450);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
    }

    #[test]
    fn test_llm_error_display_carries_status_and_body() {
        let err = LlmError::Api {
            status: 429,
            body: "slow down".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("429"));
        assert!(text.contains("slow down"));
    }
}
