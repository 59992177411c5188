//! Wire types for the client/gateway chat contract.
//!
//! The gateway accepts one payload shape and answers with one payload shape,
//! success or failure, so the client never branches on schema. Parsing is
//! deliberately lenient: a body that is valid JSON but carries a missing or
//! mistyped `message` must reach validation, not die in the parser, because
//! the two cases produce different replies.

use serde::{Deserialize, Serialize};

/// One message in a conversation, tagged with its speaker role.
///
/// The role travels as a free string. Clients built from this crate only
/// ever produce `"user"` and `"assistant"`, but the gateway does not trust
/// the wire: during prompt assembly anything other than `"assistant"`
/// collapses to user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

impl ChatTurn {
    /// A turn spoken by the student.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// A turn spoken by the coach.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }

    /// Whether this turn claims to be from the assistant.
    pub fn is_assistant(&self) -> bool {
        self.role == "assistant"
    }
}

/// The request payload for one chat turn.
///
/// All fields are defaulted so any JSON object parses: an absent `message`
/// becomes `Value::Null` and is rejected by the gateway's own validation.
/// `history: null` and an absent `history` both mean "no prior turns".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatRequest {
    /// Project stage/section the student wants help with, if any.
    pub section: Option<String>,
    /// The student's question. Kept as a raw value until validated; must be
    /// a non-empty string to be accepted.
    pub message: serde_json::Value,
    /// Rolling conversation history, oldest first. Owned by the client; the
    /// gateway only ever sees the slice passed here.
    pub history: Option<Vec<ChatTurn>>,
}

impl ChatRequest {
    /// Build a well-formed request the way the chat client sends it.
    pub fn new(section: Option<String>, message: &str, history: Vec<ChatTurn>) -> Self {
        Self {
            section,
            message: serde_json::Value::String(message.to_string()),
            history: Some(history),
        }
    }
}

/// The single response shape, used for success and every failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

impl ChatReply {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}
