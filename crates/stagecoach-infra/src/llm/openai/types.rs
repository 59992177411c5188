//! Response wire types for the chat-completions protocol, reduced to the
//! fields the gateway reads.
//!
//! Parsing is lenient: a response without choices or content is a valid
//! response with no reply text, not a parse failure. The caller substitutes
//! its fallback string for the missing text.

use serde::Deserialize;

/// Response body for `POST /chat/completions`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// The first completion's text content, if any.
    pub fn first_content(&self) -> Option<String> {
        self.choices.first().and_then(|c| c.message.content.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response_with_content() {
        let json = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "An API is..."}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 20}
        }"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.first_content().as_deref(), Some("An API is..."));
    }

    #[test]
    fn test_parse_response_without_choices() {
        let parsed: ChatCompletionResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.first_content().is_none());
    }

    #[test]
    fn test_parse_response_with_null_content() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.first_content().is_none());
    }

    #[test]
    fn test_parse_response_with_bare_choice() {
        let json = r#"{"choices":[{}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.first_content().is_none());
    }
}
