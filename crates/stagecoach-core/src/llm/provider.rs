//! CompletionBackend trait definition.
//!
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).
//! Implementations live in stagecoach-infra (e.g., `OpenAiBackend`).

use stagecoach_types::llm::{CompletionRequest, LlmError};

/// Trait for chat-completion provider backends.
///
/// One call per chat turn, never retried. Returns the first completion's
/// text content; a completion with no content maps to an empty string so
/// the caller can substitute its fixed fallback reply.
pub trait CompletionBackend: Send + Sync {
    /// Human-readable backend name (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a completion request and return the reply text.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<String, LlmError>> + Send;
}
