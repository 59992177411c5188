//! BoxCompletionBackend -- object-safe dynamic dispatch wrapper for
//! CompletionBackend.
//!
//! 1. Define an object-safe `CompletionBackendDyn` trait with boxed futures
//! 2. Blanket-impl `CompletionBackendDyn` for all `T: CompletionBackend`
//! 3. `BoxCompletionBackend` wraps `Box<dyn CompletionBackendDyn>` and
//!    delegates

use std::future::Future;
use std::pin::Pin;

use stagecoach_types::llm::{CompletionRequest, LlmError};

use super::provider::CompletionBackend;

/// Object-safe version of [`CompletionBackend`] with boxed futures.
///
/// Exists solely to enable dynamic dispatch; a blanket implementation is
/// provided for all types implementing `CompletionBackend`.
pub trait CompletionBackendDyn: Send + Sync {
    fn name(&self) -> &str;

    fn complete_boxed<'a>(
        &'a self,
        request: &'a CompletionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, LlmError>> + Send + 'a>>;
}

impl<T: CompletionBackend> CompletionBackendDyn for T {
    fn name(&self) -> &str {
        CompletionBackend::name(self)
    }

    fn complete_boxed<'a>(
        &'a self,
        request: &'a CompletionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, LlmError>> + Send + 'a>> {
        Box::pin(self.complete(request))
    }
}

/// Type-erased completion backend.
///
/// `CompletionBackend` uses RPITIT and cannot be a trait object directly;
/// this wrapper provides equivalent methods behind dynamic dispatch so the
/// gateway service does not need a backend type parameter.
pub struct BoxCompletionBackend {
    inner: Box<dyn CompletionBackendDyn + Send + Sync>,
}

impl BoxCompletionBackend {
    /// Wrap a concrete backend in a type-erased box.
    pub fn new<T: CompletionBackend + 'static>(backend: T) -> Self {
        Self {
            inner: Box::new(backend),
        }
    }

    /// Human-readable backend name.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Send a completion request and return the reply text.
    pub async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.inner.complete_boxed(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl CompletionBackend for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
            Ok(request
                .messages
                .last()
                .map(|m| m.content.clone())
                .unwrap_or_default())
        }
    }

    #[tokio::test]
    async fn test_boxed_backend_delegates() {
        use stagecoach_types::llm::{PromptMessage, PromptRole};

        let boxed = BoxCompletionBackend::new(Echo);
        assert_eq!(boxed.name(), "echo");

        let request = CompletionRequest {
            model: "m".to_string(),
            messages: vec![PromptMessage::new(PromptRole::User, "ping")],
            temperature: 0.6,
            max_tokens: 450,
        };
        assert_eq!(boxed.complete(&request).await.unwrap(), "ping");
    }
}
