//! Application state for the HTTP layer.
//!
//! The coach service is the gateway's only dependency: there is no
//! database, no session store, nothing held across requests.

use std::sync::Arc;

use stagecoach_core::coach::CoachService;
use stagecoach_core::llm::BoxCompletionBackend;
use stagecoach_infra::llm::openai::OpenAiBackend;
use stagecoach_infra::secret;

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub coach: Arc<CoachService>,
}

impl AppState {
    /// Build state from the process environment.
    ///
    /// A missing credential leaves the service unconfigured rather than
    /// failing startup; every chat request then answers with the fixed
    /// configuration-error reply.
    pub fn init() -> Self {
        let backend = secret::provider_api_key()
            .map(|key| BoxCompletionBackend::new(OpenAiBackend::new(key)));

        Self {
            coach: Arc::new(CoachService::new(backend)),
        }
    }

    /// State wrapping an explicit service.
    #[cfg(test)]
    pub fn with_coach(coach: CoachService) -> Self {
        Self {
            coach: Arc::new(coach),
        }
    }
}
