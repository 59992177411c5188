//! Failure-to-reply mapping.
//!
//! Every failure collapses to the single `{reply}` response shape with an
//! appropriate status code. Upstream detail (parser errors, provider
//! status and body) stays in the server logs and never reaches the client.

use axum::Json;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use stagecoach_types::chat::ChatReply;
use stagecoach_types::error::CoachError;

/// Reply for non-POST requests to the chat endpoint.
pub const REPLY_METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// Reply when the request body is not valid JSON.
pub const REPLY_INVALID_BODY: &str = "Invalid JSON in request body.";

/// Reply when `message` is missing, not a string, or empty.
pub const REPLY_INVALID_MESSAGE: &str = "Please send a valid message.";

/// Reply when the provider credential is not configured.
pub const REPLY_NOT_CONFIGURED: &str = "Server not configured correctly.";

/// Reply when the completion provider call fails.
pub const REPLY_PROVIDER_FAILURE: &str =
    "The study coach had trouble talking to the language model. Please try again later.";

/// Reply produced by the panic safety net.
pub const REPLY_INTERNAL: &str = "The study coach hit an unexpected error. Please try again.";

/// Application-level error that maps to an HTTP `{reply}` response.
#[derive(Debug)]
pub enum AppError {
    /// Request body was not parseable JSON.
    InvalidBody,
    /// Gateway-side failure from the coach service.
    Coach(CoachError),
}

impl From<CoachError> for AppError {
    fn from(e: CoachError) -> Self {
        AppError::Coach(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, reply) = match self {
            AppError::InvalidBody => (StatusCode::BAD_REQUEST, REPLY_INVALID_BODY),
            AppError::Coach(CoachError::InvalidMessage) => {
                (StatusCode::BAD_REQUEST, REPLY_INVALID_MESSAGE)
            }
            AppError::Coach(CoachError::NotConfigured) => {
                (StatusCode::INTERNAL_SERVER_ERROR, REPLY_NOT_CONFIGURED)
            }
            AppError::Coach(CoachError::Provider(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, REPLY_PROVIDER_FAILURE)
            }
        };

        (status, Json(ChatReply::new(reply))).into_response()
    }
}

/// Fallback for unsupported methods on the chat endpoint. Names the one
/// accepted method explicitly rather than relying on framework defaults,
/// since the reply body must still carry the `{reply}` shape.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        Json(ChatReply::new(REPLY_METHOD_NOT_ALLOWED)),
    )
        .into_response()
}
