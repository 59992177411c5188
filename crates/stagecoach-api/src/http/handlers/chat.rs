//! The chat endpoint.
//!
//! POST /api/chat
//!
//! The body is read raw and parsed explicitly so a malformed body and a
//! missing/invalid `message` produce distinct replies, and so the parser's
//! own error text never reaches the client.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;

use stagecoach_types::chat::{ChatReply, ChatRequest};

use crate::http::error::AppError;
use crate::state::AppState;

/// POST /api/chat -- one stateless chat turn.
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatReply>, AppError> {
    // An empty body is treated as an empty object, not a parse failure;
    // it then fails message validation like any other message-less body.
    let request: ChatRequest = if body.is_empty() {
        ChatRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(error = %e, "rejecting unparseable request body");
            AppError::InvalidBody
        })?
    };

    let reply = state.coach.handle(&request).await?;
    Ok(Json(ChatReply::new(reply)))
}
