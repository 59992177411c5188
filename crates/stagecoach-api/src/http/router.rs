//! Axum router configuration with middleware.
//!
//! One chat route plus a health check. Middleware: permissive CORS (the
//! widget runs in a browser), request tracing, and a panic catcher that
//! keeps the `{reply}` contract even for bugs.

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use stagecoach_types::chat::ChatReply;

use crate::http::error::{self, REPLY_INTERNAL};
use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/chat",
            post(handlers::chat::chat).fallback(error::method_not_allowed),
        )
        .route("/health", get(health_check))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// Convert a handler panic into the fixed `{reply}` shape.
fn handle_panic(_err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    tracing::error!("chat handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(ChatReply::new(REPLY_INTERNAL)),
    )
        .into_response()
}

/// GET /health - Simple health check endpoint.
async fn health_check() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
