//! HTTP layer for the Stagecoach gateway.
//!
//! A single axum endpoint at `/api/chat` with permissive CORS for the
//! browser widget, request tracing, and a panic safety net that still
//! produces the `{reply}` shape.

pub mod error;
pub mod handlers;
pub mod router;
