//! OpenAI-compatible completion backend.
//!
//! Speaks the `/chat/completions` protocol with bearer-token auth. Any
//! provider exposing the same protocol works via
//! [`client::OpenAiBackend::with_base_url`].

pub mod client;
pub mod types;

pub use client::OpenAiBackend;
