//! Infrastructure implementations for Stagecoach.
//!
//! The reqwest-backed completion backend used by the gateway, the HTTP
//! transport used by the chat client, and provider credential lookup from
//! the process environment.

pub mod gateway;
pub mod llm;
pub mod secret;
