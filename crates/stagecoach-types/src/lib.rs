//! Shared domain types for Stagecoach.
//!
//! Wire payloads exchanged between the chat client and the gateway, the
//! message shapes sent to the completion provider, and the error enums used
//! across the workspace. Zero infrastructure dependencies -- only serde,
//! serde_json, and thiserror.

pub mod chat;
pub mod error;
pub mod llm;
