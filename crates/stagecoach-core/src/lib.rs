//! Business logic for Stagecoach.
//!
//! `coach` holds the gateway's single operation: validate a chat turn,
//! assemble the prompt, call the completion backend once, shape the reply.
//! `client` implements the chat-client contract: bounded rolling history
//! and single-flight submission. `llm` defines the `CompletionBackend`
//! trait and its object-safe boxed wrapper.

pub mod client;
pub mod coach;
pub mod llm;
