//! Chat-client contract: bounded rolling history and single-flight sends.

pub mod session;

pub use session::{ChatClient, GatewayTransport, HISTORY_LIMIT, SendOutcome};
