//! Client-side conversation state and the send state machine.
//!
//! The client owns the whole conversation: the gateway is stateless and
//! only ever sees the history slice included in each request. Two fixed
//! strings are client-owned and never come from the gateway: the transport
//! apology and the missing-reply fallback.

use stagecoach_types::chat::{ChatReply, ChatRequest, ChatTurn};
use stagecoach_types::error::TransportError;

/// Maximum number of turns retained client-side; older turns are dropped
/// FIFO.
pub const HISTORY_LIMIT: usize = 10;

/// Shown when the gateway cannot be reached or answers non-2xx.
pub const TRANSPORT_APOLOGY: &str =
    "Sorry, something went wrong talking to the study coach. Check your connection and try again.";

/// Shown when the gateway answers 200 but the reply text is empty.
pub const MISSING_REPLY_FALLBACK: &str =
    "I'm not sure what happened. Try asking again in a different way.";

/// Transport used to reach the gateway. Implemented over HTTP in
/// stagecoach-infra; tests script it directly.
pub trait GatewayTransport: Send + Sync {
    fn send(
        &self,
        request: &ChatRequest,
    ) -> impl std::future::Future<Output = Result<ChatReply, TransportError>> + Send;
}

/// Outcome of a [`ChatClient::send`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// The coach replied; the text was appended to history.
    Reply(String),
    /// Input was empty or whitespace-only; nothing was sent.
    RejectedEmpty,
    /// A previous send is still outstanding.
    Busy,
    /// The gateway could not be reached; carries the fixed apology text.
    Failed(String),
}

/// Drives the gateway contract for one user: owns the bounded history and
/// allows a single in-flight request at a time.
pub struct ChatClient<T> {
    transport: T,
    section: Option<String>,
    history: Vec<ChatTurn>,
    waiting: bool,
}

impl<T: GatewayTransport> ChatClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            section: None,
            history: Vec::new(),
            waiting: false,
        }
    }

    /// Set or clear the section tag sent with subsequent messages.
    pub fn set_section(&mut self, section: Option<String>) {
        self.section = section;
    }

    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    /// The retained conversation, oldest first.
    pub fn history(&self) -> &[ChatTurn] {
        &self.history
    }

    /// Whether a send is currently outstanding.
    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    #[cfg(test)]
    pub(crate) fn set_waiting(&mut self, waiting: bool) {
        self.waiting = waiting;
    }

    /// Send one user message through the gateway.
    ///
    /// The wire request carries the history as it stood before this turn;
    /// the user turn is appended afterwards, and the assistant turn only on
    /// success. The waiting flag is cleared on every exit path.
    pub async fn send(&mut self, text: &str) -> SendOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SendOutcome::RejectedEmpty;
        }
        if self.waiting {
            return SendOutcome::Busy;
        }
        self.waiting = true;

        let request = ChatRequest::new(self.section.clone(), text, self.history.clone());
        self.push_turn(ChatTurn::user(text));

        let outcome = match self.transport.send(&request).await {
            Ok(ChatReply { reply }) => {
                let text = if reply.is_empty() {
                    MISSING_REPLY_FALLBACK.to_string()
                } else {
                    reply
                };
                self.push_turn(ChatTurn::assistant(text.clone()));
                SendOutcome::Reply(text)
            }
            Err(e) => {
                tracing::debug!(error = %e, "gateway send failed");
                SendOutcome::Failed(TRANSPORT_APOLOGY.to_string())
            }
        };

        self.waiting = false;
        outcome
    }

    fn push_turn(&mut self, turn: ChatTurn) {
        self.history.push(turn);
        if self.history.len() > HISTORY_LIMIT {
            let excess = self.history.len() - HISTORY_LIMIT;
            self.history.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    /// Transport that records requests and replays a queue of results.
    #[derive(Default)]
    struct Scripted {
        results: Mutex<VecDeque<Result<ChatReply, TransportError>>>,
        requests: Mutex<Vec<ChatRequest>>,
    }

    impl Scripted {
        fn push_ok(&self, reply: &str) {
            self.results
                .lock()
                .unwrap()
                .push_back(Ok(ChatReply::new(reply)));
        }

        fn push_err(&self) {
            self.results
                .lock()
                .unwrap()
                .push_back(Err(TransportError::Status(500)));
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    impl GatewayTransport for &'static Scripted {
        async fn send(&self, request: &ChatRequest) -> Result<ChatReply, TransportError> {
            self.requests.lock().unwrap().push(request.clone());
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .expect("no scripted result left")
        }
    }

    fn client() -> (ChatClient<&'static Scripted>, &'static Scripted) {
        let transport: &'static Scripted = Box::leak(Box::new(Scripted::default()));
        (ChatClient::new(transport), transport)
    }

    #[tokio::test]
    async fn test_empty_input_rejected_locally() {
        let (mut client, transport) = client();

        assert_eq!(client.send("   ").await, SendOutcome::RejectedEmpty);
        assert_eq!(transport.request_count(), 0);
        assert!(client.history().is_empty());
    }

    #[tokio::test]
    async fn test_busy_rejected_without_network_call() {
        let (mut client, transport) = client();
        client.set_waiting(true);

        assert_eq!(client.send("hello").await, SendOutcome::Busy);
        assert_eq!(transport.request_count(), 0);
        assert!(client.history().is_empty());
    }

    #[tokio::test]
    async fn test_first_send_carries_empty_history() {
        let (mut client, transport) = client();
        transport.push_ok("An API is...");

        let outcome = client.send("What is an API?").await;
        assert_eq!(outcome, SendOutcome::Reply("An API is...".to_string()));

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests[0].history, Some(Vec::new()));
        assert_eq!(requests[0].message.as_str(), Some("What is an API?"));

        assert_eq!(client.history().len(), 2);
        assert_eq!(client.history()[0], ChatTurn::user("What is an API?"));
        assert_eq!(client.history()[1], ChatTurn::assistant("An API is..."));
        assert!(!client.is_waiting());
    }

    #[tokio::test]
    async fn test_wire_history_excludes_in_flight_turn() {
        let (mut client, transport) = client();
        transport.push_ok("a1");
        transport.push_ok("a2");

        client.send("q1").await;
        client.send("q2").await;

        let requests = transport.requests.lock().unwrap();
        let second = requests[1].history.as_ref().unwrap();
        assert_eq!(second.len(), 2);
        assert_eq!(second[0], ChatTurn::user("q1"));
        assert_eq!(second[1], ChatTurn::assistant("a1"));
    }

    #[tokio::test]
    async fn test_history_truncates_to_most_recent_ten() {
        let (mut client, transport) = client();

        // Six full exchanges leave 12 turns; a seventh must cap at 10.
        for i in 0..7 {
            transport.push_ok(&format!("a{i}"));
            client.send(&format!("q{i}")).await;
        }

        assert_eq!(client.history().len(), HISTORY_LIMIT);
        assert_eq!(client.history()[0], ChatTurn::user("q2"));
        assert_eq!(client.history()[8], ChatTurn::user("q6"));
        assert_eq!(client.history()[9], ChatTurn::assistant("a6"));
    }

    #[tokio::test]
    async fn test_transport_failure_appends_nothing_further() {
        let (mut client, transport) = client();
        transport.push_err();

        let outcome = client.send("hello").await;
        assert_eq!(outcome, SendOutcome::Failed(TRANSPORT_APOLOGY.to_string()));

        // The user turn stays; no assistant turn is appended.
        assert_eq!(client.history().len(), 1);
        assert_eq!(client.history()[0], ChatTurn::user("hello"));
        assert!(!client.is_waiting());
    }

    #[tokio::test]
    async fn test_empty_reply_substituted() {
        let (mut client, transport) = client();
        transport.push_ok("");

        let outcome = client.send("hello").await;
        assert_eq!(
            outcome,
            SendOutcome::Reply(MISSING_REPLY_FALLBACK.to_string())
        );
        assert_eq!(
            client.history()[1],
            ChatTurn::assistant(MISSING_REPLY_FALLBACK)
        );
    }

    #[tokio::test]
    async fn test_input_is_trimmed_before_sending() {
        let (mut client, transport) = client();
        transport.push_ok("ok");

        client.send("  hello  ").await;

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests[0].message.as_str(), Some("hello"));
        assert_eq!(client.history()[0], ChatTurn::user("hello"));
    }

    #[tokio::test]
    async fn test_section_travels_with_request() {
        let (mut client, transport) = client();
        client.set_section(Some("stage3".to_string()));
        transport.push_ok("ok");

        client.send("help").await;

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests[0].section.as_deref(), Some("stage3"));
    }
}
