//! The send driver: one store round-trip through a `ChatClient`.

use tracing::warn;

use crate::{ChatClient, FALLBACK_TEXT};

use super::store::SessionStore;

/// What happened to one send attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// The draft was blank or a call was already in flight; nothing changed.
    Rejected,
    /// The model replied and its turn was appended.
    Replied,
    /// The remote call failed; the fixed fallback turn was appended instead.
    Fallback,
    /// The session was reset while the call was in flight; reply discarded.
    Stale,
}

/// Run one round-trip: gate the send, call the remote model, append the
/// reply. Adapter failures never reach the caller as errors — they become
/// the fallback turn, and the busy flag is cleared on every path.
pub async fn send(store: &mut SessionStore, client: &dyn ChatClient) -> SendOutcome {
    let Some(ticket) = store.begin_send() else {
        return SendOutcome::Rejected;
    };

    match client.generate(&ticket.history, &ticket.text).await {
        Ok(reply) => {
            if store.complete(ticket, reply) {
                SendOutcome::Replied
            } else {
                SendOutcome::Stale
            }
        }
        Err(e) => {
            warn!("chat round-trip failed: {e}");
            if store.complete(ticket, FALLBACK_TEXT) {
                SendOutcome::Fallback
            } else {
                SendOutcome::Stale
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChatError, Turn, TurnRole};
    use async_trait::async_trait;

    /// Test double that replies with a fixed string or a fixed error.
    struct CannedClient {
        reply: Result<String, fn() -> ChatError>,
    }

    impl CannedClient {
        fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
            }
        }

        fn failing(err: fn() -> ChatError) -> Self {
            Self { reply: Err(err) }
        }
    }

    #[async_trait]
    impl ChatClient for CannedClient {
        async fn generate(
            &self,
            _history: &[Turn],
            _user_message: &str,
        ) -> Result<String, ChatError> {
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    #[tokio::test]
    async fn successful_send_records_both_turns() {
        let client = CannedClient::replying("Hi there");
        let mut store = SessionStore::new();
        store.set_draft("Hello");

        assert_eq!(send(&mut store, &client).await, SendOutcome::Replied);
        assert!(!store.is_busy());
        assert_eq!(store.turn_count(), 2);
        assert_eq!(store.turns()[0].role, TurnRole::User);
        assert_eq!(store.turns()[0].text, "Hello");
        assert_eq!(store.turns()[1].role, TurnRole::Model);
        assert_eq!(store.turns()[1].text, "Hi there");
    }

    #[tokio::test]
    async fn failed_send_records_the_fallback_turn() {
        let client = CannedClient::failing(|| ChatError::Network("connection refused".into()));
        let mut store = SessionStore::new();
        store.set_draft("Hello");

        assert_eq!(send(&mut store, &client).await, SendOutcome::Fallback);
        assert!(!store.is_busy());
        assert_eq!(store.turn_count(), 2);
        assert_eq!(store.turns()[1].role, TurnRole::Model);
        assert_eq!(store.turns()[1].text, FALLBACK_TEXT);
    }

    #[tokio::test]
    async fn missing_key_takes_the_fallback_path_without_crashing() {
        let client = CannedClient::failing(|| ChatError::Config("GEMINI_API_KEY is not set".into()));
        let mut store = SessionStore::new();
        store.set_draft("Hello");

        assert_eq!(send(&mut store, &client).await, SendOutcome::Fallback);
        assert_eq!(store.turns()[1].text, FALLBACK_TEXT);
    }

    #[tokio::test]
    async fn blank_draft_is_rejected_without_a_call() {
        let client = CannedClient::replying("should never be seen");
        let mut store = SessionStore::new();
        store.set_draft("   ");

        assert_eq!(send(&mut store, &client).await, SendOutcome::Rejected);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn second_send_while_first_is_outstanding_is_dropped() {
        let client = CannedClient::replying("first reply");
        let mut store = SessionStore::new();
        store.set_draft("first");

        // Simulate the window where the first call is still in flight.
        let outstanding = store.begin_send().unwrap();
        store.set_draft("second");
        assert_eq!(send(&mut store, &client).await, SendOutcome::Rejected);
        assert_eq!(store.turn_count(), 1);

        // The first round-trip resolves normally afterwards.
        assert!(store.complete(outstanding, "first reply"));
        assert_eq!(store.turn_count(), 2);
    }

    #[tokio::test]
    async fn failures_do_not_disturb_earlier_history() {
        let mut store = SessionStore::new();

        let ok = CannedClient::replying("Hi there");
        store.set_draft("Hello");
        send(&mut store, &ok).await;

        let bad = CannedClient::failing(|| ChatError::Api("HTTP 500: boom".into()));
        store.set_draft("How are you?");
        send(&mut store, &bad).await;

        assert_eq!(store.turn_count(), 4);
        assert_eq!(store.turns()[0].text, "Hello");
        assert_eq!(store.turns()[1].text, "Hi there");
        assert_eq!(store.turns()[2].text, "How are you?");
        assert_eq!(store.turns()[3].text, FALLBACK_TEXT);
    }
}
