//! Session state store: ordered turns, draft input, and the busy gate.

use tracing::debug;

use crate::Turn;

/// Ticket issued by [`SessionStore::begin_send`].
///
/// Carries the conversation as it stood before the new user turn was
/// appended (the remote API wants the history and the new message
/// separately) plus the generation it was issued under, so a reply that
/// lands after a reset can be recognized and discarded.
#[derive(Debug)]
pub struct SendTicket {
    pub(crate) generation: u64,
    /// Prior turns, excluding the new user message.
    pub history: Vec<Turn>,
    /// The user message text being sent.
    pub text: String,
}

/// Immutable view of the session for the render layer.
///
/// Rendering is a pure function of this snapshot; nothing else about the
/// store is observable from the outside.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub turns: Vec<Turn>,
    pub busy: bool,
    pub draft: String,
}

/// State for one conversation lifetime.
///
/// `turns` is append-only between resets: user turns enter via
/// [`begin_send`](Self::begin_send), model turns via
/// [`complete`](Self::complete), and the only removal is a full clear.
/// The busy flag admits at most one outstanding round-trip at a time.
#[derive(Debug, Default)]
pub struct SessionStore {
    turns: Vec<Turn>,
    draft: String,
    busy: bool,
    generation: u64,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full conversation history, oldest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Whether a remote call is outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Gate and start one round-trip.
    ///
    /// Returns `None` without touching any state when a call is already
    /// outstanding or the draft is empty/whitespace-only. Otherwise the
    /// draft becomes a new user turn, the busy flag is raised, and the
    /// caller gets a ticket holding the pre-send history and the message
    /// text to pass to the adapter.
    pub fn begin_send(&mut self) -> Option<SendTicket> {
        if self.busy || self.draft.trim().is_empty() {
            return None;
        }

        let text = std::mem::take(&mut self.draft);
        let ticket = SendTicket {
            generation: self.generation,
            history: self.turns.clone(),
            text: text.clone(),
        };
        self.turns.push(Turn::user(text));
        self.busy = true;
        Some(ticket)
    }

    /// Finish the round-trip started by `ticket`, appending one model turn
    /// (the reply or the fallback text) and clearing the busy flag.
    ///
    /// A stale ticket means the session was reset while the call was in
    /// flight; the reply is discarded and the store is left untouched.
    /// Returns whether the turn was applied.
    pub fn complete(&mut self, ticket: SendTicket, reply: impl Into<String>) -> bool {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                current = self.generation,
                "discarding reply for a cleared session"
            );
            return false;
        }

        self.turns.push(Turn::model(reply));
        self.busy = false;
        true
    }

    /// Clear the session, starting a new generation.
    ///
    /// An empty session clears silently; a non-empty one asks `confirm`
    /// first and is left untouched on decline. Clearing wipes the turns,
    /// the draft, and the busy flag in one step. Returns whether the
    /// session was cleared.
    pub fn reset_with<F: FnOnce() -> bool>(&mut self, confirm: F) -> bool {
        if !self.turns.is_empty() && !confirm() {
            return false;
        }

        debug!(turns = self.turns.len(), "session cleared");
        self.turns.clear();
        self.draft.clear();
        self.busy = false;
        self.generation += 1;
        true
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            turns: self.turns.clone(),
            busy: self.busy,
            draft: self.draft.clone(),
        }
    }
}
