//! Conversation session management.
//!
//! A `SessionStore` holds the ordered turn history plus the transient UI
//! state (draft input, busy flag) for one conversation lifetime, and the
//! `send` driver runs a single round-trip through a `ChatClient`.

mod chat;
mod store;

pub use chat::{send, SendOutcome};
pub use store::{SendTicket, SessionSnapshot, SessionStore};
