//! Conversation engine for EmoMate.
//!
//! Provides the session state store (ordered turn history, busy gating,
//! confirm-gated reset) and a Gemini chat adapter that translates the
//! conversation into Generative Language API requests:
//! - Linear turn history with append-only semantics between resets
//! - Single-flight sends guarded by a busy flag
//! - Generation-tagged tickets so replies for a cleared session are dropped
//! - Uniform fallback turn for any adapter failure

pub mod gemini;
pub mod session;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub use gemini::{GeminiClient, GeminiConfig};
pub use session::{SendOutcome, SendTicket, SessionSnapshot, SessionStore};

/// Shown in place of a model reply when a round-trip fails for any reason.
pub const FALLBACK_TEXT: &str = "I'm having a brief connection issue. \
Please check your internet or try refreshing the session.";

/// A remote chat backend: one request per call, no retry, all-or-nothing.
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Generate a reply to `user_message` given the prior conversation.
    ///
    /// `history` excludes the new message. Any failure (transport, remote
    /// error status, malformed or empty body) is an `Err`; partial text is
    /// never returned.
    async fn generate(&self, history: &[Turn], user_message: &str)
        -> Result<String, ChatError>;
}

/// One message in the conversation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
    /// Set when the turn is created, never mutated afterwards.
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Model,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Model,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("API error: {0}")]
    Api(String),
    #[error("rate limited")]
    RateLimited,
    #[error("parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_constructors_set_role_and_text() {
        let turn = Turn::user("hello");
        assert_eq!(turn.role, TurnRole::User);
        assert_eq!(turn.text, "hello");

        let turn = Turn::model("hi there");
        assert_eq!(turn.role, TurnRole::Model);
        assert_eq!(turn.text, "hi there");
    }

    #[test]
    fn turn_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TurnRole::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&TurnRole::Model).unwrap(), "\"model\"");
    }

    #[test]
    fn chat_error_display() {
        let err = ChatError::Config("GEMINI_API_KEY is not set".into());
        assert_eq!(
            err.to_string(),
            "configuration error: GEMINI_API_KEY is not set"
        );

        let err = ChatError::Network("connection refused".into());
        assert_eq!(err.to_string(), "network error: connection refused");

        let err = ChatError::Api("HTTP 500".into());
        assert_eq!(err.to_string(), "API error: HTTP 500");

        assert_eq!(ChatError::RateLimited.to_string(), "rate limited");

        let err = ChatError::Parse("no candidates".into());
        assert_eq!(err.to_string(), "parse error: no candidates");
    }
}
