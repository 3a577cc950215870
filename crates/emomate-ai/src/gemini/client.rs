//! Gemini client struct, request building, and response parsing.

use crate::{ChatError, Turn, TurnRole};

use super::config::GeminiConfig;

pub(crate) const GEMINI_API_BASE: &str =
    "https://generativelanguage.googleapis.com/v1beta/models";

/// Empathy persona instruction, sent as a simulated first user turn.
/// The mapped history format has no first-class system prompt, so the
/// persona rides ahead of the real conversation as a fixed exchange that
/// is never shown to the user.
pub(crate) const PERSONA_INSTRUCTION: &str = "\
You are EmoMate, an empathetic, emotionally intelligent AI assistant. \
Your goal is to identify the user's emotions and respond with validation and support.
1. Identify the emotion.
2. Respond calmly and kindly.
3. Offer a brief coping strategy if needed.
4. Keep responses under 150 words.";

/// Fixed acknowledgment paired with the persona instruction.
pub(crate) const PERSONA_ACK: &str = "Understood. I am EmoMate, your support assistant.";

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/{}:generateContent", GEMINI_API_BASE, self.config.model)
    }

    /// Build the JSON request body: the persona pair, then the prior turns
    /// in order, then the new user message as the final entry.
    pub(crate) fn build_request_body(
        &self,
        history: &[Turn],
        user_message: &str,
    ) -> serde_json::Value {
        let mut contents = vec![
            content("user", PERSONA_INSTRUCTION),
            content("model", PERSONA_ACK),
        ];

        for turn in history {
            let role = match turn.role {
                TurnRole::User => "user",
                // Anything the user did not author speaks as the model.
                TurnRole::Model => "model",
            };
            contents.push(content(role, &turn.text));
        }

        contents.push(content("user", user_message));

        serde_json::json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_output_tokens,
                "temperature": self.config.temperature,
            }
        })
    }

    /// Extract the reply text from a Gemini response.
    ///
    /// The call is all-or-nothing: missing candidates, missing parts, or a
    /// blank reply are parse errors, never partial output.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<String, ChatError> {
        let candidates = json["candidates"]
            .as_array()
            .ok_or_else(|| ChatError::Parse("no candidates in response".to_string()))?;

        let first = candidates
            .first()
            .ok_or_else(|| ChatError::Parse("empty candidates".to_string()))?;

        let parts = first["content"]["parts"]
            .as_array()
            .ok_or_else(|| ChatError::Parse("candidate has no content parts".to_string()))?;

        let mut text = String::new();
        for part in parts {
            if let Some(t) = part["text"].as_str() {
                text.push_str(t);
            }
        }

        if text.trim().is_empty() {
            return Err(ChatError::Parse("empty response text".to_string()));
        }

        Ok(text)
    }
}

fn content(role: &str, text: &str) -> serde_json::Value {
    serde_json::json!({
        "role": role,
        "parts": [{ "text": text }]
    })
}
