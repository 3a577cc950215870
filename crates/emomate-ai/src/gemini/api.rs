//! ChatClient trait implementation for GeminiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{ChatClient, ChatError, Turn};

use super::client::GeminiClient;

#[async_trait]
impl ChatClient for GeminiClient {
    async fn generate(
        &self,
        history: &[Turn],
        user_message: &str,
    ) -> Result<String, ChatError> {
        // Fail fast before any I/O; a missing key is reported once at
        // startup and every send afterwards lands here.
        if self.config.api_key.is_empty() {
            return Err(ChatError::Config("GEMINI_API_KEY is not set".into()));
        }

        let body = self.build_request_body(history, user_message);
        let url = self.api_url();

        debug!(model = %self.config.model, turns = history.len(), "Gemini API request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ChatError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ChatError::Api(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ChatError::Parse(e.to_string()))?;

        self.parse_response(json)
    }
}
