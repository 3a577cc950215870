//! Google Gemini chat adapter.
//!
//! Implements the `ChatClient` trait for Gemini models via the
//! Generative Language API.

mod api;
mod client;
mod config;

pub use client::GeminiClient;
pub use config::GeminiConfig;
