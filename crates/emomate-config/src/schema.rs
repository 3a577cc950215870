//! Configuration schema types for EmoMate.
//!
//! All structs use `serde(default)` so partial configs work correctly;
//! missing fields are filled with sensible defaults. The API key is
//! deliberately absent here: secrets come from the environment, never
//! from the config file.

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmomateConfig {
    pub model: ModelConfig,
    pub logging: LoggingConfig,
}

/// Remote model selection and generation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Gemini model name, e.g. "gemini-2.5-flash".
    pub name: String,
    /// Reply length cap (valid range: 1-65536).
    pub max_output_tokens: u32,
    /// Sampling temperature (valid range: 0.0-2.0).
    pub temperature: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: "gemini-2.5-flash".into(),
            max_output_tokens: 1024,
            temperature: 0.7,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing directive, overridable by `--log-level` and RUST_LOG.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "emomate=info".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_shipped_model() {
        let config = EmomateConfig::default();
        assert_eq!(config.model.name, "gemini-2.5-flash");
        assert_eq!(config.model.max_output_tokens, 1024);
        assert_eq!(config.model.temperature, 0.7);
        assert_eq!(config.logging.level, "emomate=info");
    }

    #[test]
    fn partial_toml_fills_missing_fields_with_defaults() {
        let config: EmomateConfig = toml::from_str(
            r#"
            [model]
            name = "gemini-2.0-flash"
            "#,
        )
        .unwrap();
        assert_eq!(config.model.name, "gemini-2.0-flash");
        assert_eq!(config.model.max_output_tokens, 1024);
        assert_eq!(config.logging.level, "emomate=info");
    }

    #[test]
    fn empty_toml_is_the_default_config() {
        let config: EmomateConfig = toml::from_str("").unwrap();
        assert_eq!(config.model.name, EmomateConfig::default().model.name);
    }
}
