//! EmoMate configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//! The remote API key is never part of the file; it is read from the
//! `GEMINI_API_KEY` environment variable by the application.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{EmomateConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{default_config_path, load_from_path};

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    Parse(String),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a commented
/// default if none exists, and validates the result.
pub fn load_config() -> Result<EmomateConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
