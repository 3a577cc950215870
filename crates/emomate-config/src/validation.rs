//! Configuration validation.

use crate::schema::EmomateConfig;
use crate::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &EmomateConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if config.model.name.trim().is_empty() {
        errors.push("model.name must not be empty".to_string());
    }

    validate_range(
        &mut errors,
        "model.max_output_tokens",
        config.model.max_output_tokens,
        1,
        65536,
    );
    validate_range_f64(
        &mut errors,
        "model.temperature",
        config.model.temperature,
        0.0,
        2.0,
    );

    if config.logging.level.trim().is_empty() {
        errors.push("logging.level must not be empty".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Validation(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

fn validate_range_f64(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
