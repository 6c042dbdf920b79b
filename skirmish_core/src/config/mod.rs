//! Configuration for the encounter tunables

mod constants;

pub use constants::EncounterConfig;

use thiserror::Error;

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Configuration validation error: {0}")]
    ValidationError(String),
}

/// Parse an encounter config from a TOML string and validate it
pub fn parse_encounter_config(content: &str) -> Result<EncounterConfig, ConfigError> {
    let config: EncounterConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
