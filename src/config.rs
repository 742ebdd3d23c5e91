//! Configuration management
//!
//! Loads settings from an optional credgate.toml with environment
//! overrides. Every setting has a default, so the app runs without any
//! configuration present.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Storage path used when no configuration overrides it.
pub const DEFAULT_STORAGE_PATH: &str = "data/registered_users.json";

/// Application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Path of the JSON file holding registered users
    /// Environment: CREDGATE_STORAGE_PATH
    pub storage_path: String,
}

impl AppConfig {
    /// Load configuration from credgate.toml (if present) with
    /// environment overrides on top of the built-in defaults.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("storage_path", DEFAULT_STORAGE_PATH)?
            .add_source(File::with_name("credgate").required(false))
            .add_source(Environment::with_prefix("CREDGATE"))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the storage path as PathBuf
    pub fn storage_path_buf(&self) -> PathBuf {
        PathBuf::from(&self.storage_path)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.storage_path.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "storage_path cannot be empty".into(),
            ));
        }

        Ok(())
    }
}
