//! Service configuration, loaded from an optional TOML file.

pub mod defaults;
mod model_config;
mod observability_config;
mod server_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use model_config::ModelConfig;
pub use observability_config::ObservabilityConfig;
pub use server_config::ServerConfig;

/// Root configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpendConfig {
    pub model: ModelConfig,
    pub server: ServerConfig,
    pub observability: ObservabilityConfig,
}

impl SpendConfig {
    /// Parse and validate a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Self::parse(toml_str, "<inline>")
    }

    /// Load from `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let display = path.display().to_string();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Unreadable {
            path: display.clone(),
            reason: e.to_string(),
        })?;
        Self::parse(&contents, &display)
    }

    fn parse(toml_str: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.model.validate()?;
        self.server.validate()
    }
}
