use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to bind, e.g. "127.0.0.1:8501".
    pub bind: String,
    /// Per-connection read timeout in milliseconds.
    pub read_timeout_ms: u64,
    /// Largest accepted request body.
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: defaults::DEFAULT_BIND_ADDR.to_string(),
            read_timeout_ms: defaults::DEFAULT_READ_TIMEOUT_MS,
            max_body_bytes: defaults::DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.max_body_bytes".into(),
                message: "must be greater than zero".into(),
            });
        }
        if self.bind.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::InvalidValue {
                field: "server.bind".into(),
                message: format!("not a socket address: {:?}", self.bind),
            });
        }
        Ok(())
    }
}
