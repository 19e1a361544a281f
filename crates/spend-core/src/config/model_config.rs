use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Model artifact configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the serialized model, relative to the working directory.
    pub path: String,
    /// Artifact format: "auto", "onnx", "linear".
    pub format: String,
    /// ONNX Runtime intra-op threads.
    pub intra_threads: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: defaults::DEFAULT_MODEL_PATH.to_string(),
            format: defaults::DEFAULT_MODEL_FORMAT.to_string(),
            intra_threads: defaults::DEFAULT_INTRA_THREADS,
        }
    }
}

impl ModelConfig {
    pub const FORMATS: [&'static str; 3] = ["auto", "onnx", "linear"];

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !Self::FORMATS.contains(&self.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "model.format".into(),
                message: format!(
                    "expected one of {}, got {:?}",
                    Self::FORMATS.join(", "),
                    self.format
                ),
            });
        }
        if self.intra_threads == 0 {
            return Err(ConfigError::InvalidValue {
                field: "model.intra_threads".into(),
                message: "must be at least 1".into(),
            });
        }
        if self.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "model.path".into(),
                message: "must not be empty".into(),
            });
        }
        Ok(())
    }
}
