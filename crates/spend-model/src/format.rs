//! Artifact format selection.

use std::fmt;
use std::path::Path;

use spend_core::errors::LoadError;

/// On-disk model formats the loader can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    /// ONNX graph taking one `[1, 18]` f32 input.
    Onnx,
    /// JSON `{ intercept, coefficients[18], name? }`.
    Linear,
}

impl ArtifactFormat {
    /// Resolve the configured format name for `path`.
    ///
    /// `"auto"` picks by extension: `.onnx` or `.json`.
    pub fn resolve(configured: &str, path: &Path) -> Result<Self, LoadError> {
        match configured {
            "onnx" => Ok(Self::Onnx),
            "linear" => Ok(Self::Linear),
            "auto" => Self::from_extension(path),
            other => Err(LoadError::UnsupportedFormat {
                path: path.display().to_string(),
                format: other.to_string(),
            }),
        }
    }

    fn from_extension(path: &Path) -> Result<Self, LoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("onnx") => Ok(Self::Onnx),
            Some("json") => Ok(Self::Linear),
            other => Err(LoadError::UnsupportedFormat {
                path: path.display().to_string(),
                format: format!("extension {:?}", other.unwrap_or("")),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Onnx => "onnx",
            Self::Linear => "linear",
        }
    }
}

impl fmt::Display for ArtifactFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
