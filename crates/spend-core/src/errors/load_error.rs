use super::error_code::{self, SpendErrorCode};

/// Model artifact loading errors. Always fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("model artifact not found: {path}")]
    ModelNotFound { path: String },

    #[error("model artifact unreadable: {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("invalid model artifact {path}: {reason}")]
    InvalidArtifact { path: String, reason: String },

    #[error("unsupported model format for {path}: {format}")]
    UnsupportedFormat { path: String, format: String },
}

impl SpendErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        error_code::LOAD_ERROR
    }
}
