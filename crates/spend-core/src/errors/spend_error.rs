use super::error_code::{self, SpendErrorCode};
use super::{ConfigError, FieldError, LoadError, PredictionError};

/// Top-level error for the spend forecasting service.
#[derive(Debug, thiserror::Error)]
pub enum SpendError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Prediction(#[from] PredictionError),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpendResult<T> = Result<T, SpendError>;

impl SpendErrorCode for SpendError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Load(e) => e.error_code(),
            Self::Prediction(e) => e.error_code(),
            Self::Field(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Io(_) => error_code::IO_ERROR,
        }
    }
}
