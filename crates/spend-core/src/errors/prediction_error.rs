use super::error_code::{self, SpendErrorCode};

/// Per-request predictor failures. The process keeps serving.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("model produced no output")]
    EmptyOutput,

    #[error("model produced a non-finite value: {value}")]
    NonFiniteOutput { value: f64 },
}

impl SpendErrorCode for PredictionError {
    fn error_code(&self) -> &'static str {
        error_code::PREDICTION_ERROR
    }
}
