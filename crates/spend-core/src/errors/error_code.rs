//! Stable error code strings surfaced in JSON responses.

/// Every error enum implements this to give a machine-readable code.
pub trait SpendErrorCode {
    /// Returns the error code string (e.g., "LOAD_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const LOAD_ERROR: &str = "LOAD_ERROR";
pub const PREDICTION_ERROR: &str = "PREDICTION_ERROR";
pub const FIELD_ERROR: &str = "FIELD_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
