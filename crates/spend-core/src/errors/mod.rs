//! Error types. One enum per subsystem, folded into [`SpendError`].

mod config_error;
mod error_code;
mod field_error;
mod load_error;
mod prediction_error;
mod spend_error;

pub use config_error::ConfigError;
pub use error_code::SpendErrorCode;
pub use field_error::FieldError;
pub use load_error::LoadError;
pub use prediction_error::PredictionError;
pub use spend_error::{SpendError, SpendResult};
