use super::error_code::{self, SpendErrorCode};

/// A submitted form value that cannot become a record field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("missing field: {field}")]
    Missing { field: &'static str },

    #[error("{field} must be a number, got {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must be a whole number, got {value:?}")]
    NotAnInteger { field: &'static str, value: String },

    #[error("{field} must be finite, got {value:?}")]
    NotFinite { field: &'static str, value: String },

    #[error("{field} must be one of [{allowed}], got {value:?}")]
    UnknownOption {
        field: &'static str,
        value: String,
        allowed: String,
    },
}

impl FieldError {
    /// Name of the field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::NotANumber { field, .. }
            | Self::NotAnInteger { field, .. }
            | Self::NotFinite { field, .. }
            | Self::UnknownOption { field, .. } => field,
        }
    }
}

impl SpendErrorCode for FieldError {
    fn error_code(&self) -> &'static str {
        error_code::FIELD_ERROR
    }
}
