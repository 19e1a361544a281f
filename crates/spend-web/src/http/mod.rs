//! Hand-rolled HTTP/1.1 plumbing for a single-page service.

mod request;
mod response;
pub mod urlencoded;

pub use request::{read_request, Request};
pub use response::{reason_phrase, Response};

/// Request-level failures detected before routing.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("body of {size} bytes exceeds the {limit} byte limit")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("connection error: {0}")]
    Io(#[from] std::io::Error),
}

impl HttpError {
    pub fn status(&self) -> u16 {
        match self {
            Self::BadRequest(_) | Self::Io(_) => 400,
            Self::PayloadTooLarge { .. } => 413,
        }
    }

    pub fn into_response(self) -> Response {
        Response::text(self.status(), self.to_string())
    }
}
