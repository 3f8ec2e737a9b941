//! Client error types
//!
//! Every failure the panel can see while talking to the backend.

use thiserror::Error;

/// Errors returned by [`ActivityApi`](crate::api::ActivityApi) implementations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// No response was obtained (connection refused, DNS, CORS, aborted)
    #[error("Network error: {0}")]
    Transport(String),

    /// The backend answered with a non-success status
    #[error("Request rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    /// A response arrived but its body could not be read or decoded
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// The backend-supplied explanation, if the rejection carried one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// True when no usable response was obtained
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Decode(_))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;
