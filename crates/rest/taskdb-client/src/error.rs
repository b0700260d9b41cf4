//! Error types for the task client

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

/// Errors produced while talking to the task server.
///
/// Callers in the view-model do not distinguish between variants; the split
/// exists for logging.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server responded with status {status}")]
    Status { status: u16 },

    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Failed to build HTTP client: {0}")]
    Build(String),
}

impl ClientError {
    /// Create a status error
    pub fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// HTTP status code, when the server answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
