//! Postal lookup error types.

use thiserror::Error;

/// Result type for postal lookups.
pub type Result<T> = std::result::Result<T, LookupError>;

/// Postal lookup errors.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Input does not contain exactly eight digits.
    #[error("Invalid postal code: {0:?}")]
    InvalidCode(String),

    /// The service does not know the code.
    #[error("Postal code not found: {0}")]
    NotFound(String),

    /// Invalid service URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Service answered with a non-2xx status.
    #[error("Lookup failed with status {0}")]
    Status(u16),

    /// Response body could not be decoded.
    #[error("JSON error: {0}")]
    Json(String),

    /// Underlying HTTP client error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl LookupError {
    /// Check if the failure means the code simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<serde_json::Error> for LookupError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
