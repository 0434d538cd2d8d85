//! Error types for webhook delivery

use thiserror::Error;

/// Errors that can occur while delivering a submission
#[derive(Error, Debug)]
pub enum WebhookError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Payload serialization failed
    #[error("Payload error: {0}")]
    PayloadError(String),

    /// Configuration error (e.g. no endpoint URL)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Endpoint answered with a non-2xx status
    #[error("Submission failed with status {status}")]
    Status { status: u16, body: String },

    /// Endpoint answered 2xx but reported `success: false`
    #[error("Submission rejected: {0}")]
    Rejected(String),
}

impl WebhookError {
    /// Whether the failure comes from local configuration rather than the endpoint
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError(_) | Self::InvalidUrl(_))
    }

    /// HTTP status when the endpoint answered
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for WebhookError {
    fn from(err: serde_json::Error) -> Self {
        WebhookError::PayloadError(err.to_string())
    }
}
