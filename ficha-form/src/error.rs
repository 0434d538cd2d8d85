//! Submission errors.

use crate::Notice;
use ficha_validation::ValidationErrors;
use ficha_webhooks::WebhookError;
use thiserror::Error;

/// Why a submission did not go through
#[derive(Debug, Error)]
pub enum SubmitError {
    /// A previous submission has not finished yet
    #[error("A submission is already in progress")]
    InFlight,

    /// The record breaks at least one rule
    #[error("Form has {} invalid field(s)", .0.fields().len())]
    Invalid(ValidationErrors),

    /// The payload could not be serialized
    #[error("Payload error: {0}")]
    Payload(String),

    /// The endpoint could not be reached, refused the request or is not
    /// configured
    #[error("Delivery failed: {0}")]
    Delivery(#[from] WebhookError),
}

impl SubmitError {
    /// Notice to show for this failure. Validation failures are shown inline
    /// and an in-flight refusal is silent, so neither has one.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SubmitError::InFlight | SubmitError::Invalid(_) => None,
            SubmitError::Payload(_) | SubmitError::Delivery(_) => Some(Notice::submit_failed()),
        }
    }

    /// Field errors when the record was invalid
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            SubmitError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }
}

impl From<ValidationErrors> for SubmitError {
    fn from(errors: ValidationErrors) -> Self {
        SubmitError::Invalid(errors)
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        SubmitError::Payload(err.to_string())
    }
}
