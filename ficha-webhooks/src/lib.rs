//! Webhook delivery for Ficha
//!
//! This crate posts a completed registration to the intake endpoint,
//! choosing the wire encoding from the attachments it carries.
//!
//! # Features
//!
//! - **JSON Submissions**: `{"source": ..., "data": {...}}` when no files are attached
//! - **Multipart Submissions**: `source`, `data` and one `anexos` part per file
//! - **Single Attempt**: exactly one POST per delivery, no retries
//! - **Application Errors**: a 2xx body with `success: false` is a failure
//! - **Receipts**: accepted deliveries return a [`WebhookReceipt`]
//!
//! # Example
//!
//! ```rust,no_run
//! use ficha_webhooks::{Submission, WebhookClient, WebhookConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = WebhookConfig::builder()
//!         .url("https://hooks.example.com/ficha")
//!         .build();
//!     let client = WebhookClient::new(config)?;
//!
//!     let submission = Submission::new(serde_json::json!({
//!         "razaoSocial": "ACME Comercio LTDA",
//!         "website": ""
//!     }));
//!
//!     let receipt = client.deliver(submission).await?;
//!     println!("delivered with status {}", receipt.status);
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod payload;

pub use client::{UNKNOWN_ERROR, WebhookClient};
pub use config::{DEFAULT_FILE_FIELD, WebhookConfig, WebhookConfigBuilder};
pub use error::WebhookError;
pub use payload::{Encoding, Submission, WebhookFile, WebhookReceipt};

/// Result type for webhook operations
pub type Result<T> = std::result::Result<T, WebhookError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Encoding, Result, Submission, WebhookClient, WebhookConfig, WebhookError, WebhookFile,
        WebhookReceipt,
    };
}
