//! Submission and receipt types

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A file forwarded with a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookFile {
    /// Original file name, as picked by the user
    pub name: String,

    /// Declared content type (may be empty)
    pub content_type: String,

    /// Raw file content
    pub data: Bytes,
}

impl WebhookFile {
    /// Create a new file part
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    /// Size in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the file has no content
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// How a submission goes over the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    /// `application/json` body `{source, data}`
    Json,

    /// `multipart/form-data` with `source`, `data` and one part per file
    Multipart,
}

/// An outgoing submission: the payload object plus any files
#[derive(Debug, Clone)]
pub struct Submission {
    /// Payload object; sent verbatim under `data`
    pub data: serde_json::Value,

    /// Accepted files, in selection order
    pub files: Vec<WebhookFile>,
}

impl Submission {
    /// Create a submission without files
    pub fn new(data: serde_json::Value) -> Self {
        Self {
            data,
            files: Vec::new(),
        }
    }

    /// Attach files
    pub fn with_files(mut self, files: Vec<WebhookFile>) -> Self {
        self.files = files;
        self
    }

    /// Multipart when at least one file is attached, JSON otherwise
    pub fn encoding(&self) -> Encoding {
        if self.files.is_empty() {
            Encoding::Json
        } else {
            Encoding::Multipart
        }
    }
}

/// Record of a delivery the endpoint accepted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookReceipt {
    /// Locally generated delivery id
    pub id: Uuid,

    /// HTTP status returned by the endpoint
    pub status: u16,

    /// Encoding used for the request
    pub encoding: Encoding,

    /// Parsed response body, or `{"success": true, "status": n}` when the
    /// endpoint did not answer JSON
    pub body: serde_json::Value,

    /// When the response was received
    pub delivered_at: DateTime<Utc>,
}

impl WebhookReceipt {
    pub(crate) fn new(status: u16, encoding: Encoding, body: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            status,
            encoding,
            body,
            delivered_at: Utc::now(),
        }
    }
}
