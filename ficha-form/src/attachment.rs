//! Attachment screening.
//!
//! Files are checked the moment they are picked. A candidate is accepted
//! when its declared type or its extension is allowed and it fits the size
//! limit; everything else is turned into a [`Rejection`] with a readable
//! reason.

use bytes::Bytes;
use ficha_webhooks::WebhookFile;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Largest accepted file: 5 MiB
pub const MAX_ATTACHMENT_BYTES: u64 = 5 * 1024 * 1024;

pub const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "image/png",
    "image/jpeg",
];

pub const ALLOWED_EXTENSIONS: &[&str] = &["pdf", "doc", "docx", "png", "jpg", "jpeg"];

pub const REASON_TYPE_NOT_ALLOWED: &str = "type not allowed";
pub const REASON_TOO_LARGE: &str = "size over 5MB";
pub const REASON_UNREADABLE: &str = "file could not be read";

#[derive(Debug, Clone)]
enum Content {
    Loaded(Bytes),
    /// Over the size limit on disk, so never read
    Skipped,
    Unreadable,
}

/// A file the user picked, not yet screened
#[derive(Debug, Clone)]
pub struct AttachmentCandidate {
    pub name: String,
    /// Declared media type; empty when unknown
    pub content_type: String,
    pub size: u64,
    content: Content,
}

impl AttachmentCandidate {
    /// Candidate with in-memory content
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        let data = data.into();
        Self {
            name: name.into(),
            content_type: content_type.into(),
            size: data.len() as u64,
            content: Content::Loaded(data),
        }
    }

    /// Candidate whose content could not be read
    pub fn unreadable(name: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            size: 0,
            content: Content::Unreadable,
        }
    }

    /// Read a file from disk, guessing its type from the file name.
    ///
    /// Never fails: a file that cannot be read becomes an unreadable
    /// candidate and is rejected at screening time. Files larger than
    /// [`MAX_ATTACHMENT_BYTES`] are sized from metadata and not read.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::from_path_with_limit(path, MAX_ATTACHMENT_BYTES)
    }

    /// Like [`from_path`](Self::from_path) with a custom read ceiling
    pub fn from_path_with_limit(path: impl AsRef<Path>, max_bytes: u64) -> Self {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let content_type = mime_guess::from_path(path)
            .first()
            .map(|m| m.to_string())
            .unwrap_or_default();

        let size = match std::fs::metadata(path) {
            Ok(metadata) => metadata.len(),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Attachment could not be read");
                return Self::unreadable(name, content_type);
            }
        };

        if size > max_bytes {
            debug!(path = %path.display(), size, "Attachment over the size limit, not reading");
            return Self {
                name,
                content_type,
                size,
                content: Content::Skipped,
            };
        }

        match std::fs::read(path) {
            Ok(data) => Self::new(name, content_type, data),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Attachment could not be read");
                Self::unreadable(name, content_type)
            }
        }
    }

    /// Lower-cased text after the last `.` of the name, or the whole name
    /// when it has no `.`
    pub fn extension(&self) -> String {
        self.name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }

    pub fn is_readable(&self) -> bool {
        !matches!(self.content, Content::Unreadable)
    }
}

/// A screened file, held by the form until submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub name: String,
    pub content_type: String,
    pub data: Bytes,
}

impl Attachment {
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

impl From<&Attachment> for WebhookFile {
    fn from(attachment: &Attachment) -> Self {
        WebhookFile::new(
            attachment.name.clone(),
            attachment.content_type.clone(),
            attachment.data.clone(),
        )
    }
}

/// A refused file and why
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub name: String,
    /// Reasons joined with ` + `
    pub reason: String,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.reason)
    }
}

/// Result of screening one selection
#[derive(Debug, Clone, Default)]
pub struct AttachmentBatch {
    pub accepted: Vec<Attachment>,
    pub rejected: Vec<Rejection>,
}

/// Allow-lists and size limit applied to every selection
#[derive(Debug, Clone)]
pub struct AttachmentPolicy {
    pub max_bytes: u64,
    pub content_types: &'static [&'static str],
    pub extensions: &'static [&'static str],
}

impl Default for AttachmentPolicy {
    fn default() -> Self {
        Self {
            max_bytes: MAX_ATTACHMENT_BYTES,
            content_types: ALLOWED_CONTENT_TYPES,
            extensions: ALLOWED_EXTENSIONS,
        }
    }
}

impl AttachmentPolicy {
    /// Reasons a candidate would be refused; empty when it is acceptable
    pub fn reasons(&self, candidate: &AttachmentCandidate) -> Vec<&'static str> {
        if !candidate.is_readable() {
            return vec![REASON_UNREADABLE];
        }

        let extension = candidate.extension();
        let type_ok = self.content_types.contains(&candidate.content_type.as_str())
            || self.extensions.contains(&extension.as_str());
        let size_ok =
            candidate.size <= self.max_bytes && !matches!(candidate.content, Content::Skipped);

        let mut reasons = Vec::new();
        if !type_ok {
            reasons.push(REASON_TYPE_NOT_ALLOWED);
        }
        if !size_ok {
            reasons.push(REASON_TOO_LARGE);
        }
        reasons
    }

    /// Split a selection into accepted files and rejections, keeping order
    pub fn partition(&self, candidates: Vec<AttachmentCandidate>) -> AttachmentBatch {
        let mut batch = AttachmentBatch::default();

        for candidate in candidates {
            let reasons = self.reasons(&candidate);
            match candidate.content {
                Content::Loaded(data) if reasons.is_empty() => batch.accepted.push(Attachment {
                    name: candidate.name,
                    content_type: candidate.content_type,
                    data,
                }),
                _ => batch.rejected.push(Rejection {
                    name: candidate.name,
                    reason: reasons.join(" + "),
                }),
            }
        }

        debug!(
            accepted = batch.accepted.len(),
            rejected = batch.rejected.len(),
            "Attachments screened"
        );
        batch
    }
}
