//! User-facing notices.

use crate::Rejection;
use serde::Serialize;

/// Severity of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Destructive,
}

/// A transient message for the person filling the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NoticeKind::Success,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NoticeKind::Destructive,
        }
    }

    /// Shown after the endpoint accepted the submission
    pub fn submitted() -> Self {
        Self::success(
            "Form submitted successfully!",
            "Your details were sent to our team.",
        )
    }

    /// Shown for any delivery failure. Details go to the log only.
    pub fn submit_failed() -> Self {
        Self::destructive(
            "Could not submit the form",
            "Please try again in a moment.",
        )
    }

    /// One `name (reason)` line per rejected file, or `None` when nothing
    /// was rejected
    pub fn rejected_files(rejections: &[Rejection]) -> Option<Self> {
        if rejections.is_empty() {
            return None;
        }

        let lines: Vec<String> = rejections.iter().map(ToString::to_string).collect();
        Some(Self::destructive("Some files were rejected", lines.join("\n")))
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}
