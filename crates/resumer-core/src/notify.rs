//! User-facing notifications.
//!
//! State transitions never emit these themselves; the UI builds one from
//! the outcome of a transition and shows it alongside.

use crate::analyzer::AnalysisError;
use crate::document::DocumentError;
use crate::upload::UploadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

/// A transient, dismissable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn invalid_file_type() -> Self {
        Self::new(
            NotificationKind::Error,
            "Invalid file type",
            "Please upload a PDF or Word document",
        )
    }

    pub fn analysis_complete() -> Self {
        Self::new(
            NotificationKind::Success,
            "Analysis Complete!",
            "Your resume has been analyzed successfully.",
        )
    }

    pub fn analysis_failed(err: &AnalysisError) -> Self {
        Self::new(NotificationKind::Error, err.title(), err.to_string())
    }

    pub fn not_available(feature: &str) -> Self {
        Self::new(
            NotificationKind::Info,
            "Coming soon",
            format!("{feature} is not available yet."),
        )
    }
}

impl From<&DocumentError> for Notification {
    fn from(err: &DocumentError) -> Self {
        match err {
            DocumentError::InvalidFileType { .. } => Self::invalid_file_type(),
            DocumentError::Unreadable { .. } | DocumentError::NotAFile(_) => {
                Self::new(NotificationKind::Error, "Could not open file", err.to_string())
            }
        }
    }
}

impl From<&UploadError> for Notification {
    fn from(err: &UploadError) -> Self {
        match err {
            UploadError::Document(doc) => doc.into(),
            UploadError::NoSelection => Self::new(
                NotificationKind::Info,
                "No file selected",
                "Choose a resume to analyze first.",
            ),
            UploadError::Busy => Self::new(
                NotificationKind::Info,
                "Analysis in progress",
                "Wait for the current analysis to finish.",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_type_maps_to_invalid_file_type_notice() {
        let err = UploadError::Document(DocumentError::InvalidFileType {
            declared: "text/plain".into(),
        });
        let n = Notification::from(&err);
        assert_eq!(n, Notification::invalid_file_type());
        assert_eq!(n.kind, NotificationKind::Error);
    }

    #[test]
    fn analysis_failure_uses_error_title() {
        let n = Notification::analysis_failed(&AnalysisError::Transient("503".into()));
        assert_eq!(n.title, "Analysis unavailable");
        assert!(n.description.contains("503"));
    }
}
