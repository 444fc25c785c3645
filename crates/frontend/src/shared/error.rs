//! Error types surfaced by the upload and ask flows.
//!
//! `Display` of [`ValidationError`] is the exact text shown in the warning
//! banner. [`RequestError`] carries transport detail for logs only; the user
//! sees a generic message.

use thiserror::Error;

/// Rejected before any request is made
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select at least one file.")]
    NoFilesSelected,

    #[error("Please enter a question.")]
    EmptyQuestion,

    #[error("An upload is already in progress.")]
    UploadInProgress,
}

/// Any failure of a backend call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Failed to build request: {0}")]
    Build(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::NoFilesSelected.to_string(),
            "Please select at least one file."
        );
        assert_eq!(
            ValidationError::EmptyQuestion.to_string(),
            "Please enter a question."
        );
    }

    #[test]
    fn test_request_error_display() {
        assert_eq!(RequestError::Status(502).to_string(), "HTTP 502");
        assert_eq!(
            RequestError::Network("connection refused".into()).to_string(),
            "Network error: connection refused"
        );
    }
}
