//! Error types module
//!
//! Every failure of one upload cycle is represented by `UploadError`. The UI
//! collapses all variants into a single message; the variants exist so callers
//! and logs can tell a dead server from a malformed answer.

use std::io;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Processing rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl UploadError {
    /// Machine-readable error code (e.g., "TRANSPORT_ERROR")
    pub fn error_code(&self) -> &'static str {
        match self {
            UploadError::Transport(_) => "TRANSPORT_ERROR",
            UploadError::Rejected { .. } => "PROCESSING_REJECTED",
            UploadError::MalformedResponse(_) => "MALFORMED_RESPONSE",
            UploadError::Io(_) => "IO_ERROR",
            UploadError::InvalidInput(_) => "INVALID_INPUT",
        }
    }

    /// Whether submitting the same file again may succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            UploadError::Transport(_) => true,
            UploadError::Rejected { status, .. } => *status >= 500,
            UploadError::MalformedResponse(_)
            | UploadError::Io(_)
            | UploadError::InvalidInput(_) => false,
        }
    }
}

impl From<io::Error> for UploadError {
    fn from(err: io::Error) -> Self {
        UploadError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for UploadError {
    fn from(err: serde_json::Error) -> Self {
        UploadError::MalformedResponse(format!("JSON parsing error: {}", err))
    }
}

pub type UploadResult<T> = Result<T, UploadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            UploadError::Transport("refused".into()).error_code(),
            "TRANSPORT_ERROR"
        );
        assert_eq!(
            UploadError::MalformedResponse("x".into()).error_code(),
            "MALFORMED_RESPONSE"
        );
    }

    #[test]
    fn test_recoverable_only_for_transport_and_server_errors() {
        assert!(UploadError::Transport("timeout".into()).is_recoverable());
        assert!(UploadError::Rejected {
            status: 502,
            message: "bad gateway".into()
        }
        .is_recoverable());
        assert!(!UploadError::Rejected {
            status: 400,
            message: "Unsupported file type".into()
        }
        .is_recoverable());
        assert!(!UploadError::MalformedResponse("eof".into()).is_recoverable());
    }

    #[test]
    fn test_json_error_maps_to_malformed() {
        let err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let upload_err: UploadError = err.into();
        assert!(matches!(upload_err, UploadError::MalformedResponse(_)));
    }
}
