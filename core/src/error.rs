//! Error types for the upload form controller.
//!
//! Every variant is recoverable: the controller converts errors into a
//! displayed [`crate::UploadOutcome::Failure`] and returns to an interactive
//! state, so nothing here ever escapes the submission handler.
//!
//! The `Display` text of each variant is exactly what the user sees.

use thiserror::Error;

use crate::config::{GENERIC_FAILURE_MESSAGE, NO_FILE_MESSAGE};

// =============================================================================
// Upload Errors
// =============================================================================

/// Errors raised while submitting a file.
#[derive(Debug, Error)]
pub enum UploadError {
    /// Submission attempted with nothing selected. No request is made.
    #[error("{}", NO_FILE_MESSAGE)]
    NoFileSelected,

    /// A request is already in flight.
    #[error("An upload is already in progress")]
    Busy,

    /// The endpoint answered with a non-success status.
    #[error("{message}")]
    ServerRejected { status: u16, message: String },

    /// No response was received (connection refused, timeout, CORS...).
    #[error("{0}")]
    NetworkUnreachable(String),

    /// A success status whose body could not be read as JSON.
    #[error("Invalid server response: {0}")]
    InvalidResponse(String),

    /// Failed to read a file from disk before uploading it.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

impl UploadError {
    /// Rejection carrying the generic fallback text.
    pub fn rejected_without_reason(status: u16) -> Self {
        UploadError::ServerRejected {
            status,
            message: GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    /// HTTP status attached to the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            UploadError::ServerRejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for upload operations.
pub type UploadResult<T> = Result<T, UploadError>;
