//! Form state types: the selected file, the upload outcome and the server
//! reply.

use serde::Deserialize;

use crate::config::{ACCEPTED_EXTENSION, DEFAULT_SUCCESS_MESSAGE};

// =============================================================================
// Selected File
// =============================================================================

/// A file chosen by the user, with the blob the transport will send.
///
/// The blob type depends on the platform: `web_sys::File` in the browser,
/// `Vec<u8>` natively.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<B> {
    /// Original file name, sent as the multipart filename
    pub name: String,
    /// Size in bytes
    pub size_bytes: u64,
    /// File content handle
    pub blob: B,
}

impl<B> SelectedFile<B> {
    pub fn new(name: impl Into<String>, size_bytes: u64, blob: B) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            blob,
        }
    }

    /// Size in kilobytes with two decimals, e.g. `2.00 KB`.
    pub fn display_size(&self) -> String {
        format!("{:.2} KB", self.size_bytes as f64 / 1024.0)
    }

    /// Whether the name carries the `.csv` extension (case-insensitive).
    ///
    /// The picker filter is advisory; this never blocks a submission.
    pub fn is_csv(&self) -> bool {
        self.name.to_ascii_lowercase().ends_with(ACCEPTED_EXTENSION)
    }
}

impl SelectedFile<Vec<u8>> {
    /// Wrap in-memory bytes, deriving the size from their length.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let size = bytes.len() as u64;
        Self::new(name, size, bytes)
    }
}

// =============================================================================
// Outcome
// =============================================================================

/// Feedback shown after the latest action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    Success(String),
    Failure(String),
}

impl UploadOutcome {
    pub fn message(&self) -> &str {
        match self {
            UploadOutcome::Success(msg) | UploadOutcome::Failure(msg) => msg,
        }
    }

    /// CSS class for the feedback region.
    pub fn css_class(&self) -> &'static str {
        match self {
            UploadOutcome::Success(_) => "success-message",
            UploadOutcome::Failure(_) => "error-message",
        }
    }
}

// =============================================================================
// Server Reply
// =============================================================================

/// Body of a successful upload response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UploadReply {
    #[serde(default = "default_message")]
    pub message: String,
}

fn default_message() -> String {
    DEFAULT_SUCCESS_MESSAGE.to_string()
}
