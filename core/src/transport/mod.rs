//! Seams between the controller and the outside world.
//!
//! - [`Uploader`] sends a selected file to the upload endpoint.
//! - [`Navigator`] opens the dashboard in a new browsing context.
//!
//! The browser implementations live in the frontend crate (gloo-net and
//! `window.open`); [`HttpUploader`] is the native one.

use crate::error::UploadResult;
use crate::models::{SelectedFile, UploadReply};

#[cfg(not(target_arch = "wasm32"))]
mod http;

#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpUploader;

/// Sends a file to the upload endpoint as a multipart `file` part.
///
/// Implementations report transport failures as
/// [`crate::UploadError::NetworkUnreachable`] and delegate everything else
/// to [`crate::response::interpret`].
#[allow(async_fn_in_trait)]
pub trait Uploader {
    type Blob;

    async fn upload(&self, file: &SelectedFile<Self::Blob>) -> UploadResult<UploadReply>;
}

/// Opens a URL in a new browsing context.
pub trait Navigator {
    fn open(&self, url: &str);
}

impl<F: Fn(&str)> Navigator for F {
    fn open(&self, url: &str) {
        self(url)
    }
}
