//! # CSV Uploader - upload form controller
//!
//! The logic behind a single-page CSV upload form: pick a file, post it as
//! multipart to a processing service, show the outcome, then count down and
//! open an external dashboard in a new browsing context.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  begin_upload   ┌─────────────┐   POST file   ┌─────────────┐
//! │  UploadForm │────────────────▶│   Uploader  │──────────────▶│  endpoint   │
//! │ (state+FSM) │◀────────────────│ (transport) │◀──────────────│  (opaque)   │
//! └─────────────┘  finish_upload  └─────────────┘   status+JSON └─────────────┘
//!        │ tick(token) x5
//!        ▼
//! ┌─────────────┐
//! │  Navigator  │──▶ dashboard (new tab)
//! └─────────────┘
//! ```
//!
//! The form itself does no I/O. The Leptos frontend drives it with gloo-net
//! and gloo-timers; [`UploadSession`] drives it natively with reqwest and
//! tokio.
//!
//! ## Modules
//!
//! - [`error`] - Error taxonomy and user-facing messages
//! - [`config`] - Endpoints, messages and timing defaults
//! - [`models`] - Selected file, outcome, server reply
//! - [`countdown`] - Redirect countdown state machine
//! - [`form`] - The controller state store
//! - [`response`] - Status + body interpretation
//! - [`transport`] - Uploader and Navigator seams
//! - `session` - Native tokio driver (not on wasm32)

// Core
pub mod error;
pub mod config;
pub mod models;

// Controller
pub mod countdown;
pub mod form;

// Wire
pub mod response;
pub mod transport;

#[cfg(not(target_arch = "wasm32"))]
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;
pub use countdown::{Countdown, TickEffect};
pub use error::{UploadError, UploadResult};
pub use form::{CountdownToken, UploadForm, UploadTicket};
pub use models::{SelectedFile, UploadOutcome, UploadReply};
pub use response::interpret;
pub use transport::{Navigator, Uploader};

#[cfg(not(target_arch = "wasm32"))]
pub use transport::HttpUploader;

#[cfg(not(target_arch = "wasm32"))]
pub use session::{FormSnapshot, UploadSession};
