//! Interpretation of upload endpoint responses.
//!
//! Shared by every transport so the browser and native clients agree on
//! what a reply means:
//!
//! | Status | Body                         | Result                                  |
//! |--------|------------------------------|-----------------------------------------|
//! | 2xx    | `{"message": "X"}`           | `Ok(UploadReply { message: "X" })`      |
//! | 2xx    | JSON without `message`       | `Ok` with the default success text      |
//! | 2xx    | not JSON, or `message` not a string | `Err(InvalidResponse)`           |
//! | other  | `{"error": "X"}` (non-empty) | `Err(ServerRejected { message: "X" })`  |
//! | other  | anything else                | `Err(ServerRejected)` with the fallback |
//!
//! Only the `error` field is read on failure.

use serde::Deserialize;

use crate::error::{UploadError, UploadResult};
use crate::models::UploadReply;

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Turn a raw HTTP status and body into the controller's reply or error.
pub fn interpret(status: u16, body: &str) -> UploadResult<UploadReply> {
    if !is_success(status) {
        return Err(rejection(status, body));
    }

    serde_json::from_str(body).map_err(|e| UploadError::InvalidResponse(e.to_string()))
}

/// Body of a rejected upload. Anything that does not fit means "no reason".
#[derive(Deserialize)]
struct RejectionBody {
    #[serde(default)]
    error: Option<String>,
}

fn rejection(status: u16, body: &str) -> UploadError {
    let reason = serde_json::from_str::<RejectionBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|s| !s.is_empty());

    match reason {
        Some(message) => UploadError::ServerRejected { status, message },
        None => UploadError::rejected_without_reason(status),
    }
}
