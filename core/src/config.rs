//! Controller configuration.
//!
//! Defaults are compile-time constants pointing at a local processing
//! service and a local Superset instance. [`UploaderConfig`] bundles them so
//! callers (and tests) can point the controller elsewhere.

use std::time::Duration;

/// Upload endpoint receiving the multipart `file` part.
pub const UPLOAD_URL: &str = "http://localhost:5000/upload";

/// Dashboard page opened once the countdown completes.
pub const DASHBOARD_URL: &str =
    "http://127.0.0.1:8088/databaseview/list/?pageIndex=0&sortColumn=changed_on_delta_humanized&sortOrder=desc";

/// Dashboard landing page, linked from the page footer.
pub const DASHBOARD_HOME_URL: &str = "http://127.0.0.1:8088/";

/// Seconds between a successful upload and the automatic redirect.
pub const COUNTDOWN_SECONDS: u32 = 5;

/// How long the countdown rests on zero before the dashboard opens, so the
/// final `0` is rendered.
pub const REDIRECT_GRACE_MILLIS: u64 = 100;

/// Extension offered by the file picker. Advisory only.
pub const ACCEPTED_EXTENSION: &str = ".csv";

/// Multipart field name carrying the file.
pub const FILE_FIELD: &str = "file";

/// Shown when submitting with nothing selected.
pub const NO_FILE_MESSAGE: &str = "Please select a file first";

/// Shown when the server rejects the upload without saying why.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// Shown when the server accepts the upload without a message.
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Upload complete";

/// Endpoints and timing used by the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploaderConfig {
    pub upload_url: String,
    pub dashboard_url: String,
    pub countdown_seconds: u32,
    pub tick_period: Duration,
    pub redirect_grace: Duration,
}

impl Default for UploaderConfig {
    fn default() -> Self {
        Self {
            upload_url: UPLOAD_URL.to_string(),
            dashboard_url: DASHBOARD_URL.to_string(),
            countdown_seconds: COUNTDOWN_SECONDS,
            tick_period: Duration::from_secs(1),
            redirect_grace: Duration::from_millis(REDIRECT_GRACE_MILLIS),
        }
    }
}

impl UploaderConfig {
    pub fn with_upload_url(mut self, url: impl Into<String>) -> Self {
        self.upload_url = url.into();
        self
    }

    pub fn with_dashboard_url(mut self, url: impl Into<String>) -> Self {
        self.dashboard_url = url.into();
        self
    }

    pub fn with_tick_period(mut self, period: Duration) -> Self {
        self.tick_period = period;
        self
    }

    pub fn with_redirect_grace(mut self, grace: Duration) -> Self {
        self.redirect_grace = grace;
        self
    }
}
