//! Application configuration.
//!
//! Endpoints and messages come from the core crate so the browser and native
//! drivers share one set of defaults. Only presentation constants live here.

pub use csv_uploader::config::{
    ACCEPTED_EXTENSION, COUNTDOWN_SECONDS, DASHBOARD_HOME_URL, DASHBOARD_URL, REDIRECT_GRACE_MILLIS,
    UPLOAD_URL,
};

/// Page title.
pub const APP_TITLE: &str = "CSV Upload and Processing";

/// Name of the dashboard shown in links.
pub const DASHBOARD_NAME: &str = "Superset Dashboard";

/// Countdown tick period in milliseconds.
pub const TICK_MILLIS: u32 = 1_000;
