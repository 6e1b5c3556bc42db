//! Opening the dashboard in a new browsing context.

use csv_uploader::Navigator;

/// `window.open(url, "_blank")`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            log::error!("No window available to open {}", url);
            return;
        };
        if let Err(e) = window.open_with_url_and_target(url, "_blank") {
            log::error!("Failed to open {}: {:?}", url, e);
        }
    }
}
