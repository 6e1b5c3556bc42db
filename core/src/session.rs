//! Native driver for the upload form.
//!
//! [`UploadSession`] wires an [`UploadForm`] to an [`Uploader`], a
//! [`Navigator`] and a tokio interval for the redirect countdown. It is
//! single-threaded: the countdown runs with [`tokio::task::spawn_local`], so
//! the session must be used inside a [`tokio::task::LocalSet`].
//!
//! The countdown task's `JoinHandle` is the cancel handle. Every action that
//! resets the form aborts it; the form's epoch check drops any tick that was
//! already queued.

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, Instant};

use crate::config::UploaderConfig;
use crate::countdown::{Countdown, TickEffect};
use crate::error::{UploadError, UploadResult};
use crate::form::{CountdownToken, UploadForm};
use crate::models::{SelectedFile, UploadOutcome};
use crate::transport::{Navigator, Uploader};

/// What the page would currently render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormSnapshot {
    pub file_name: Option<String>,
    pub outcome: Option<UploadOutcome>,
    pub busy: bool,
    pub countdown: Countdown,
}

pub struct UploadSession<U, N> {
    form: Rc<RefCell<UploadForm<Vec<u8>>>>,
    uploader: U,
    navigator: Rc<N>,
    config: UploaderConfig,
    ticker: RefCell<Option<JoinHandle<()>>>,
}

impl<U, N> UploadSession<U, N>
where
    U: Uploader<Blob = Vec<u8>>,
    N: Navigator + 'static,
{
    pub fn new(uploader: U, navigator: N, config: UploaderConfig) -> Self {
        Self {
            form: Rc::new(RefCell::new(UploadForm::new(config.countdown_seconds))),
            uploader,
            navigator: Rc::new(navigator),
            config,
            ticker: RefCell::new(None),
        }
    }

    pub fn snapshot(&self) -> FormSnapshot {
        let form = self.form.borrow();
        FormSnapshot {
            file_name: form.file().map(|f| f.name.clone()),
            outcome: form.outcome().cloned(),
            busy: form.is_busy(),
            countdown: form.countdown(),
        }
    }

    pub fn select_file(&self, file: SelectedFile<Vec<u8>>) {
        self.stop_ticker();
        self.form.borrow_mut().select_file(Some(file));
    }

    /// Read a file from disk and select it.
    pub async fn select_path(&self, path: impl AsRef<Path>) -> UploadResult<()> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.select_file(SelectedFile::from_bytes(name, bytes));
        Ok(())
    }

    /// Submit the selected file and return the resulting outcome.
    ///
    /// Returns `None` when refused because another upload is in flight.
    /// On success the redirect countdown starts in the background.
    pub async fn submit(&self) -> Option<UploadOutcome> {
        let begun = self.form.borrow_mut().begin_upload();
        let ticket = match begun {
            Ok(ticket) => ticket,
            Err(UploadError::Busy) => return None,
            Err(_) => return self.form.borrow().outcome().cloned(),
        };
        self.stop_ticker();

        let result = self.uploader.upload(&ticket.file).await;

        let token = self.form.borrow_mut().finish_upload(ticket.attempt, result);
        if let Some(token) = token {
            self.start_ticker(token);
        }
        self.form.borrow().outcome().cloned()
    }

    /// Open the dashboard now. The countdown keeps running.
    pub fn manual_redirect(&self) {
        log::info!("Opening dashboard: {}", self.config.dashboard_url);
        self.navigator.open(&self.config.dashboard_url);
    }

    fn start_ticker(&self, token: CountdownToken) {
        let form = Rc::clone(&self.form);
        let navigator = Rc::clone(&self.navigator);
        let url = self.config.dashboard_url.clone();
        let period = self.config.tick_period;
        let grace = self.config.redirect_grace;

        let handle = tokio::task::spawn_local(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                let mut effect = form.borrow_mut().tick(token);
                // Rest briefly on zero, then fire instead of waiting a full period.
                if effect == TickEffect::Remaining(0) {
                    sleep(grace).await;
                    effect = form.borrow_mut().tick(token);
                }
                match effect {
                    TickEffect::Remaining(_) => {}
                    TickEffect::Redirect => {
                        log::info!("Countdown finished, opening dashboard: {}", url);
                        navigator.open(&url);
                        break;
                    }
                    TickEffect::Inactive => break,
                }
            }
        });

        if let Some(previous) = self.ticker.replace(Some(handle)) {
            previous.abort();
        }
    }

    fn stop_ticker(&self) {
        if let Some(handle) = self.ticker.borrow_mut().take() {
            handle.abort();
        }
    }
}

impl<U, N> Drop for UploadSession<U, N> {
    fn drop(&mut self) {
        if let Some(handle) = self.ticker.get_mut().take() {
            handle.abort();
        }
    }
}
