//! The upload form controller.
//!
//! [`UploadForm`] holds all mutable session state in one place: the selected
//! file, the latest outcome, the busy flag and the redirect countdown. Every
//! action that resets the countdown also bumps an epoch, and ticks are
//! scheduled with the [`CountdownToken`] of the epoch that started them, so
//! a tick from a cancelled timer can never revive the countdown.
//!
//! The form does no I/O. Drivers (the Leptos page, [`crate::UploadSession`])
//! call [`UploadForm::begin_upload`], perform the request with the returned
//! [`UploadTicket`], then hand the result back to
//! [`UploadForm::finish_upload`].

use crate::config::COUNTDOWN_SECONDS;
use crate::countdown::{Countdown, TickEffect};
use crate::error::{UploadError, UploadResult};
use crate::models::{SelectedFile, UploadOutcome, UploadReply};

/// Identifies the countdown a scheduled tick belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountdownToken(u64);

/// A submission in flight.
#[derive(Clone, Debug)]
pub struct UploadTicket<B> {
    pub attempt: u64,
    pub file: SelectedFile<B>,
}

#[derive(Clone, Debug)]
pub struct UploadForm<B> {
    file: Option<SelectedFile<B>>,
    outcome: Option<UploadOutcome>,
    busy: bool,
    countdown: Countdown,
    countdown_seconds: u32,
    epoch: u64,
    attempt: u64,
}

impl<B> Default for UploadForm<B> {
    fn default() -> Self {
        Self::new(COUNTDOWN_SECONDS)
    }
}

impl<B> UploadForm<B> {
    pub fn new(countdown_seconds: u32) -> Self {
        Self {
            file: None,
            outcome: None,
            busy: false,
            countdown: Countdown::Idle,
            countdown_seconds,
            epoch: 0,
            attempt: 0,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn file(&self) -> Option<&SelectedFile<B>> {
        self.file.as_ref()
    }

    pub fn outcome(&self) -> Option<&UploadOutcome> {
        self.outcome.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn countdown(&self) -> Countdown {
        self.countdown
    }

    /// Submit control is enabled only when idle with a file chosen.
    pub fn can_submit(&self) -> bool {
        !self.busy && self.file.is_some()
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Replace the selected file.
    ///
    /// `None` (the picker was dismissed) leaves everything untouched.
    /// Returns whether the selection changed.
    pub fn select_file(&mut self, file: Option<SelectedFile<B>>) -> bool {
        let Some(file) = file else {
            return false;
        };
        log::debug!("Selected {} ({} bytes)", file.name, file.size_bytes);
        if !file.is_csv() {
            log::warn!("{} does not look like a CSV file, uploading anyway", file.name);
        }
        self.file = Some(file);
        self.outcome = None;
        self.cancel_countdown();
        true
    }

    /// Complete a submission started with [`begin_upload`](Self::begin_upload).
    ///
    /// Returns the token for the countdown to schedule when the upload
    /// succeeded. Results for an attempt other than the one in flight are
    /// dropped.
    pub fn finish_upload(
        &mut self,
        attempt: u64,
        result: UploadResult<UploadReply>,
    ) -> Option<CountdownToken> {
        if !self.busy || attempt != self.attempt {
            log::debug!("Dropping result of superseded attempt {}", attempt);
            return None;
        }
        self.busy = false;

        match result {
            Ok(reply) => {
                log::info!("Upload succeeded: {}", reply.message);
                self.outcome = Some(UploadOutcome::Success(reply.message));
                self.file = None;
                self.epoch += 1;
                self.countdown = Countdown::start(self.countdown_seconds);
                Some(CountdownToken(self.epoch))
            }
            Err(e) => {
                log::warn!("Upload failed: {}", e);
                self.outcome = Some(UploadOutcome::Failure(e.to_string()));
                None
            }
        }
    }

    /// Advance the countdown scheduled under `token`.
    ///
    /// Ticks from a cancelled or superseded countdown are ignored.
    pub fn tick(&mut self, token: CountdownToken) -> TickEffect {
        if token.0 != self.epoch {
            log::debug!("Ignoring stale countdown tick");
            return TickEffect::Inactive;
        }
        let effect = self.countdown.tick();
        log::debug!("Countdown tick: {:?}", effect);
        effect
    }

    fn cancel_countdown(&mut self) {
        self.epoch += 1;
        self.countdown.cancel();
    }
}

impl<B: Clone> UploadForm<B> {
    /// Start a submission.
    ///
    /// With no file selected this records the failure outcome and returns
    /// [`UploadError::NoFileSelected`]; while busy it returns
    /// [`UploadError::Busy`] and changes nothing. Otherwise the form turns
    /// busy, clears the previous outcome, cancels any countdown and returns
    /// the ticket to send.
    pub fn begin_upload(&mut self) -> UploadResult<UploadTicket<B>> {
        if self.busy {
            return Err(UploadError::Busy);
        }
        let Some(file) = self.file.clone() else {
            let err = UploadError::NoFileSelected;
            self.outcome = Some(UploadOutcome::Failure(err.to_string()));
            return Err(err);
        };

        self.busy = true;
        self.outcome = None;
        self.cancel_countdown();
        self.attempt += 1;
        log::info!("Uploading {} ({})", file.name, file.display_size());

        Ok(UploadTicket {
            attempt: self.attempt,
            file,
        })
    }
}
