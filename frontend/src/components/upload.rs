//! CSV upload form.
//!
//! Drives a [`UploadForm`] held in a signal: file selection, submission
//! through [`BrowserUploader`], feedback, and the redirect countdown ticked
//! by a gloo-timers [`Interval`]. On zero the interval hands over to a short
//! [`Timeout`] so the final `0` renders before the dashboard opens. The live
//! timer sits in a stored value together with its token; replacing or
//! clearing it drops (and cancels) the timer.

use csv_uploader::{CountdownToken, Navigator, SelectedFile, TickEffect, UploadForm, Uploader};
use gloo_timers::callback::{Interval, Timeout};
use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::components::RedirectPanel;
use crate::services::{BrowserNavigator, BrowserUploader};
use crate::{
    ACCEPTED_EXTENSION, COUNTDOWN_SECONDS, DASHBOARD_URL, REDIRECT_GRACE_MILLIS, TICK_MILLIS,
    UPLOAD_URL,
};

/// The countdown timer currently scheduled. Dropping it cancels it.
#[allow(dead_code)]
enum CountdownTimer {
    Ticking(Interval),
    Firing(Timeout),
}

type TimerSlot = StoredValue<Option<(CountdownToken, CountdownTimer)>>;

#[component]
pub fn UploadSection() -> impl IntoView {
    let form = create_rw_signal(UploadForm::<File>::new(COUNTDOWN_SECONDS));
    let ticker: TimerSlot = store_value(None);
    let input_ref = create_node_ref::<html::Input>();

    let stop_ticker = move || ticker.set_value(None);

    on_cleanup(stop_ticker);

    let start_ticker = move |token: CountdownToken| {
        let interval = Interval::new(TICK_MILLIS, move || {
            let effect = form
                .try_update(|f| f.tick(token))
                .unwrap_or(TickEffect::Inactive);

            match effect {
                TickEffect::Remaining(0) => schedule_redirect(form, ticker, token),
                TickEffect::Remaining(_) => {}
                TickEffect::Redirect => fire_redirect(ticker, token),
                TickEffect::Inactive => replace_timer(ticker, token, None),
            }
        });
        ticker.set_value(Some((token, CountdownTimer::Ticking(interval))));
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input
            .files()
            .and_then(|files| files.get(0))
            .map(|file| {
                let size = file.size() as u64;
                SelectedFile::new(file.name(), size, file)
            });

        if file.is_some() {
            stop_ticker();
        }
        form.update(|f| {
            f.select_file(file);
        });
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let Some(Ok(ticket)) = form.try_update(|f| f.begin_upload()) else {
            return;
        };
        stop_ticker();

        spawn_local(async move {
            let result = BrowserUploader::new(UPLOAD_URL).upload(&ticket.file).await;
            let token = form
                .try_update(|f| f.finish_upload(ticket.attempt, result))
                .flatten();

            if let Some(token) = token {
                if let Some(input) = input_ref.get_untracked() {
                    input.set_value("");
                }
                start_ticker(token);
            }
        });
    };

    let file_name = move || form.with(|f| f.file().map(|file| file.name.clone()));
    let file_size = move || form.with(|f| f.file().map(|file| file.display_size()));
    let is_busy = move || form.with(|f| f.is_busy());
    let countdown = Signal::derive(move || form.with(|f| f.countdown()));

    view! {
        <form class="upload-form" on:submit=on_submit>
            <div class="file-upload">
                <label for="file-input">
                    {move || file_name().unwrap_or_else(|| "Choose CSV file".to_string())}
                </label>
                <input
                    id="file-input"
                    type="file"
                    accept=ACCEPTED_EXTENSION
                    class="file-input"
                    node_ref=input_ref
                    on:change=on_file_change
                />

                <Show
                    when=move || file_name().is_some()
                    fallback=|| view! { }
                >
                    <div class="file-info">
                        <p>"Selected file: " {move || file_name().unwrap_or_default()}</p>
                        <p>"Size: " {move || file_size().unwrap_or_default()}</p>
                    </div>
                </Show>
            </div>

            <button
                type="submit"
                class="upload-button"
                disabled=move || form.with(|f| !f.can_submit())
            >
                {move || if is_busy() { "Processing..." } else { "Upload and Process" }}
            </button>
        </form>

        {move || {
            form.with(|f| f.outcome().cloned()).map(|outcome| {
                view! { <div class=outcome.css_class()>{outcome.message().to_string()}</div> }
            })
        }}

        <RedirectPanel countdown=countdown/>
    }
}

/// Swap the interval for a short timeout that performs the firing tick.
fn schedule_redirect(form: RwSignal<UploadForm<File>>, ticker: TimerSlot, token: CountdownToken) {
    let grace = u32::try_from(REDIRECT_GRACE_MILLIS).unwrap_or(TICK_MILLIS);
    let timeout = Timeout::new(grace, move || {
        match form.try_update(|f| f.tick(token)) {
            Some(TickEffect::Redirect) => fire_redirect(ticker, token),
            _ => replace_timer(ticker, token, None),
        }
    });
    replace_timer(ticker, token, Some(CountdownTimer::Firing(timeout)));
}

fn fire_redirect(ticker: TimerSlot, token: CountdownToken) {
    log::info!("Countdown finished, opening dashboard");
    BrowserNavigator.open(DASHBOARD_URL);
    replace_timer(ticker, token, None);
}

/// Replace the timer for `token` once the current callback has returned.
///
/// A callback cannot drop its own timer while running, so the swap is
/// deferred to a task, and skipped if a newer countdown took the slot (the
/// unused timer is then dropped, which cancels it).
fn replace_timer(ticker: TimerSlot, token: CountdownToken, next: Option<CountdownTimer>) {
    spawn_local(async move {
        // The component may have been unmounted in between.
        _ = ticker.try_update_value(|slot| {
            if slot.as_ref().is_some_and(|(current, _)| *current == token) {
                *slot = next.map(|timer| (token, timer));
            }
        });
    });
}
