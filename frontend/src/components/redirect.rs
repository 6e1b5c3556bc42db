//! Countdown panel shown after a successful upload.

use csv_uploader::{Countdown, Navigator};
use leptos::*;

use crate::services::BrowserNavigator;
use crate::DASHBOARD_URL;

/// Status line for the panel, `None` when the panel is hidden.
pub fn countdown_text(countdown: Countdown) -> Option<String> {
    match countdown {
        Countdown::Idle => None,
        Countdown::Counting(1) => Some("Redirecting to the dashboard in 1 second...".to_string()),
        Countdown::Counting(n) => Some(format!("Redirecting to the dashboard in {} seconds...", n)),
        Countdown::Fired => Some("Dashboard opened in a new tab.".to_string()),
    }
}

#[component]
pub fn RedirectPanel(countdown: Signal<Countdown>) -> impl IntoView {
    let go_now = move |_| {
        log::info!("Manual redirect to dashboard");
        BrowserNavigator.open(DASHBOARD_URL);
    };

    view! {
        <Show
            when=move || countdown.get().is_visible()
            fallback=|| view! { }
        >
            <div class="redirect-message">
                <p>{move || countdown_text(countdown.get()).unwrap_or_default()}</p>
                <button type="button" class="redirect-button" on:click=go_now>
                    "Go to Dashboard Now"
                </button>
            </div>
        </Show>
    }
}
