//! Footer component

use leptos::*;

use crate::{DASHBOARD_HOME_URL, DASHBOARD_NAME};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <p>
                "Access your visualizations at "
                <a href=DASHBOARD_HOME_URL target="_blank" rel="noopener noreferrer">
                    {DASHBOARD_NAME}
                </a>
            </p>
        </footer>
    }
}
