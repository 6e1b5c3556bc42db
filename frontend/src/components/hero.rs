//! Hero section component

use leptos::*;

use crate::APP_TITLE;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <h1>{APP_TITLE}</h1>
            <p class="subtitle">"Upload your CSV file to process and visualize in the dashboard"</p>
        </header>
    }
}
