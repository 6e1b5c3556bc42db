//! CSV Uploader - Frontend Rust/Leptos Application
//!
//! A WebAssembly page for uploading a CSV file to the processing service
//! and handing off to the dashboard.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  └── UploadSection                                          │
//! │      ├── file picker + submit                               │
//! │      ├── feedback (success / error)                         │
//! │      └── RedirectPanel (countdown + "go now")               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Endpoints and presentation constants
//! - [`components`] - UI components (Hero, Upload, Redirect, Footer)
//! - [`services`] - Browser transports (upload, navigation)

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::*;
pub use components::*;
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_TITLE/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <div class="app-container">
            <Hero/>
            <UploadSection/>
        </div>

        <Footer/>
    }
}
