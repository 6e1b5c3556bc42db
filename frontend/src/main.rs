//! Browser entry point: installs the panic hook and console logger, then
//! mounts the upload page.

use frontend_rust::{App, UPLOAD_URL};
use leptos::*;

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("CSV uploader ready, uploads go to {}", UPLOAD_URL);

    mount_to_body(|| view! { <App/> })
}
