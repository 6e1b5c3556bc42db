//! UI Components for the CSV uploader.
//!
//! # Layout Components
//! - [`Hero`] - Title and description
//! - [`Footer`] - Dashboard link
//!
//! # Feature Components
//! - [`UploadSection`] - File selection, submission and feedback
//! - [`RedirectPanel`] - Countdown to the dashboard with a manual override

mod hero;
mod upload;
mod redirect;
mod footer;

pub use hero::*;
pub use upload::*;
pub use redirect::*;
pub use footer::*;
