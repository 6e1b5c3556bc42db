//! Browser services.
//!
//! # Services
//!
//! - [`upload`] - Multipart CSV upload via gloo-net
//! - [`navigation`] - Opening the dashboard in a new tab

pub mod upload;
pub mod navigation;

pub use upload::*;
pub use navigation::*;
