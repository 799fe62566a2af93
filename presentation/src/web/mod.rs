//! Single-page web shell
//!
//! Serves the upload form, runs the upload use case on every submission and
//! renders the outcome as one HTML page.

pub mod handlers;
pub mod page;
pub mod server;

pub use handlers::WebShellState;
pub use page::render_page;
pub use server::{router, serve};
