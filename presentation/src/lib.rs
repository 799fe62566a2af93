//! Presentation layer for mom-generator
//!
//! This crate contains CLI definitions, the single-page web shell, console
//! output formatting, and progress reporting.

pub mod cli;
pub mod extract;
pub mod output;
pub mod progress;
pub mod web;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use extract::ExtractCommand;
pub use output::console::ConsoleFormatter;
pub use output::markdown::render_markdown;
pub use progress::reporter::{SimpleProgress, SpinnerProgress};
pub use web::{WebShellState, render_page, router, serve};
