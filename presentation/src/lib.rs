//! Presentation layer for query-assistant
//!
//! This crate contains CLI definitions, the interactive terminal UI,
//! one-shot console output and the loading spinner.

pub mod cli;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::spinner::SpinnerObserver;
pub use tui::{ResponseView, TuiApp, TuiOptions};
