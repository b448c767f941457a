//! Presentation layer for osrf-console
//!
//! This crate contains CLI definitions, the interactive consoles
//! and output formatters.

pub mod cli;
pub mod console;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use console::{Flow, MainConsole, ToolConsole};
pub use output::maltego::MaltegoFormatter;
