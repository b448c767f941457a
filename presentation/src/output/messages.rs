//! Colored message helpers
//!
//! Every line the consoles print goes through one of these so the palette
//! stays consistent and `--no-color` (via `colored::control`) applies
//! everywhere.

use colored::Colorize;

/// Regular informational text
pub fn info(text: &str) -> String {
    text.cyan().to_string()
}

pub fn success(text: &str) -> String {
    text.green().bold().to_string()
}

pub fn warning(text: &str) -> String {
    text.yellow().to_string()
}

pub fn error(text: &str) -> String {
    text.red().bold().to_string()
}

/// Values the operator typed or should copy
pub fn emphasis(text: &str) -> String {
    text.magenta().to_string()
}

pub fn title(text: &str) -> String {
    text.bold().underline().to_string()
}
