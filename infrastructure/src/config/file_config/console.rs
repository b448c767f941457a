//! Console configuration from TOML (`[console]` section)

use serde::{Deserialize, Serialize};

/// Raw console configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConsoleConfig {
    /// Persist line history between sessions
    pub history: bool,
    /// Path to history file (defaults to the data directory)
    pub history_file: Option<String>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileConsoleConfig {
    fn default() -> Self {
        Self {
            history: true,
            history_file: None,
            color: true,
        }
    }
}
