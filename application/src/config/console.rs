//! Console configuration: resolved defaults and file locations

use osrf_domain::{ToolDefaults, ToolKind};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// A configuration file or directory listed by the main menu `info` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub description: String,
    pub path: PathBuf,
}

/// Runtime configuration of the interactive console.
///
/// Tool consoles read their [`ToolDefaults`] from here every time they are
/// created, so a console entered twice starts from the same values.
#[derive(Debug, Clone, Default)]
pub struct ConsoleConfig {
    defaults: BTreeMap<ToolKind, ToolDefaults>,
    /// Files and directories shown by `info`
    pub locations: Vec<ConfigLocation>,
    /// Where line history is persisted (`None` disables history)
    pub history_file: Option<PathBuf>,
}

impl ConsoleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the defaults of one tool
    pub fn with_defaults(mut self, tool: ToolKind, defaults: ToolDefaults) -> Self {
        self.defaults.insert(tool, defaults);
        self
    }

    pub fn with_location(mut self, description: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.locations.push(ConfigLocation {
            description: description.into(),
            path: path.into(),
        });
        self
    }

    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    /// Defaults for a tool, falling back to the built-in ones
    pub fn defaults_for(&self, tool: ToolKind) -> ToolDefaults {
        self.defaults
            .get(&tool)
            .cloned()
            .unwrap_or_else(|| ToolDefaults::builtin(tool))
    }
}
