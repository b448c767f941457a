//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and resolved into domain types on demand.

mod console;
mod defaults;
mod tools;

pub use console::FileConsoleConfig;
pub use defaults::FileDefaultsConfig;
pub use tools::FileToolConfig;

use osrf_domain::{ToolDefaults, ToolKind, catalog};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("threads cannot be 0 ({0})")]
    ZeroThreads(String),

    #[error("unknown tool section: [tools.{0}]")]
    UnknownTool(String),

    #[error("unsupported extension '{extension}' ({scope})")]
    InvalidExtension { scope: String, extension: String },

    #[error("executable cannot be empty ([tools.{0}])")]
    EmptyExecutable(String),

    #[error("{field} cannot be an empty list ({scope})")]
    EmptyList { scope: String, field: String },

    #[error("unsupported value '{value}' ({scope})")]
    InvalidSelection { scope: String, value: String },
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Interactive console settings
    pub console: FileConsoleConfig,
    /// Defaults shared by every tool
    pub defaults: FileDefaultsConfig,
    /// Per-tool overrides keyed by tool name
    pub tools: BTreeMap<String, FileToolConfig>,
}

impl FileConfig {
    /// Raw section of a tool, if present
    pub fn tool(&self, tool: ToolKind) -> Option<&FileToolConfig> {
        self.tools.get(tool.name())
    }

    /// Resolve the defaults a tool console starts from
    pub fn tool_defaults(&self, tool: ToolKind) -> ToolDefaults {
        let builtin = ToolDefaults::builtin(tool);
        let section = self.tool(tool).cloned().unwrap_or_default();

        ToolDefaults {
            threads: section.threads.unwrap_or(self.defaults.threads),
            output_folder: section
                .output_folder
                .unwrap_or_else(|| self.defaults.output_folder.clone()),
            extension: section
                .extension
                .unwrap_or_else(|| self.defaults.extension.clone()),
            selection: section.platforms.unwrap_or(builtin.selection),
        }
    }

    /// Executable launched for a tool
    pub fn executable(&self, tool: ToolKind) -> String {
        self.tool(tool)
            .and_then(|t| t.executable.clone())
            .unwrap_or_else(|| tool.name().to_string())
    }

    /// Validate the configuration
    ///
    /// Every list must be non-empty and hold values the matching tool option
    /// accepts, so the resolved defaults always build a parseable command line.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.defaults.threads == 0 {
            return Err(ConfigValidationError::ZeroThreads("[defaults]".to_string()));
        }
        Self::check_list("[defaults]", "extension", &self.defaults.extension, catalog::EXTENSIONS)?;

        for (name, section) in &self.tools {
            let tool = name
                .parse::<ToolKind>()
                .map_err(|_| ConfigValidationError::UnknownTool(name.clone()))?;
            let scope = format!("[tools.{}]", name);

            if section.threads == Some(0) {
                return Err(ConfigValidationError::ZeroThreads(scope));
            }
            if let Some(extension) = &section.extension {
                Self::check_list(&scope, "extension", extension, catalog::EXTENSIONS)?;
            }
            if let Some(platforms) = &section.platforms {
                Self::check_list(&scope, "platforms", platforms, tool.selection_catalog())?;
            }
            if section
                .executable
                .as_deref()
                .is_some_and(|e| e.trim().is_empty())
            {
                return Err(ConfigValidationError::EmptyExecutable(name.clone()));
            }
        }

        Ok(())
    }

    fn check_list(
        scope: &str,
        field: &str,
        values: &[String],
        allowed: &[&str],
    ) -> Result<(), ConfigValidationError> {
        if values.is_empty() {
            return Err(ConfigValidationError::EmptyList {
                scope: scope.to_string(),
                field: field.to_string(),
            });
        }
        match values.iter().find(|v| !allowed.contains(&v.as_str())) {
            Some(bad) if field == "extension" => Err(ConfigValidationError::InvalidExtension {
                scope: scope.to_string(),
                extension: bad.clone(),
            }),
            Some(bad) => Err(ConfigValidationError::InvalidSelection {
                scope: scope.to_string(),
                value: bad.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.console.history);
        assert!(config.console.color);
        assert_eq!(config.defaults.threads, 32);
        assert!(config.tools.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tool_defaults_without_overrides_match_builtin() {
        let config = FileConfig::default();
        for tool in ToolKind::ALL {
            assert_eq!(config.tool_defaults(tool), ToolDefaults::builtin(tool));
        }
    }

    #[test]
    fn test_deserialize_toml() {
        let toml_str = r#"
[console]
history = false
color = false

[defaults]
threads = 8
output_folder = "/tmp/osrf"
extension = ["json"]

[tools.usufy]
platforms = ["twitter", "github"]
threads = 16
executable = "/opt/osrf/usufy"

[tools.mailfy]
domains = ["gmail.com"]

[tools.domainfy]
tlds = ["cc"]
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.console.history);
        assert!(config.validate().is_ok());

        let usufy = config.tool_defaults(ToolKind::Usufy);
        assert_eq!(usufy.threads, 16);
        assert_eq!(usufy.output_folder, "/tmp/osrf");
        assert_eq!(usufy.extension, vec!["json".to_string()]);
        assert_eq!(usufy.selection, vec!["twitter".to_string(), "github".to_string()]);
        assert_eq!(config.executable(ToolKind::Usufy), "/opt/osrf/usufy");

        let mailfy = config.tool_defaults(ToolKind::Mailfy);
        assert_eq!(mailfy.threads, 8);
        assert_eq!(mailfy.selection, vec!["gmail.com".to_string()]);
        assert_eq!(config.executable(ToolKind::Mailfy), "mailfy");

        assert_eq!(
            config.tool_defaults(ToolKind::Domainfy).selection,
            vec!["cc".to_string()]
        );
    }

    #[test]
    fn test_validate_rejects_unknown_tool() {
        let config: FileConfig = toml::from_str("[tools.nmapfy]\nthreads = 2\n").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::UnknownTool("nmapfy".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_bad_extension() {
        let config: FileConfig = toml::from_str("[defaults]\nextension = [\"pdf\"]\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidExtension { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_threads() {
        let config: FileConfig = toml::from_str("[tools.usufy]\nthreads = 0\n").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::ZeroThreads("[tools.usufy]".to_string()))
        );
    }

    #[test]
    fn test_validate_rejects_unknown_platform() {
        let config: FileConfig =
            toml::from_str("[tools.usufy]\nplatforms = [\"bogus\"]\n").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidSelection {
                scope: "[tools.usufy]".to_string(),
                value: "bogus".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_checks_selection_against_the_tool_catalog() {
        // A mailfy domain is not a usufy platform
        let config: FileConfig =
            toml::from_str("[tools.usufy]\nplatforms = [\"gmail.com\"]\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidSelection { .. })
        ));

        let config: FileConfig =
            toml::from_str("[tools.entify]\nregexps = [\"all\"]\n").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_default_extension() {
        let config: FileConfig = toml::from_str("[defaults]\nextension = []\n").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::EmptyList {
                scope: "[defaults]".to_string(),
                field: "extension".to_string(),
            })
        );
    }

    #[test]
    fn test_validate_rejects_empty_tool_lists() {
        let config: FileConfig = toml::from_str("[tools.mailfy]\ndomains = []\n").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::EmptyList {
                scope: "[tools.mailfy]".to_string(),
                field: "platforms".to_string(),
            })
        );

        let config: FileConfig = toml::from_str("[tools.phonefy]\nextension = []\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyList { .. })
        ));
    }
}
