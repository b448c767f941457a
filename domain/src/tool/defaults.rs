//! Immutable default values a tool console starts from

use super::kind::ToolKind;
use serde::{Deserialize, Serialize};

/// Default thread count forwarded with `-T`
pub const DEFAULT_THREADS: u32 = 32;

/// Default output folder forwarded with `-o`
pub const DEFAULT_OUTPUT_FOLDER: &str = "./";

/// Default extension forwarded with `-e`
pub const DEFAULT_EXTENSION: &str = "csv";

/// Snapshot of the defaults one tool console is built from.
///
/// `selection` holds the platforms (usufy, phonefy, searchfy), e-mail
/// domains (mailfy), TLD groups (domainfy) or regexps (entify) selected
/// when nothing else is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefaults {
    pub threads: u32,
    pub output_folder: String,
    pub extension: Vec<String>,
    pub selection: Vec<String>,
}

impl ToolDefaults {
    /// Built-in defaults for a tool, used when no configuration overrides them
    pub fn builtin(tool: ToolKind) -> Self {
        let selection = match tool {
            ToolKind::Domainfy => "global",
            _ => "all",
        };
        Self {
            threads: DEFAULT_THREADS,
            output_folder: DEFAULT_OUTPUT_FOLDER.to_string(),
            extension: vec![DEFAULT_EXTENSION.to_string()],
            selection: vec![selection.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_defaults() {
        let usufy = ToolDefaults::builtin(ToolKind::Usufy);
        assert_eq!(usufy.threads, 32);
        assert_eq!(usufy.output_folder, "./");
        assert_eq!(usufy.extension, vec!["csv".to_string()]);
        assert_eq!(usufy.selection, vec!["all".to_string()]);

        let domainfy = ToolDefaults::builtin(ToolKind::Domainfy);
        assert_eq!(domainfy.selection, vec!["global".to_string()]);
    }
}
