//! The six lookup tools wrapped by the console

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when `use <name>` names something that is not a tool
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown util: '{0}'")]
pub struct UnknownTool(pub String);

/// A lookup tool the console can configure and launch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    /// Checks whether a nick is registered as a domain under several TLDs
    Domainfy,
    /// Extracts entities from a URL with regular expressions
    Entify,
    /// Checks whether a nick owns mailboxes in several e-mail providers
    Mailfy,
    /// Checks whether a phone number is linked to spam reports
    Phonefy,
    /// Looks for profiles with full names and other free-text queries
    Searchfy,
    /// Checks whether a username exists in several platforms
    Usufy,
}

impl ToolKind {
    /// Every tool, in menu order
    pub const ALL: [ToolKind; 6] = [
        ToolKind::Domainfy,
        ToolKind::Entify,
        ToolKind::Mailfy,
        ToolKind::Phonefy,
        ToolKind::Searchfy,
        ToolKind::Usufy,
    ];

    /// Name used by `use`, in prompts and as the executable name
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Domainfy => "domainfy",
            ToolKind::Entify => "entify",
            ToolKind::Mailfy => "mailfy",
            ToolKind::Phonefy => "phonefy",
            ToolKind::Searchfy => "searchfy",
            ToolKind::Usufy => "usufy",
        }
    }

    /// Prompt shown while the tool console is active
    pub fn prompt(&self) -> String {
        format!("osrf ({}) > ", self.name())
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|t| t.name())
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.name() == s.trim())
            .ok_or_else(|| UnknownTool(s.to_string()))
    }
}
