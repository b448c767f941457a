//! Per-tool configuration from TOML (`[tools.<name>]` sections)
//!
//! Every field is optional; unset fields fall back to `[defaults]` and then
//! to the built-in values.
//!
//! ```toml
//! [tools.usufy]
//! platforms = ["twitter", "github"]
//! threads = 16
//! executable = "/opt/osrframework/bin/usufy"
//!
//! [tools.mailfy]
//! domains = ["gmail.com"]     # alias of `platforms`
//!
//! [tools.domainfy]
//! tlds = ["global", "cc"]     # alias of `platforms`
//! ```

use serde::{Deserialize, Serialize};

/// Raw configuration of one tool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileToolConfig {
    /// Thread count override
    pub threads: Option<u32>,
    /// Output folder override
    pub output_folder: Option<String>,
    /// Extension override
    pub extension: Option<Vec<String>>,
    /// Default selection (platforms, e-mail domains, TLD groups or regexps)
    #[serde(alias = "domains", alias = "tlds", alias = "regexps")]
    pub platforms: Option<Vec<String>>,
    /// Executable launched by `run` (defaults to the tool name in `PATH`)
    pub executable: Option<String>,
}
