//! Shared tool defaults from TOML (`[defaults]` section)

use osrf_domain::tool::defaults::{DEFAULT_EXTENSION, DEFAULT_OUTPUT_FOLDER, DEFAULT_THREADS};
use serde::{Deserialize, Serialize};

/// Raw defaults shared by every tool
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDefaultsConfig {
    /// Thread count forwarded with `-T`
    pub threads: u32,
    /// Output folder forwarded with `-o`
    pub output_folder: String,
    /// Extensions forwarded with `-e`
    pub extension: Vec<String>,
}

impl Default for FileDefaultsConfig {
    fn default() -> Self {
        Self {
            threads: DEFAULT_THREADS,
            output_folder: DEFAULT_OUTPUT_FOLDER.to_string(),
            extension: vec![DEFAULT_EXTENSION.to_string()],
        }
    }
}
