//! Configuration file loading for osrf-console
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `OSRF_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./osrf.toml` or `./.osrf.toml`
//! 4. Global: `$XDG_CONFIG_HOME/osrframework/general.toml`
//! 5. Default values

mod file_config;
mod loader;
mod paths;

pub use file_config::{
    ConfigValidationError, FileConfig, FileConsoleConfig, FileDefaultsConfig, FileToolConfig,
};
pub use loader::ConfigLoader;
pub use paths::{APP_DIR, OsrfPaths};
