//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use super::paths::OsrfPaths;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::PathBuf;
use tracing::warn;

/// Project-level config file names, checked in order
const PROJECT_FILES: [&str; 2] = ["osrf.toml", ".osrf.toml"];

/// Prefix of environment overrides (`OSRF_DEFAULTS__THREADS=8`)
const ENV_PREFIX: &str = "OSRF_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `OSRF_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./osrf.toml` or `./.osrf.toml`
    /// 4. Global: `$XDG_CONFIG_HOME/osrframework/general.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(Box::new)
    }

    /// Load and validate, falling back to built-in defaults on any problem
    ///
    /// A file that cannot be read or extracted is treated like one that fails
    /// [`FileConfig::validate`]: the problem is logged and startup continues.
    pub fn load_or_defaults(config_path: Option<&PathBuf>) -> FileConfig {
        let config = match Self::load(config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Invalid configuration, falling back to defaults: {}", e);
                return Self::load_defaults();
            }
        };

        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!("Configuration problem, falling back to defaults: {}", e);
                Self::load_defaults()
            }
        }
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        OsrfPaths::discover().map(|p| p.general_file())
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        println!("  [     ] Environment: {}*", ENV_PREFIX);

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./osrf.toml or ./.osrf.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
