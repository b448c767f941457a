//! OSRFramework file locations
//!
//! The lookup tools read credentials, API keys and browser settings from
//! files under the application config directory. The console never writes
//! them; it only lists where they live.

use std::path::{Path, PathBuf};

/// Directory name under the platform config/data dirs
pub const APP_DIR: &str = "osrframework";

/// Locations of the OSRFramework configuration files and directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsrfPaths {
    app_path: PathBuf,
}

impl OsrfPaths {
    /// Paths rooted at an explicit directory
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        Self {
            app_path: root.into(),
        }
    }

    /// Paths rooted at `$XDG_CONFIG_HOME/osrframework` (or the platform equivalent)
    pub fn discover() -> Option<Self> {
        dirs::config_dir().map(|d| Self::from_root(d.join(APP_DIR)))
    }

    pub fn app_path(&self) -> &Path {
        &self.app_path
    }

    /// Login credentials used by the platform wrappers
    pub fn accounts_file(&self) -> PathBuf {
        self.app_path.join("accounts.cfg")
    }

    /// API credentials already configured
    pub fn api_keys_file(&self) -> PathBuf {
        self.app_path.join("api_keys.cfg")
    }

    /// How browsers connect to the platforms
    pub fn browser_file(&self) -> PathBuf {
        self.app_path.join("browser.cfg")
    }

    /// General defaults of the utils (also read by this console)
    pub fn general_file(&self) -> PathBuf {
        self.app_path.join("general.toml")
    }

    /// Pristine copies of the default files
    pub fn defaults_dir(&self) -> PathBuf {
        self.app_path.join("default")
    }

    /// User-defined patterns for entify
    pub fn patterns_dir(&self) -> PathBuf {
        self.app_path.join("plugins").join("patterns")
    }

    /// User-defined wrappers for usufy platforms
    pub fn wrappers_dir(&self) -> PathBuf {
        self.app_path.join("plugins").join("wrappers")
    }

    /// Every location with the description shown by the console `info` command
    pub fn listing(&self) -> Vec<(&'static str, PathBuf)> {
        vec![
            (
                "Configuration details about the login credentials in OSRFramework",
                self.accounts_file(),
            ),
            (
                "Configuration details about the API credentials already configured",
                self.api_keys_file(),
            ),
            (
                "Connection configuration about how the browsers will be connected",
                self.browser_file(),
            ),
            (
                "General default configuration of the utils",
                self.general_file(),
            ),
            ("Directory containing default files as a backup", self.defaults_dir()),
            (
                "Directory containing the user-defined patterns for entify",
                self.patterns_dir(),
            ),
            (
                "Directory containing the user-defined wrappers for usufy platforms",
                self.wrappers_dir(),
            ),
        ]
    }

    /// Default location of the console line history
    pub fn history_file() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join(APP_DIR).join("history.txt"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_under_root() {
        let paths = OsrfPaths::from_root("/etc/osrf");
        assert_eq!(paths.accounts_file(), PathBuf::from("/etc/osrf/accounts.cfg"));
        assert_eq!(paths.api_keys_file(), PathBuf::from("/etc/osrf/api_keys.cfg"));
        assert_eq!(paths.browser_file(), PathBuf::from("/etc/osrf/browser.cfg"));
        assert_eq!(paths.general_file(), PathBuf::from("/etc/osrf/general.toml"));
        assert_eq!(
            paths.wrappers_dir(),
            PathBuf::from("/etc/osrf/plugins/wrappers")
        );
    }

    #[test]
    fn test_listing_covers_every_location() {
        let paths = OsrfPaths::from_root("/etc/osrf");
        let listing = paths.listing();
        assert_eq!(listing.len(), 7);
        assert!(listing.iter().all(|(_, p)| p.starts_with("/etc/osrf")));
    }
}
