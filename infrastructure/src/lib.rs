//! Infrastructure layer for osrf-console
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod tools;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileConsoleConfig, FileDefaultsConfig,
    FileToolConfig, OsrfPaths,
};
pub use tools::{ProcessLookupTool, ToolArguments};
