//! Application layer for osrf-console
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ConfigLocation, ConsoleConfig};
pub use ports::lookup_tool::{LookupInvocation, LookupToolPort, ToolDispatchError};
pub use use_cases::run_tool::{RunToolError, RunToolOutput, RunToolUseCase};
