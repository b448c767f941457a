//! Lookup tools
//!
//! Describes the six lookup tools: their names, the options each one
//! exposes, the catalogs of accepted values and how current option values
//! become an argument vector.

pub mod catalog;
pub mod defaults;
pub mod descriptor;
pub mod kind;

pub use defaults::ToolDefaults;
pub use kind::{ToolKind, UnknownTool};
