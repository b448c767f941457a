//! Domain layer for osrf-console
//!
//! This crate contains the option model, the tool descriptors and the
//! transform entities. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! ## Options
//!
//! Every tool console owns an [`OptionRegistry`]: an ordered table of
//! [`ConsoleOption`]s with a tagged [`OptionValue`], a default, a required
//! flag and an optional set of allowed values.
//!
//! ## Tools
//!
//! A [`ToolKind`] builds its registry from a [`ToolDefaults`] snapshot and
//! turns the current values into the argument vector its own parser takes.

pub mod option;
pub mod tool;
pub mod transform;

// Re-export commonly used types
pub use option::{
    ConsoleOption, OptionDescription, OptionError, OptionKind, OptionRegistry, OptionValue,
    UNSET_ALL,
};
pub use tool::{ToolDefaults, ToolKind, UnknownTool, catalog};
pub use transform::{Entity, Record, TransformError, profiles_from_records};
