//! Console options
//!
//! The option model shared by every tool console: a tagged
//! [`OptionValue`], the [`ConsoleOption`] metadata around it, and the
//! ordered [`OptionRegistry`] that `set`/`unset`/`show` operate on.

pub mod entry;
pub mod error;
pub mod registry;
pub mod value;

pub use entry::ConsoleOption;
pub use error::OptionError;
pub use registry::{OptionDescription, OptionRegistry, UNSET_ALL};
pub use value::{OptionKind, OptionValue};
