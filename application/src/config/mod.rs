//! Application configuration
//!
//! Settings the console needs at runtime, already resolved from whatever
//! configuration sources the binary loaded.

mod console;

pub use console::{ConfigLocation, ConsoleConfig};
