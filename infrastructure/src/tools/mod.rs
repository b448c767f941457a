//! Lookup tool adapters
//!
//! - `args`: clap mirrors of each tool's command line
//! - `launcher`: runs the tools as child processes

pub mod args;

mod launcher;

pub use args::ToolArguments;
pub use launcher::ProcessLookupTool;
