//! Interactive consoles
//!
//! - `main_menu`: top-level `osrf >` prompt
//! - `tool_console`: one generic shell per lookup tool
//! - `command`: line parsing shared by both
//! - `completer` / `editor`: rustyline integration

pub mod command;
pub mod completer;
pub mod editor;
pub mod main_menu;
pub mod tool_console;

pub use completer::ConsoleHelper;
pub use editor::LineEditor;
pub use main_menu::{MainConsole, MenuAction};
pub use tool_console::{Flow, ToolConsole};
