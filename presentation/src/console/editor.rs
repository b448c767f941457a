//! Line editor shared by every console
//!
//! One rustyline editor lives for the whole session; consoles swap the
//! completion helper when they take over the prompt.

use super::completer::ConsoleHelper;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Outcome of reading one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Ctrl-C
    Interrupted,
    /// Ctrl-D or closed stdin
    Eof,
}

pub struct LineEditor {
    editor: Editor<ConsoleHelper, DefaultHistory>,
    history_file: Option<PathBuf>,
}

impl LineEditor {
    /// Create the editor, loading history from `history_file` when given
    pub fn new(history_file: Option<PathBuf>) -> rustyline::Result<Self> {
        let mut editor = Editor::<ConsoleHelper, DefaultHistory>::new()?;

        if let Some(ref path) = history_file {
            create_history_dir(path);
            if let Err(e) = editor.load_history(path) {
                debug!("No history loaded from {}: {}", path.display(), e);
            }
        }

        Ok(Self {
            editor,
            history_file,
        })
    }

    pub fn set_helper(&mut self, helper: ConsoleHelper) {
        self.editor.set_helper(Some(helper));
    }

    /// Read one line, recording non-empty lines in the history
    pub fn read(&mut self, prompt: &str) -> rustyline::Result<Input> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if self.history_file.is_some() && !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.trim());
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(err) => Err(err),
        }
    }

    pub fn save_history(&mut self) {
        if let Some(ref path) = self.history_file {
            if let Err(e) = self.editor.save_history(path) {
                warn!("Could not save history to {}: {}", path.display(), e);
            }
        }
    }
}

/// Create the directory of the history file; failures are logged and ignored
fn create_history_dir(path: &Path) -> bool {
    match path.parent() {
        Some(parent) => match std::fs::create_dir_all(parent) {
            Ok(()) => true,
            Err(e) => {
                debug!("Could not create history directory {}: {}", parent.display(), e);
                false
            }
        },
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_dir_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("osrframework").join("history.txt");

        assert!(create_history_dir(&path));
        assert!(dir.path().join("osrframework").is_dir());
    }

    #[test]
    fn test_unusable_history_dir_does_not_stop_the_editor() {
        let blocker = tempfile::NamedTempFile::new().unwrap();
        let path = blocker.path().join("history.txt");

        assert!(!create_history_dir(&path));
        assert!(LineEditor::new(Some(path)).is_ok());
    }
}
