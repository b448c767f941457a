//! Tab completion for the consoles
//!
//! [`ConsoleHelper`] is the rustyline helper installed on the shared editor.
//! The main menu and each tool console install their own scope; the
//! completion logic itself lives in [`ConsoleHelper::candidates`] so it can
//! be tested without a terminal.

use super::command::{MAIN_COMMANDS, SHOW_TARGETS, TOOL_COMMANDS};
use osrf_domain::{OptionRegistry, ToolKind, UNSET_ALL};
use rustyline::Helper;
use rustyline::completion::Completer;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;

/// Option name with the values it accepts
#[derive(Debug, Clone, PartialEq, Eq)]
struct OptionCompletion {
    name: String,
    allowed_values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum CompletionScope {
    Main,
    Tool(Vec<OptionCompletion>),
}

/// rustyline helper providing console completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleHelper {
    scope: CompletionScope,
}

impl ConsoleHelper {
    /// Completion for the main menu (`use <tool>`)
    pub fn main_menu() -> Self {
        Self {
            scope: CompletionScope::Main,
        }
    }

    /// Completion for a tool console over its option names and allowed values
    pub fn tool(registry: &OptionRegistry) -> Self {
        Self {
            scope: CompletionScope::Tool(
                registry
                    .iter()
                    .map(|option| OptionCompletion {
                        name: option.name.clone(),
                        allowed_values: option.allowed_values.clone(),
                    })
                    .collect(),
            ),
        }
    }

    /// Start of the word being completed and its candidates.
    ///
    /// `line` is the text before the cursor.
    pub fn candidates(&self, line: &str) -> (usize, Vec<String>) {
        let start = line
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        let word = &line[start..];
        let previous: Vec<&str> = line[..start].split_whitespace().collect();

        let candidates = match (&self.scope, previous.as_slice()) {
            (CompletionScope::Main, []) => by_lowercase_prefix(MAIN_COMMANDS, word),
            (CompletionScope::Main, ["use"]) => by_lowercase_prefix(ToolKind::names(), word),
            (CompletionScope::Main, ["help"]) => by_lowercase_prefix(MAIN_COMMANDS, word),
            (CompletionScope::Tool(_), []) => by_lowercase_prefix(TOOL_COMMANDS, word),
            (CompletionScope::Tool(_), ["help"]) => by_lowercase_prefix(TOOL_COMMANDS, word),
            (CompletionScope::Tool(_), ["show"]) => by_lowercase_prefix(SHOW_TARGETS, word),
            (CompletionScope::Tool(options), ["set"]) => {
                by_case_folded_prefix(options.iter().map(|o| o.name.as_str()), word)
            }
            (CompletionScope::Tool(options), ["unset"]) => by_case_folded_prefix(
                std::iter::once(UNSET_ALL).chain(options.iter().map(|o| o.name.as_str())),
                word,
            ),
            (CompletionScope::Tool(options), ["set", option, ..]) => options
                .iter()
                .find(|o| o.name.eq_ignore_ascii_case(option))
                .map(|o| by_lowercase_prefix(o.allowed_values.iter().map(String::as_str), word))
                .unwrap_or_default(),
            _ => Vec::new(),
        };

        (start, candidates)
    }
}

/// Candidates starting with the lower-cased word
fn by_lowercase_prefix<'a>(
    candidates: impl IntoIterator<Item = &'a str>,
    word: &str,
) -> Vec<String> {
    let prefix = word.to_lowercase();
    candidates
        .into_iter()
        .filter(|c| c.starts_with(&prefix))
        .map(String::from)
        .collect()
}

/// Candidates whose case-folded form starts with the case-folded word
fn by_case_folded_prefix<'a>(
    candidates: impl IntoIterator<Item = &'a str>,
    word: &str,
) -> Vec<String> {
    let prefix = word.to_lowercase();
    candidates
        .into_iter()
        .filter(|c| c.to_lowercase().starts_with(&prefix))
        .map(String::from)
        .collect()
}

impl Completer for ConsoleHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        Ok(self.candidates(&line[..pos]))
    }
}

impl Hinter for ConsoleHelper {
    type Hint = String;
}

impl Highlighter for ConsoleHelper {}

impl Validator for ConsoleHelper {}

impl Helper for ConsoleHelper {}
