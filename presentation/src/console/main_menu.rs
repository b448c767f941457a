//! Main menu console
//!
//! Prints the banner, loads tool consoles with `use <tool>` and lists the
//! configuration files with `info`. Each `use` builds a fresh
//! [`ToolConsole`] from the configured defaults.

use super::command::{MAIN_COMMANDS, ShellCommand, help_text, usage};
use super::completer::ConsoleHelper;
use super::editor::{Input, LineEditor};
use super::tool_console::{Flow, ToolConsole};
use crate::output::banner;
use crate::output::messages::{emphasis, error, info, title, warning};
use osrf_application::{ConsoleConfig, LookupToolPort};
use osrf_domain::ToolKind;
use std::io::{self, Write};
use std::sync::Arc;
use tracing::debug;

const PROMPT: &str = "osrf > ";

/// What the main loop should do after a line has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Continue,
    /// Enter the console of a tool
    Enter(ToolKind),
    Exit,
}

/// Top-level console of the application
pub struct MainConsole<L: LookupToolPort + ?Sized + 'static> {
    config: ConsoleConfig,
    launcher: Arc<L>,
    version: String,
}

impl<L: LookupToolPort + ?Sized + 'static> MainConsole<L> {
    pub fn new(config: ConsoleConfig, launcher: Arc<L>) -> Self {
        Self {
            config,
            launcher,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Text printed when the console starts
    pub fn intro(&self) -> String {
        format!(
            "{}\n{}\n\n{}",
            banner::banner(),
            banner::disclaimer(&self.version),
            banner::general_info()
        )
    }

    /// Fresh console for a tool, built from the configured defaults
    pub fn tool_console(&self, tool: ToolKind) -> ToolConsole<L> {
        ToolConsole::new(tool, &self.config.defaults_for(tool), self.launcher.clone())
    }

    /// Run the interactive session until `exit` or EOF
    pub async fn run(&self) -> rustyline::Result<()> {
        let mut editor = LineEditor::new(self.config.history_file.clone())?;
        let prompt = emphasis(PROMPT);
        let mut stdout = io::stdout();

        println!("{}", info(&self.intro()));

        loop {
            editor.set_helper(ConsoleHelper::main_menu());

            let line = match editor.read(&prompt)? {
                Input::Line(line) => line,
                Input::Interrupted => {
                    println!("^C");
                    continue;
                }
                Input::Eof => {
                    println!();
                    println!("{}", info("Exiting..."));
                    break;
                }
            };

            match self.handle_line(&line, &mut stdout)? {
                MenuAction::Continue => {}
                MenuAction::Enter(tool) => {
                    debug!("Entering {} console", tool);
                    let mut console = self.tool_console(tool);
                    if console.run(&mut editor).await? == Flow::Exit {
                        break;
                    }
                    debug!("Back from {} console", tool);
                }
                MenuAction::Exit => break,
            }
        }

        editor.save_history();
        Ok(())
    }

    /// Interpret one line typed at the main prompt
    pub fn handle_line<W: Write>(&self, line: &str, out: &mut W) -> io::Result<MenuAction> {
        match ShellCommand::parse(line) {
            ShellCommand::Empty => {}
            ShellCommand::Use(name) => match name.parse::<ToolKind>() {
                Ok(tool) => return Ok(MenuAction::Enter(tool)),
                Err(e) => {
                    debug!("{}", e);
                    writeln!(
                        out,
                        "{}",
                        warning("[!] Util is not correct. Try 'help use' to check the available options.")
                    )?;
                }
            },
            ShellCommand::Info => {
                writeln!(out, "{}", info(&banner::general_info()))?;
                writeln!(out, "{}", info(&banner::config_info(&self.config.locations)))?;
            }
            ShellCommand::Exit => {
                writeln!(out, "{}", info("Exiting..."))?;
                return Ok(MenuAction::Exit);
            }
            ShellCommand::Help(topic) => self.help(topic.as_deref(), out)?,
            ShellCommand::Usage(text) => writeln!(
                out,
                "{}",
                error(&format!(
                    "[!] ERROR: Not enough parameters provided. Usage: {}.",
                    text
                ))
            )?,
            ShellCommand::Unknown(word) => writeln!(
                out,
                "{}",
                warning(&format!(
                    "[!] Unknown command '{}'. Type 'help' to list the available commands.",
                    word
                ))
            )?,
            _ => writeln!(
                out,
                "{}",
                warning("[!] No util loaded. Type 'use <util>' to load one first.")
            )?,
        }
        Ok(MenuAction::Continue)
    }

    fn help<W: Write>(&self, topic: Option<&str>, out: &mut W) -> io::Result<()> {
        match topic {
            None => {
                writeln!(out, "{}", info("Documented commands (type help <topic>):"))?;
                writeln!(out, "{}", "=".repeat(40))?;
                for command in MAIN_COMMANDS {
                    writeln!(out, "  {}", usage(command))?;
                }
                Ok(())
            }
            Some(topic) => match help_text(topic).filter(|_| MAIN_COMMANDS.contains(&topic)) {
                Some(text) => {
                    writeln!(out, "{}", title(usage(topic)))?;
                    writeln!(out, "{}", text)
                }
                None => writeln!(out, "{}", warning(&format!("*** No help on {}", topic))),
            },
        }
    }
}
