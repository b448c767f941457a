//! Per-tool console
//!
//! One generic shell for every lookup tool. A [`ToolConsole`] owns a fresh
//! [`OptionRegistry`] built from the tool's defaults and interprets `set`,
//! `unset`, `show`, `info`, `run`, `back`, `exit` and `help` against it.

use super::command::{ShellCommand, TOOL_COMMANDS, help_text, usage};
use super::completer::ConsoleHelper;
use super::editor::{Input, LineEditor};
use crate::output::messages::{emphasis, error, info, success, title, warning};
use osrf_application::{LookupToolPort, RunToolError, RunToolUseCase, ToolDispatchError};
use osrf_domain::{OptionRegistry, ToolDefaults, ToolKind, UNSET_ALL};
use std::io::{self, Write};
use std::sync::Arc;

/// Width of the option column in `show options`
const OPTION_COLUMN: usize = 14;

/// What the caller should do after a line has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// Leave this console and return to the caller
    Back,
    /// Terminate the program
    Exit,
}

/// Interactive console of one lookup tool
pub struct ToolConsole<L: LookupToolPort + ?Sized + 'static> {
    tool: ToolKind,
    registry: OptionRegistry,
    use_case: RunToolUseCase<L>,
}

impl<L: LookupToolPort + ?Sized + 'static> ToolConsole<L> {
    pub fn new(tool: ToolKind, defaults: &ToolDefaults, launcher: Arc<L>) -> Self {
        Self {
            tool,
            registry: tool.registry(defaults),
            use_case: RunToolUseCase::new(launcher),
        }
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    /// Completion helper over this console's options
    pub fn helper(&self) -> ConsoleHelper {
        ConsoleHelper::tool(&self.registry)
    }

    /// Run the interactive loop until `back`, `exit` or EOF
    pub async fn run(&mut self, editor: &mut LineEditor) -> rustyline::Result<Flow> {
        editor.set_helper(self.helper());
        let prompt = emphasis(&self.tool.prompt());
        let mut stdout = io::stdout();

        loop {
            match editor.read(&prompt)? {
                Input::Line(line) => match self.handle_line(&line, &mut stdout).await? {
                    Flow::Continue => continue,
                    flow => return Ok(flow),
                },
                Input::Interrupted => {
                    println!("^C");
                }
                Input::Eof => {
                    println!();
                    return Ok(Flow::Back);
                }
            }
        }
    }

    /// Interpret one line
    pub async fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        match ShellCommand::parse(line) {
            ShellCommand::Empty => {}
            ShellCommand::Set { option, value } => self.set(&option, &value, out)?,
            ShellCommand::Unset(option) => self.unset(&option, out)?,
            ShellCommand::Show(target) => self.show(&target, out)?,
            ShellCommand::Info => {
                writeln!(out, "{}", info("Displaying module information."))?;
                self.show_options(out)?;
                self.show_command(out)?;
            }
            ShellCommand::Run => self.run_tool(out).await?,
            ShellCommand::Back => return Ok(Flow::Back),
            ShellCommand::Exit => {
                writeln!(out, "{}", info("Exiting the program..."))?;
                return Ok(Flow::Exit);
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
            ShellCommand::Use(_) => writeln!(
                out,
                "{}",
                warning("[!] Type 'back' to return to the main console before loading another util.")
            )?,
            ShellCommand::Unknown(word) => writeln!(
                out,
                "{}",
                warning(&format!(
                    "[!] Unknown command '{}'. Type 'help' to list the available commands.",
                    word
                ))
            )?,
        }
        Ok(Flow::Continue)
    }

    fn set<W: Write>(&mut self, option: &str, value: &str, out: &mut W) -> io::Result<()> {
        match self.registry.set(option, value) {
            Ok(option) => writeln!(
                out,
                "{}",
                info(&format!("{}={}", option.name, option.current_display()))
            ),
            Err(e) if e.is_usage_error() => {
                writeln!(
                    out,
                    "{}",
                    error(&format!(
                        "[!] ERROR: Not enough parameters provided. Usage: {}.",
                        usage("set")
                    ))
                )?;
                writeln!(out, "{}", error(&e.to_string()))
            }
            Err(e) => writeln!(out, "{}", error(&format!("[!] ERROR: {}", e))),
        }
    }

    fn unset<W: Write>(&mut self, option: &str, out: &mut W) -> io::Result<()> {
        if let Err(e) = self.registry.unset(option) {
            return writeln!(out, "{}", error(&format!("[!] ERROR: {}", e)));
        }

        if option.eq_ignore_ascii_case(UNSET_ALL) {
            writeln!(out, "{}", info("All parameters reset to their default values."))
        } else {
            match self.registry.get(option) {
                Ok(option) => writeln!(
                    out,
                    "{}",
                    info(&format!(
                        "{} reset to '{}'.",
                        option.name,
                        option.default_display()
                    ))
                ),
                Err(e) => writeln!(out, "{}", error(&format!("[!] ERROR: {}", e))),
            }
        }
    }

    fn show<W: Write>(&self, target: &str, out: &mut W) -> io::Result<()> {
        match target {
            "options" => self.show_options(out),
            "command" => self.show_command(out),
            _ => writeln!(
                out,
                "{}",
                warning(&format!("[!] Usage: {}.", usage("show")))
            ),
        }
    }

    fn show_options<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "{}",
            info(&format!(
                "Defining the different options for util {}...",
                self.tool
            ))
        )?;
        for row in self.registry.describe() {
            let label = format!("{}{}", row.name, if row.required { " (*)." } else { "." });
            writeln!(
                out,
                "{}",
                info(&format!("\t- {:<width$}{}", label, row.description, width = OPTION_COLUMN))
            )?;
        }

        writeln!(
            out,
            "{}",
            info(&format!(
                "Showing the current state of the options for util {}...",
                self.tool
            ))
        )?;
        for option in self.registry.iter() {
            let label = format!("{}{}: ", option.name, if option.required { " (*)" } else { "" });
            writeln!(
                out,
                "{}",
                info(&format!(
                    "\t- {:<width$}{}",
                    label,
                    option.current_display(),
                    width = OPTION_COLUMN
                ))
            )?;
        }
        Ok(())
    }

    fn show_command<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(
            out,
            "{}{}\n",
            info("Equivalent command to be launched to imitate the current configuration:\n\t$ "),
            title(&self.tool.command_line(&self.registry))
        )
    }

    fn help<W: Write>(&self, topic: Option<&str>, out: &mut W) -> io::Result<()> {
        match topic {
            None => {
                writeln!(out, "{}", info("Documented commands (type help <topic>):"))?;
                writeln!(out, "{}", "-".repeat(40))?;
                for command in TOOL_COMMANDS {
                    writeln!(out, "  {:<28}", usage(command))?;
                }
                Ok(())
            }
            Some(topic) => match help_text(topic).filter(|_| TOOL_COMMANDS.contains(&topic)) {
                Some(text) => {
                    writeln!(out, "{}", title(usage(topic)))?;
                    writeln!(out, "{}", text)
                }
                None => writeln!(out, "{}", warning(&format!("*** No help on {}", topic))),
            },
        }
    }

    /// Dispatch protocol of `run`
    async fn run_tool<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", info("Collecting the options set by the user..."))?;

        let invocation = match self.use_case.prepare(self.tool, &self.registry) {
            Ok(invocation) => invocation,
            Err(e @ RunToolError::MissingRequired(_)) => {
                writeln!(out, "{}", error(&format!("[!] ERROR. {}", e)))?;
                return self.show_options(out);
            }
            Err(e) => {
                self.report_failure(&e, out)?;
                return writeln!(out, "{}", success("Execution ended."));
            }
        };

        writeln!(
            out,
            "{}{}",
            info(&format!(
                "Launching {} with the following parameters: ",
                self.tool
            )),
            emphasis(&format!("{:?}", invocation.arguments))
        )?;
        out.flush()?;

        if let Err(e) = self.use_case.launch(&invocation).await {
            self.report_failure(&e, out)?;
        }
        writeln!(out, "{}", success("Execution ended."))
    }

    fn report_failure<W: Write>(&self, e: &RunToolError, out: &mut W) -> io::Result<()> {
        if let RunToolError::Dispatch(ToolDispatchError::Interrupted(tool)) = e {
            return writeln!(out, "{}", warning(&format!("[!] {} was interrupted.", tool)));
        }
        writeln!(
            out,
            "{}",
            error(
                "[!] ERROR. Something happened when launching the utility. Type 'show options' to check the parameters."
            )
        )?;
        writeln!(out, "{}", error(&format!("Traceback: {}", e)))
    }
}
