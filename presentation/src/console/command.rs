//! Shell command parsing
//!
//! Turns one line typed at a prompt into a [`ShellCommand`]. The parser is
//! shared by the main menu and the tool consoles; each console decides which
//! commands it accepts.

/// Commands understood by a tool console
pub const TOOL_COMMANDS: [&str; 8] = ["back", "exit", "help", "info", "run", "set", "show", "unset"];

/// Commands understood by the main menu
pub const MAIN_COMMANDS: [&str; 4] = ["exit", "help", "info", "use"];

/// Targets of `show`
pub const SHOW_TARGETS: [&str; 2] = ["options", "command"];

/// One parsed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Empty,
    Set { option: String, value: String },
    Unset(String),
    Show(String),
    Run,
    Info,
    Back,
    Exit,
    Help(Option<String>),
    Use(String),
    /// A known command without its mandatory argument
    Usage(&'static str),
    Unknown(String),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "" => ShellCommand::Empty,
            "set" => match rest.split_once(char::is_whitespace) {
                Some((option, value)) => ShellCommand::Set {
                    option: option.to_string(),
                    value: value.trim().to_string(),
                },
                None if rest.is_empty() => ShellCommand::Usage(usage("set")),
                None => ShellCommand::Set {
                    option: rest.to_string(),
                    value: String::new(),
                },
            },
            "unset" if rest.is_empty() => ShellCommand::Usage(usage("unset")),
            "unset" => ShellCommand::Unset(first_word(rest)),
            "show" => ShellCommand::Show(rest.to_lowercase()),
            "run" => ShellCommand::Run,
            "info" => ShellCommand::Info,
            "back" => ShellCommand::Back,
            "exit" | "quit" => ShellCommand::Exit,
            "help" | "?" => ShellCommand::Help((!rest.is_empty()).then(|| first_word(rest))),
            "use" if rest.is_empty() => ShellCommand::Usage(usage("use")),
            "use" => ShellCommand::Use(rest.to_string()),
            other => ShellCommand::Unknown(other.to_string()),
        }
    }
}

fn first_word(text: &str) -> String {
    text.split_whitespace().next().unwrap_or_default().to_string()
}

/// Usage line of a command
pub fn usage(command: &str) -> &'static str {
    match command {
        "set" => "set OPTION VALUE",
        "unset" => "unset OPTION|all",
        "show" => "show options|command",
        "use" => "use UTIL",
        "help" => "help [COMMAND]",
        "run" => "run",
        "info" => "info",
        "back" => "back",
        "exit" => "exit",
        _ => "help",
    }
}

/// Help text of a command
pub fn help_text(command: &str) -> Option<&'static str> {
    let text = match command {
        "set" => {
            "Sets the value of an option. Lists are separated by spaces and must use the \
             accepted values of the option. You can check their values at any time by typing \
             'show options'."
        }
        "unset" => {
            "Resets an option to its default value. Type 'unset all' to reset every option \
             at once."
        }
        "show" => {
            "Shows information about the util: 'options' lists every option and its current \
             value, 'command' prints the equivalent command line."
        }
        "run" => "Launches the util with the current options.",
        "info" => "Shows all the information available about the current module.",
        "back" => "Unloads the current util and goes back to the main console.",
        "exit" => "Exits the osrfconsole.",
        "help" => "Lists the available commands or describes one of them.",
        "use" => {
            "Loads one of the framework's utils: domainfy, entify, mailfy, phonefy, searchfy \
             or usufy. Use <TAB> to autocomplete."
        }
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set() {
        assert_eq!(
            ShellCommand::parse("set PLATFORMS  twitter github "),
            ShellCommand::Set {
                option: "PLATFORMS".to_string(),
                value: "twitter github".to_string(),
            }
        );
        assert_eq!(
            ShellCommand::parse("set NICK"),
            ShellCommand::Set {
                option: "NICK".to_string(),
                value: String::new(),
            }
        );
        assert_eq!(ShellCommand::parse("set"), ShellCommand::Usage("set OPTION VALUE"));
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(ShellCommand::parse("   "), ShellCommand::Empty);
        assert_eq!(ShellCommand::parse("run"), ShellCommand::Run);
        assert_eq!(ShellCommand::parse("back"), ShellCommand::Back);
        assert_eq!(ShellCommand::parse("exit"), ShellCommand::Exit);
        assert_eq!(ShellCommand::parse("unset all"), ShellCommand::Unset("all".to_string()));
        assert_eq!(ShellCommand::parse("show OPTIONS"), ShellCommand::Show("options".to_string()));
        assert_eq!(ShellCommand::parse("use usufy"), ShellCommand::Use("usufy".to_string()));
        assert_eq!(ShellCommand::parse("help set"), ShellCommand::Help(Some("set".to_string())));
        assert_eq!(ShellCommand::parse("help"), ShellCommand::Help(None));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            ShellCommand::parse("launch now"),
            ShellCommand::Unknown("launch".to_string())
        );
    }

    #[test]
    fn test_every_command_has_help() {
        for command in TOOL_COMMANDS.iter().chain(MAIN_COMMANDS.iter()) {
            assert!(help_text(command).is_some(), "{command} has no help");
        }
    }
}
