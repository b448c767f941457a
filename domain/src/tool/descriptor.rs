//! Per-tool option tables and argument-vector builders
//!
//! Each [`ToolKind`] knows how to build a fresh [`OptionRegistry`] from a
//! [`ToolDefaults`] snapshot and how to turn the current option values into
//! the argument vector its own command-line parser expects:
//!
//! | Tool | Argument vector |
//! |------|-----------------|
//! | domainfy | `-n <nick...> -t <tld...> -T <threads> -o <output> -e <ext...> [-u <tld>]` |
//! | entify | `-u <url> -r <regexp...> -o <output> -e <ext...>` |
//! | mailfy | `-n <nick...> -p <domain...> -T <threads> -o <output> -e <ext...>` |
//! | phonefy | `-n <number...> -p <platform...> -o <output> -e <ext...>` |
//! | searchfy | `-q <query...> -p <platform...> -o <output> -e <ext...>` |
//! | usufy | `-n <nick...> -p <platform...> -T <threads> -o <output> -e <ext...>` |

use super::catalog;
use super::defaults::ToolDefaults;
use super::kind::ToolKind;
use crate::option::{ConsoleOption, OptionKind, OptionRegistry, OptionValue};

pub const NICK: &str = "NICK";
pub const NUMBER: &str = "NUMBER";
pub const QUERY: &str = "QUERY";
pub const URL: &str = "URL";
pub const PLATFORMS: &str = "PLATFORMS";
pub const TLD: &str = "TLD";
pub const REGEXP: &str = "REGEXP";
pub const THREADS: &str = "THREADS";
pub const OUTPUT: &str = "OUTPUT";
pub const EXTENSION: &str = "EXTENSION";
pub const USER_DEFINED: &str = "USER_DEFINED";

/// Annotation appended to the command line while required options are unset
pub const MISSING_REQUIRED_NOTE: &str =
    "# NOTE: all the required parameters are not set. Option '-h' is being shown.";

fn threads(defaults: &ToolDefaults) -> ConsoleOption {
    ConsoleOption::new(THREADS, "Number of threads to use.", OptionKind::Integer)
        .with_default(OptionValue::Integer(defaults.threads))
}

fn output(defaults: &ToolDefaults) -> ConsoleOption {
    ConsoleOption::new(
        OUTPUT,
        "The path to the output folder where the files will be created.",
        OptionKind::Text,
    )
    .with_default(OptionValue::text(defaults.output_folder.clone()))
}

fn extension(defaults: &ToolDefaults) -> ConsoleOption {
    ConsoleOption::new(
        EXTENSION,
        "The default extension of the files to be written.",
        OptionKind::List,
    )
    .with_default(OptionValue::list(defaults.extension.clone()))
    .with_allowed_values(catalog::EXTENSIONS.iter().copied())
}

fn selection(
    name: &str,
    description: &str,
    defaults: &ToolDefaults,
    allowed: &[&str],
) -> ConsoleOption {
    ConsoleOption::new(name, description, OptionKind::List)
        .with_default(OptionValue::list(defaults.selection.clone()))
        .with_allowed_values(allowed.iter().copied())
}

fn target(name: &str, description: &str, kind: OptionKind) -> ConsoleOption {
    ConsoleOption::new(name, description, kind).required()
}

impl ToolKind {
    /// One-line summary used by the main menu banner
    pub fn summary(&self) -> String {
        match self {
            ToolKind::Usufy => format!(
                "a tool that verifies if a username exists in {} platforms.",
                catalog::count(catalog::USUFY_PLATFORMS)
            ),
            ToolKind::Mailfy => format!(
                "a tool to check if a username has been registered in up to {} email providers.",
                catalog::count(catalog::EMAIL_DOMAINS)
            ),
            ToolKind::Searchfy => format!(
                "a tool to look for profiles using full names and other info in {} platforms.",
                catalog::count(catalog::SEARCHFY_PLATFORMS)
            ),
            ToolKind::Domainfy => format!(
                "a tool to check the existence of a given domain in up to {} different TLD groups.",
                catalog::count(catalog::TLD_GROUPS)
            ),
            ToolKind::Phonefy => format!(
                "a tool that checks if a phone number has been linked to spam practices in {} platforms.",
                catalog::count(catalog::PHONEFY_PLATFORMS)
            ),
            ToolKind::Entify => format!(
                "a util to look for regular expressions using {} patterns.",
                catalog::count(catalog::REGEXPS)
            ),
        }
    }

    /// Catalog the tool's selection option (platforms, domains, TLDs, regexps) draws from
    pub fn selection_catalog(&self) -> &'static [&'static str] {
        match self {
            ToolKind::Domainfy => catalog::TLD_GROUPS,
            ToolKind::Entify => catalog::REGEXPS,
            ToolKind::Mailfy => catalog::EMAIL_DOMAINS,
            ToolKind::Phonefy => catalog::PHONEFY_PLATFORMS,
            ToolKind::Searchfy => catalog::SEARCHFY_PLATFORMS,
            ToolKind::Usufy => catalog::USUFY_PLATFORMS,
        }
    }

    /// Build a fresh option registry for this tool
    pub fn registry(&self, defaults: &ToolDefaults) -> OptionRegistry {
        match self {
            ToolKind::Domainfy => OptionRegistry::new()
                .register(target(NICK, "Nick to be verified.", OptionKind::List))
                .register(selection(
                    TLD,
                    "Types of TLD to be verified.",
                    defaults,
                    self.selection_catalog(),
                ))
                .register(threads(defaults))
                .register(output(defaults))
                .register(extension(defaults))
                .register(ConsoleOption::new(
                    USER_DEFINED,
                    "Other TLD to be verified. Note that it should start with a '.'.",
                    OptionKind::Text,
                )),
            ToolKind::Entify => OptionRegistry::new()
                .register(target(URL, "The URL to be checked.", OptionKind::Text))
                .register(selection(
                    REGEXP,
                    "The regular expressions to be checked.",
                    defaults,
                    self.selection_catalog(),
                ))
                .register(output(defaults))
                .register(extension(defaults)),
            ToolKind::Mailfy => OptionRegistry::new()
                .register(target(NICK, "Alias to be verified.", OptionKind::List))
                .register(selection(
                    PLATFORMS,
                    "Platforms to be checked.",
                    defaults,
                    self.selection_catalog(),
                ))
                .register(threads(defaults))
                .register(output(defaults))
                .register(extension(defaults)),
            ToolKind::Phonefy => OptionRegistry::new()
                .register(target(NUMBER, "Numbers to be verified.", OptionKind::List))
                .register(selection(
                    PLATFORMS,
                    "Platforms to be checked.",
                    defaults,
                    self.selection_catalog(),
                ))
                .register(output(defaults))
                .register(extension(defaults)),
            ToolKind::Searchfy => OptionRegistry::new()
                .register(target(
                    QUERY,
                    "Query to be verified. Escape \" and '.",
                    OptionKind::List,
                ))
                .register(selection(
                    PLATFORMS,
                    "Platforms to be checked.",
                    defaults,
                    self.selection_catalog(),
                ))
                .register(output(defaults))
                .register(extension(defaults)),
            ToolKind::Usufy => OptionRegistry::new()
                .register(target(NICK, "Alias to be verified.", OptionKind::List))
                .register(selection(
                    PLATFORMS,
                    "Platforms to be checked.",
                    defaults,
                    self.selection_catalog(),
                ))
                .register(threads(defaults))
                .register(output(defaults))
                .register(extension(defaults)),
        }
    }

    /// Build the argument vector for the tool's own parser.
    ///
    /// Callers must check [`OptionRegistry::all_required_satisfied`] first;
    /// an unset required option yields a flag with no values.
    pub fn arguments(&self, registry: &OptionRegistry) -> Vec<String> {
        let mut args = Vec::new();
        let mut push = |flag: &str, name: &str| {
            args.push(flag.to_string());
            args.extend(registry.tokens(name));
        };

        match self {
            ToolKind::Domainfy => {
                push("-n", NICK);
                push("-t", TLD);
                push("-T", THREADS);
                push("-o", OUTPUT);
                push("-e", EXTENSION);
                if registry.value(USER_DEFINED).is_some() {
                    push("-u", USER_DEFINED);
                }
            }
            ToolKind::Entify => {
                push("-u", URL);
                push("-r", REGEXP);
                push("-o", OUTPUT);
                push("-e", EXTENSION);
            }
            ToolKind::Mailfy | ToolKind::Usufy => {
                push("-n", NICK);
                push("-p", PLATFORMS);
                push("-T", THREADS);
                push("-o", OUTPUT);
                push("-e", EXTENSION);
            }
            ToolKind::Phonefy => {
                push("-n", NUMBER);
                push("-p", PLATFORMS);
                push("-o", OUTPUT);
                push("-e", EXTENSION);
            }
            ToolKind::Searchfy => {
                push("-q", QUERY);
                push("-p", PLATFORMS);
                push("-o", OUTPUT);
                push("-e", EXTENSION);
            }
        }

        args
    }

    /// Shell command equivalent to the current configuration
    pub fn command_line(&self, registry: &OptionRegistry) -> String {
        if registry.all_required_satisfied() {
            let args = self.arguments(registry);
            format!("{} {}", self.name(), shell_words::join(&args))
        } else {
            format!("{} -h  {}", self.name(), MISSING_REQUIRED_NOTE)
        }
    }
}
