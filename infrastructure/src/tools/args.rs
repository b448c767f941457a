//! Argument parsers of the lookup tools
//!
//! Mirrors of the command lines each tool accepts. The console validates
//! the argument vector it built with these parsers before launching the
//! tool, so a malformed vector is reported at the console instead of
//! inside the tool.

use clap::Parser;
use clap::builder::PossibleValuesParser;
use osrf_domain::ToolKind;
use osrf_domain::catalog;
use osrf_domain::tool::defaults::{DEFAULT_EXTENSION, DEFAULT_OUTPUT_FOLDER, DEFAULT_THREADS};

/// Output options shared by every tool
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct OutputArgs {
    /// Path to the output folder where the results will be stored
    #[arg(short = 'o', long = "output-folder", default_value = DEFAULT_OUTPUT_FOLDER)]
    pub output_folder: String,

    /// Extensions of the files to be written
    #[arg(
        short = 'e',
        long = "extension",
        num_args = 1..,
        default_value = DEFAULT_EXTENSION,
        value_parser = PossibleValuesParser::new(catalog::EXTENSIONS.iter().copied())
    )]
    pub extension: Vec<String>,
}

/// domainfy: checks whether nicks are registered as domains
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "domainfy", about = "Checks the existence of a given domain in several TLDs")]
pub struct DomainfyArgs {
    /// Nicks to be checked
    #[arg(short = 'n', long = "nicks", num_args = 1.., required = true)]
    pub nicks: Vec<String>,

    /// TLD groups to be checked
    #[arg(
        short = 't',
        long = "tlds",
        num_args = 1..,
        default_value = "global",
        value_parser = PossibleValuesParser::new(catalog::TLD_GROUPS.iter().copied())
    )]
    pub tlds: Vec<String>,

    /// Number of threads to use
    #[arg(short = 'T', long = "threads", default_value_t = DEFAULT_THREADS,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub threads: u32,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Additional TLD to be checked (starting with '.')
    #[arg(short = 'u', long = "user-defined")]
    pub user_defined: Option<String>,
}

/// entify: looks for regular expressions in a URL
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "entify", about = "Looks for regular expressions in a web page")]
pub struct EntifyArgs {
    /// URL to be processed
    #[arg(short = 'u', long = "url", required = true)]
    pub url: String,

    /// Regular expressions to look for
    #[arg(
        short = 'r',
        long = "regexp",
        num_args = 1..,
        default_value = "all",
        value_parser = PossibleValuesParser::new(catalog::REGEXPS.iter().copied())
    )]
    pub regexp: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// mailfy: checks whether nicks own mailboxes
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "mailfy", about = "Checks if a username has been registered in email providers")]
pub struct MailfyArgs {
    /// Nicks to be checked
    #[arg(short = 'n', long = "nicks", num_args = 1.., required = true)]
    pub nicks: Vec<String>,

    /// E-mail domains to be checked
    #[arg(
        short = 'p',
        long = "platforms",
        num_args = 1..,
        default_value = "all",
        value_parser = PossibleValuesParser::new(catalog::EMAIL_DOMAINS.iter().copied())
    )]
    pub platforms: Vec<String>,

    /// Number of threads to use
    #[arg(short = 'T', long = "threads", default_value_t = DEFAULT_THREADS,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub threads: u32,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// phonefy: checks whether numbers are linked to spam reports
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "phonefy", about = "Checks if phone numbers have been linked to spam practices")]
pub struct PhonefyArgs {
    /// Phone numbers to be checked
    #[arg(short = 'n', long = "numbers", num_args = 1.., required = true)]
    pub numbers: Vec<String>,

    /// Platforms to be checked
    #[arg(
        short = 'p',
        long = "platforms",
        num_args = 1..,
        default_value = "all",
        value_parser = PossibleValuesParser::new(catalog::PHONEFY_PLATFORMS.iter().copied())
    )]
    pub platforms: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// searchfy: looks for profiles with free-text queries
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "searchfy", about = "Looks for profiles using full names and other info")]
pub struct SearchfyArgs {
    /// Query terms
    #[arg(short = 'q', long = "queries", num_args = 1.., required = true)]
    pub queries: Vec<String>,

    /// Platforms to be queried
    #[arg(
        short = 'p',
        long = "platforms",
        num_args = 1..,
        default_value = "all",
        value_parser = PossibleValuesParser::new(catalog::SEARCHFY_PLATFORMS.iter().copied())
    )]
    pub platforms: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// usufy: checks whether usernames exist in platforms
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "usufy", about = "Verifies if a username exists in several platforms")]
pub struct UsufyArgs {
    /// Nicks to be checked
    #[arg(short = 'n', long = "nicks", num_args = 1.., required = true)]
    pub nicks: Vec<String>,

    /// Platforms to be checked
    #[arg(
        short = 'p',
        long = "platforms",
        num_args = 1..,
        default_value = "all",
        value_parser = PossibleValuesParser::new(catalog::USUFY_PLATFORMS.iter().copied())
    )]
    pub platforms: Vec<String>,

    /// Number of threads to use
    #[arg(short = 'T', long = "threads", default_value_t = DEFAULT_THREADS,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub threads: u32,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Parsed command line of any tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolArguments {
    Domainfy(DomainfyArgs),
    Entify(EntifyArgs),
    Mailfy(MailfyArgs),
    Phonefy(PhonefyArgs),
    Searchfy(SearchfyArgs),
    Usufy(UsufyArgs),
}

impl ToolArguments {
    /// Parse an argument vector (without program name) with the tool's parser
    pub fn parse(tool: ToolKind, arguments: &[String]) -> Result<Self, clap::Error> {
        let argv = std::iter::once(tool.name().to_string()).chain(arguments.iter().cloned());

        Ok(match tool {
            ToolKind::Domainfy => Self::Domainfy(DomainfyArgs::try_parse_from(argv)?),
            ToolKind::Entify => Self::Entify(EntifyArgs::try_parse_from(argv)?),
            ToolKind::Mailfy => Self::Mailfy(MailfyArgs::try_parse_from(argv)?),
            ToolKind::Phonefy => Self::Phonefy(PhonefyArgs::try_parse_from(argv)?),
            ToolKind::Searchfy => Self::Searchfy(SearchfyArgs::try_parse_from(argv)?),
            ToolKind::Usufy => Self::Usufy(UsufyArgs::try_parse_from(argv)?),
        })
    }

    pub fn tool(&self) -> ToolKind {
        match self {
            Self::Domainfy(_) => ToolKind::Domainfy,
            Self::Entify(_) => ToolKind::Entify,
            Self::Mailfy(_) => ToolKind::Mailfy,
            Self::Phonefy(_) => ToolKind::Phonefy,
            Self::Searchfy(_) => ToolKind::Searchfy,
            Self::Usufy(_) => ToolKind::Usufy,
        }
    }

    pub fn output(&self) -> &OutputArgs {
        match self {
            Self::Domainfy(a) => &a.output,
            Self::Entify(a) => &a.output,
            Self::Mailfy(a) => &a.output,
            Self::Phonefy(a) => &a.output,
            Self::Searchfy(a) => &a.output,
            Self::Usufy(a) => &a.output,
        }
    }
}
