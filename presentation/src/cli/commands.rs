//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for osrfconsole
#[derive(Parser, Debug)]
#[command(name = "osrfconsole")]
#[command(author, version, about = "OSRFramework console - drive the OSINT lookup utils interactively")]
#[command(long_about = r#"
OSRFConsole is a msfconsole-like shell around the OSRFramework utils
(domainfy, entify, mailfy, phonefy, searchfy and usufy).

Load a util with 'use <util>', configure it with 'set OPTION VALUE',
preview the equivalent command with 'show command' and launch it with 'run'.

Configuration files are loaded from (in priority order):
1. OSRF_* environment variables
2. --config <path>     Explicit config file
3. ./osrf.toml         Project-level config
4. ~/.config/osrframework/general.toml   Global config

Example:
  osrfconsole
  osrfconsole --no-color -vv
  usufy -n i3visio -e json | osrfconsole transform --platform twitter
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// One-shot commands run instead of the interactive console
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Convert lookup results (JSON) into a Maltego transform response
    Transform {
        /// Platform the records were found in (e.g. "Skype")
        #[arg(short, long, value_name = "NAME")]
        platform: String,

        /// JSON file with the records (reads stdin when omitted)
        #[arg(short, long, value_name = "FILE")]
        input: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactive_defaults() {
        let cli = Cli::try_parse_from(["osrfconsole"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.no_config);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_global_flags() {
        let cli =
            Cli::try_parse_from(["osrfconsole", "-vv", "--no-color", "--config", "my.toml"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));
    }

    #[test]
    fn test_transform_subcommand() {
        let cli = Cli::try_parse_from([
            "osrfconsole",
            "transform",
            "--platform",
            "Skype",
            "--input",
            "results.json",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Transform {
                platform: "Skype".to_string(),
                input: Some(PathBuf::from("results.json")),
            })
        );
    }

    #[test]
    fn test_transform_requires_platform() {
        assert!(Cli::try_parse_from(["osrfconsole", "transform"]).is_err());
    }
}
