//! CLI entrypoint for osrfconsole
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use osrf_application::ConsoleConfig;
use osrf_domain::{Record, ToolKind, profiles_from_records};
use osrf_infrastructure::{ConfigLoader, FileConfig, OsrfPaths, ProcessLookupTool};
use osrf_presentation::{Cli, Command, MainConsole, MaltegoFormatter};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration; problems are logged and the defaults used instead
    let config = if cli.no_config {
        info!("Configuration files disabled");
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load_or_defaults(cli.config.as_ref())
    };

    if cli.no_color || !config.console.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Some(Command::Transform { platform, input }) => transform(&platform, input.as_deref()),
        None => {
            info!("Starting osrfconsole");

            // === Dependency Injection ===
            let launcher = Arc::new(ProcessLookupTool::from_config(&config));
            for tool in ToolKind::ALL {
                if !launcher.is_available(tool) {
                    info!("{} not found on PATH ({})", tool, launcher.executable(tool));
                }
            }

            let console = MainConsole::new(console_config(&config), launcher);
            console.run().await?;
            Ok(())
        }
    }
}

/// Resolve the file configuration into what the consoles need
fn console_config(config: &FileConfig) -> ConsoleConfig {
    let mut console = ToolKind::ALL
        .iter()
        .fold(ConsoleConfig::new(), |console, tool| {
            console.with_defaults(*tool, config.tool_defaults(*tool))
        });

    if let Some(paths) = OsrfPaths::discover() {
        for (description, path) in paths.listing() {
            console = console.with_location(description, path);
        }
    }

    let history_file = if config.console.history {
        config
            .console
            .history_file
            .as_ref()
            .map(PathBuf::from)
            .or_else(OsrfPaths::history_file)
    } else {
        None
    };

    console.with_history_file(history_file)
}

/// Convert lookup records into a Maltego response on stdout
fn transform(platform: &str, input: Option<&Path>) -> Result<()> {
    let json = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let records: Vec<Record> =
        serde_json::from_str(&json).context("input is not a JSON array of records")?;
    let entities = profiles_from_records(platform, &records)?;
    info!("Transformed {} records from {}", entities.len(), platform);

    print!("{}", MaltegoFormatter::format(&entities));
    Ok(())
}
