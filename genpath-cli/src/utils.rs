//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across CLI commands: configuration
//! loading, path parsing and output formatting.

use crate::error::CliError;
use genpath::output::OutputFormatter;
use genpath::{Config, ConfigBuilder, GenericFilePath, Logger, OutputFormat, PathReport};
use std::path::PathBuf;

/// How the null path is shown where an empty line would be ambiguous.
pub const NULL_DISPLAY: &str = "<null>";

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the configuration directory location.
    pub config_dir: Option<PathBuf>,

    /// Output format requested on the command line.
    pub format: Option<OutputFormat>,

    /// Logger for diagnostics on stderr.
    pub logger: Logger,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. Configuration file (from `--config-dir` or `~/.genpath`)
/// 3. Built-in defaults
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref dir) = global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the output format: the `--format` flag wins over configuration.
pub fn resolve_format(global: &GlobalOptions) -> Result<OutputFormat, CliError> {
    match global.format {
        Some(format) => Ok(format),
        None => Ok(load_configuration(global)?.output_format()),
    }
}

/// Parse a raw path argument.
pub fn parse_path(raw: &str) -> Result<GenericFilePath, CliError> {
    GenericFilePath::parse(raw).map_err(CliError::from)
}

/// Show a path, naming the null path explicitly.
pub fn display_path(path: &GenericFilePath) -> &str {
    if path.is_null() {
        NULL_DISPLAY
    } else {
        path.as_str()
    }
}

/// Print a single resulting path.
///
/// Human output is the normalized string alone, so it composes in shell
/// pipelines; JSON and YAML print the full report of the path.
pub fn print_path(format: OutputFormat, path: &GenericFilePath) -> Result<(), CliError> {
    match format {
        OutputFormat::Human => println!("{path}"),
        _ => println!("{}", format_report(format, path)?),
    }
    Ok(())
}

/// Render the report of a path in the given format.
pub fn format_report(format: OutputFormat, path: &GenericFilePath) -> Result<String, CliError> {
    let formatter = format.create_formatter();
    formatter
        .format(&PathReport::from_path(path))
        .map_err(CliError::from)
}

/// Print a list of strings, one per line in human output.
pub fn print_list(format: OutputFormat, items: &[String]) -> Result<(), CliError> {
    match format {
        OutputFormat::Human => {
            for item in items {
                println!("{item}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(items)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(items)?),
    }
    Ok(())
}
