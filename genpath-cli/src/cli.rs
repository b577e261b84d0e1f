//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AncestorsCommand, CheckCommand, ChildCommand, CompletionsCommand, ContainsCommand,
    InspectCommand, NormalizeCommand, ParentCommand, RelationshipCommand, RelativeCommand,
};
use clap::{Parser, Subcommand};
use genpath::OutputFormat;
use std::path::PathBuf;

/// Command-line tool for parsing and relating generic file paths.
#[derive(Parser)]
#[command(name = "genpath")]
#[command(version, about = "Parse and relate generic file paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the configuration directory location
    #[arg(long, value_name = "PATH", global = true, env = "GENPATH_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Output format (human, json, yaml)
    #[arg(long, value_name = "FORMAT", global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show every property of a path
    Inspect(InspectCommand),

    /// Print the normalized form of a path
    Normalize(NormalizeCommand),

    /// Print the parent of a path
    Parent(ParentCommand),

    /// Append segments to a path
    Child(ChildCommand),

    /// List the ancestors of a path, nearest first
    Ancestors(AncestorsCommand),

    /// Print the segments of a path below a base
    Relative(RelativeCommand),

    /// Check whether a path contains another
    Contains(ContainsCommand),

    /// Classify the relationship between two paths
    Relationship(RelationshipCommand),

    /// Validate paths and their schemes
    Check(CheckCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
