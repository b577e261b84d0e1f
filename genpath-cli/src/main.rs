//! Main entry point for the genpath CLI.
//!
//! This is the command-line interface for provider-agnostic generic file
//! paths. It exposes the path operations as subcommands:
//! - `inspect`, `normalize`: parse a path and show it
//! - `parent`, `child`, `ancestors`: derive related paths
//! - `relative`, `contains`, `relationship`: compare two paths
//! - `check`: validate paths against the configured schemes

mod cli;
mod commands;
mod error;
mod utils;

use clap::error::ErrorKind;
use clap::Parser;
use cli::Cli;
use error::CliError;
use utils::GlobalOptions;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => e.exit(),
            _ => {
                // Bad values on the command line are invalid arguments
                let _ = e.print();
                std::process::exit(CliError::InvalidArguments(e.to_string()).exit_code());
            }
        },
    };

    let logger = genpath::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_dir: cli.config_dir,
        format: cli.format,
        logger,
    };

    let result = match cli.command {
        cli::Command::Inspect(cmd) => cmd.execute(&global),
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Parent(cmd) => cmd.execute(&global),
        cli::Command::Child(cmd) => cmd.execute(&global),
        cli::Command::Ancestors(cmd) => cmd.execute(&global),
        cli::Command::Relative(cmd) => cmd.execute(&global),
        cli::Command::Contains(cmd) => cmd.execute(&global),
        cli::Command::Relationship(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet || !matches!(e, CliError::SemanticFailure(_)) {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
