//! Command to print the parent of a path.

use crate::error::CliError;
use crate::utils::{display_path, parse_path, print_path, resolve_format, GlobalOptions};
use clap::Args;

/// Print the parent of a path.
#[derive(Args)]
pub struct ParentCommand {
    /// Path whose parent to print
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl ParentCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = parse_path(&self.path)?;

        match path.parent() {
            Some(parent) => print_path(resolve_format(global)?, &parent),
            None => Err(CliError::SemanticFailure(format!(
                "{} has no parent",
                display_path(&path)
            ))),
        }
    }
}
