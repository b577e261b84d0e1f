//! Command to list the ancestors of a path.

use crate::error::CliError;
use crate::utils::{display_path, parse_path, print_list, resolve_format, GlobalOptions};
use clap::Args;

/// List every ancestor of a path, nearest first.
///
/// The list always ends with the null path, shown as `<null>`.
#[derive(Args)]
pub struct AncestorsCommand {
    /// Path whose ancestors to list
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl AncestorsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = parse_path(&self.path)?;
        let ancestors: Vec<String> = path
            .ancestors()
            .map(|ancestor| display_path(&ancestor).to_string())
            .collect();

        global
            .logger
            .debug(&format!("{} has {} ancestors", display_path(&path), ancestors.len()));

        print_list(resolve_format(global)?, &ancestors)
    }
}
