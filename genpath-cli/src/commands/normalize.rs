//! Command to print the normalized form of a path.

use crate::error::CliError;
use crate::utils::{parse_path, print_path, resolve_format, GlobalOptions};
use clap::Args;

/// Print the normalized form of a path.
///
/// The null path prints as an empty line.
#[derive(Args)]
pub struct NormalizeCommand {
    /// Path to normalize
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl NormalizeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = parse_path(&self.path)?;
        if path.as_str() != self.path {
            global
                .logger
                .debug(&format!("normalized '{}' to '{path}'", self.path));
        }

        print_path(resolve_format(global)?, &path)
    }
}
