//! Command to append segments to a path.

use crate::error::CliError;
use crate::utils::{parse_path, print_path, resolve_format, GlobalOptions};
use clap::Args;

/// Append one or more segments to a path, in order.
#[derive(Args)]
pub struct ChildCommand {
    /// Base path
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Segments to append
    #[arg(value_name = "SEGMENT", required = true)]
    pub segments: Vec<String>,
}

impl ChildCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut path = parse_path(&self.path)?;
        for segment in &self.segments {
            path = path.child(segment)?;
        }

        print_path(resolve_format(global)?, &path)
    }
}
