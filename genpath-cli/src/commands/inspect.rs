//! Command to show every property of a path.

use crate::error::CliError;
use crate::utils::{format_report, parse_path, resolve_format, GlobalOptions};
use clap::Args;

/// Parse a path and print its report.
#[derive(Args)]
pub struct InspectCommand {
    /// Path to inspect
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl InspectCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = parse_path(&self.path)?;
        let format = resolve_format(global)?;

        println!("{}", format_report(format, &path)?);
        Ok(())
    }
}
