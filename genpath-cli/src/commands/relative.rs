//! Command to print the segments of a path below a base.

use crate::error::CliError;
use crate::utils::{display_path, parse_path, print_list, resolve_format, GlobalOptions};
use clap::Args;

/// Print the segments of a path beyond a base path, one per line.
///
/// A path equal to the base prints nothing. A path outside the base is a
/// semantic failure.
#[derive(Args)]
pub struct RelativeCommand {
    /// Path to relativize
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Base path
    #[arg(long, value_name = "BASE")]
    pub base: String,
}

impl RelativeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = parse_path(&self.path)?;
        let base = parse_path(&self.base)?;

        let Some(segments) = path.relative_segments(&base) else {
            return Err(CliError::SemanticFailure(format!(
                "{} is not under {}",
                display_path(&path),
                display_path(&base)
            )));
        };

        print_list(resolve_format(global)?, segments)
    }
}
