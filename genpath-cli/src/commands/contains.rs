//! Command to check whether a path contains another.

use crate::error::CliError;
use crate::utils::{display_path, parse_path, GlobalOptions};
use clap::Args;

/// Check whether a path contains another path.
///
/// Exits with status 0 when PATH is OTHER or one of its ancestors, and with
/// status 1 otherwise.
#[derive(Args)]
pub struct ContainsCommand {
    /// Candidate ancestor
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Candidate descendant
    #[arg(value_name = "OTHER")]
    pub other: String,

    /// Invert the check (fail if PATH contains OTHER)
    #[arg(long)]
    pub not: bool,
}

impl ContainsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = parse_path(&self.path)?;
        let other = parse_path(&self.other)?;

        let contained = path.contains(&other);
        let success = if self.not { !contained } else { contained };

        let (p, o) = (display_path(&path), display_path(&other));
        if success {
            if !global.quiet {
                if contained {
                    println!("{p} contains {o}");
                } else {
                    println!("{p} does not contain {o}");
                }
            }
            Ok(())
        } else if self.not {
            Err(CliError::SemanticFailure(format!("{p} contains {o}")))
        } else {
            Err(CliError::SemanticFailure(format!("{p} does not contain {o}")))
        }
    }
}
