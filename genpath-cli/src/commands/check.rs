//! Command to validate paths and their schemes.

use crate::error::CliError;
use crate::utils::{display_path, load_configuration, GlobalOptions};
use clap::Args;
use genpath::GenericFilePath;

/// Validate one or more paths.
///
/// Each path must parse. When `known_schemes` is configured, a path with a
/// scheme outside that list fails as well. Every path is checked and
/// reported; the first failure decides the exit status.
#[derive(Args)]
pub struct CheckCommand {
    /// Paths to validate
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

impl CheckCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut first_error: Option<CliError> = None;

        for raw in &self.paths {
            let outcome = match GenericFilePath::parse(raw) {
                Ok(path) if config.is_known_scheme(&path) => {
                    if !global.quiet {
                        println!("ok: {}", display_path(&path));
                    }
                    continue;
                }
                Ok(path) => CliError::SemanticFailure(format!(
                    "unknown scheme '{}' in {path}",
                    path.scheme().unwrap_or_default()
                )),
                Err(e) => CliError::from(e),
            };

            if !global.quiet {
                println!("fail: {raw}: {outcome}");
            }
            first_error.get_or_insert(outcome);
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
