//! Command to classify the relationship between two paths.

use crate::error::CliError;
use crate::utils::{parse_path, resolve_format, GlobalOptions};
use clap::Args;
use genpath::{OutputFormat, PathRelationship};
use serde::Serialize;

/// Classify how two paths relate in the provider hierarchy.
#[derive(Args)]
pub struct RelationshipCommand {
    /// First path
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Second path
    #[arg(value_name = "OTHER")]
    pub other: String,
}

#[derive(Serialize)]
struct RelationshipReport<'a> {
    path: &'a str,
    other: &'a str,
    relationship: String,
    description: String,
}

impl RelationshipCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = parse_path(&self.path)?;
        let other = parse_path(&self.other)?;

        let relationship = PathRelationship::between(&path, &other);
        let description = relationship.description(&path, &other);

        match resolve_format(global)? {
            OutputFormat::Human => {
                println!("{relationship}");
                if global.verbose {
                    println!("{description}");
                }
            }
            format => {
                let report = RelationshipReport {
                    path: path.as_str(),
                    other: other.as_str(),
                    relationship: relationship.to_string(),
                    description,
                };
                if format == OutputFormat::Json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    print!("{}", serde_yaml::to_string(&report)?);
                }
            }
        }

        Ok(())
    }
}
