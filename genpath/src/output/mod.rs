//! Output formatting for path reports.
//!
//! This module renders a [`PathReport`], a serializable summary of one
//! [`GenericFilePath`], as human-readable text, JSON or YAML.

mod formatters;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::path::GenericFilePath;
use crate::{Error, Result};

pub use formatters::{HumanFormatter, JsonFormatter, YamlFormatter};

/// Trait for formatting path reports into different output formats.
pub trait OutputFormatter {
    /// Format the given report into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be serialized.
    fn format(&self, report: &PathReport) -> Result<String>;
}

/// Available output formats.
///
/// # Examples
///
/// ```
/// use genpath::OutputFormat;
///
/// let format: OutputFormat = "json".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable `key: value` lines.
    #[default]
    Human,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            _ => Err(Error::Validation {
                field: "output_format".to_string(),
                message: format!("unknown output format '{s}', expected human, json or yaml"),
            }),
        }
    }
}

/// Serializable summary of a generic file path.
///
/// # Examples
///
/// ```
/// use genpath::{GenericFilePath, PathReport};
///
/// let path = GenericFilePath::parse("s3://bucket/key").unwrap();
/// let report = PathReport::from_path(&path);
///
/// assert_eq!(report.scheme.as_deref(), Some("s3"));
/// assert_eq!(report.parent.as_deref(), Some("s3://bucket"));
/// assert_eq!(report.depth, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathReport {
    /// Normalized string form.
    pub path: String,
    /// Whether this is the null path.
    pub is_null: bool,
    /// Root segment, empty for the null path.
    pub root_segment: String,
    /// Whether the root segment carries a scheme.
    pub has_scheme: bool,
    /// Scheme, if any.
    pub scheme: Option<String>,
    /// All segments, root segment included.
    pub segments: Vec<String>,
    /// Segments after the root segment.
    pub non_root_segments: Vec<String>,
    /// Normalized string form of the parent, if any.
    pub parent: Option<String>,
    /// Number of segments.
    pub depth: usize,
}

impl PathReport {
    /// Build the report for a path.
    #[must_use]
    pub fn from_path(path: &GenericFilePath) -> Self {
        Self {
            path: path.to_string(),
            is_null: path.is_null(),
            root_segment: path.root_segment().to_string(),
            has_scheme: path.has_scheme(),
            scheme: path.scheme().map(str::to_string),
            segments: path.segments().to_vec(),
            non_root_segments: path.non_root_segments().to_vec(),
            parent: path.parent().map(String::from),
            depth: path.depth(),
        }
    }
}

impl From<&GenericFilePath> for PathReport {
    fn from(path: &GenericFilePath) -> Self {
        Self::from_path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_repository_path() {
        let path = GenericFilePath::parse("/a/b").unwrap();
        let report = PathReport::from_path(&path);

        assert_eq!(report.path, "/a/b");
        assert!(!report.is_null);
        assert_eq!(report.root_segment, "/");
        assert!(!report.has_scheme);
        assert_eq!(report.scheme, None);
        assert_eq!(report.segments, vec!["/", "a", "b"]);
        assert_eq!(report.non_root_segments, vec!["a", "b"]);
        assert_eq!(report.parent.as_deref(), Some("/a"));
        assert_eq!(report.depth, 3);
    }

    #[test]
    fn test_report_null_path() {
        let report = PathReport::from(&GenericFilePath::NULL);

        assert_eq!(report.path, "");
        assert!(report.is_null);
        assert_eq!(report.root_segment, "");
        assert!(!report.has_scheme);
        assert!(report.segments.is_empty());
        assert_eq!(report.parent, None);
        assert_eq!(report.depth, 0);
    }

    #[test]
    fn test_report_provider_root_parent_is_null() {
        let path = GenericFilePath::parse("vfs://").unwrap();
        let report = PathReport::from_path(&path);
        assert_eq!(report.parent.as_deref(), Some(""));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("human".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert_eq!(" JSON ".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert!("csv".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Human);
    }

    #[test]
    fn test_output_format_serde() {
        let yaml = serde_yaml::to_string(&OutputFormat::Json).unwrap();
        assert_eq!(yaml.trim(), "json");
        let back: OutputFormat = serde_yaml::from_str("yaml").unwrap();
        assert_eq!(back, OutputFormat::Yaml);
    }
}
