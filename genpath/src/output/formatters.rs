//! Output formatter implementations.

use crate::{Error, Result};

use super::{OutputFormatter, PathReport};

fn or_none(value: Option<&str>) -> &str {
    value.unwrap_or("(none)")
}

/// Formatter for human-readable output.
///
/// The null path is shown as `(null)` and missing values as `(none)`.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, report: &PathReport) -> Result<String> {
        let path = if report.is_null {
            "(null)"
        } else {
            report.path.as_str()
        };
        let root = Some(report.root_segment.as_str()).filter(|root| !root.is_empty());
        let parent = match report.parent.as_deref() {
            Some("") => Some("(null)"),
            other => other,
        };

        let lines = [
            format!("path: {path}"),
            format!("root: {}", or_none(root)),
            format!("scheme: {}", or_none(report.scheme.as_deref())),
            format!("segments: {}", report.non_root_segments.join(", ")),
            format!("depth: {}", report.depth),
            format!("parent: {}", or_none(parent)),
        ];

        Ok(lines.join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &PathReport) -> Result<String> {
        serde_json::to_string_pretty(report).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, report: &PathReport) -> Result<String> {
        let yaml = serde_yaml::to_string(report).map_err(|e| Error::Validation {
            field: "yaml_output".to_string(),
            message: format!("failed to serialize to YAML: {e}"),
        })?;
        Ok(yaml.trim_end().to_string())
    }
}
