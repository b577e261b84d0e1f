//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::path::GenericFilePath;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use genpath::config::Config;
/// use genpath::OutputFormat;
///
/// let config: Config = serde_yaml::from_str(
///     "output_format: json\nknown_schemes: [s3, vfs]\n",
/// ).unwrap();
/// assert_eq!(config.output_format(), OutputFormat::Json);
/// assert_eq!(config.known_schemes.as_ref().map(Vec::len), Some(2));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default output format for path reports.
    pub output_format: Option<OutputFormat>,

    /// Schemes of the providers that are recognized.
    ///
    /// When unset, every scheme is accepted.
    pub known_schemes: Option<Vec<String>>,
}

impl Config {
    /// Returns the configured output format, or the default one.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Check whether the provider of a path is recognized.
    ///
    /// Paths without a scheme (repository paths and the null path) are
    /// always recognized, as is every scheme when no list is configured.
    ///
    /// # Examples
    ///
    /// ```
    /// use genpath::config::Config;
    /// use genpath::GenericFilePath;
    ///
    /// let config = Config {
    ///     known_schemes: Some(vec!["s3".to_string()]),
    ///     ..Default::default()
    /// };
    ///
    /// assert!(config.is_known_scheme(&GenericFilePath::parse("s3://a").unwrap()));
    /// assert!(config.is_known_scheme(&GenericFilePath::parse("/a").unwrap()));
    /// assert!(!config.is_known_scheme(&GenericFilePath::parse("ftp://a").unwrap()));
    /// ```
    #[must_use]
    pub fn is_known_scheme(&self, path: &GenericFilePath) -> bool {
        match (path.scheme(), &self.known_schemes) {
            (Some(scheme), Some(known)) => known.iter().any(|k| k == scheme),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.output_format, None);
        assert_eq!(config.output_format(), OutputFormat::Human);
        assert_eq!(config.known_schemes, None);
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result: Result<Config, _> = serde_yaml::from_str("verbose: true\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_empty_document() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_is_known_scheme_without_list() {
        let config = Config::default();
        let path = GenericFilePath::parse("anything://x").unwrap();
        assert!(config.is_known_scheme(&path));
    }

    #[test]
    fn test_is_known_scheme_is_case_sensitive() {
        let config = Config {
            known_schemes: Some(vec!["s3".to_string()]),
            ..Default::default()
        };
        assert!(!config.is_known_scheme(&GenericFilePath::parse("S3://x").unwrap()));
        assert!(config.is_known_scheme(&GenericFilePath::NULL));
    }
}
