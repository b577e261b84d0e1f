//! Configuration merging and precedence handling.

use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use genpath::config::{Config, ConfigMerger};
/// use genpath::OutputFormat;
///
/// let low = Config { output_format: Some(OutputFormat::Json), ..Default::default() };
/// let high = Config { output_format: Some(OutputFormat::Yaml), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.output_format, Some(OutputFormat::Yaml));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge source config into target (source overwrites target).
    ///
    /// Fields set in `source` replace the ones in `target`; the list of known
    /// schemes is replaced as a whole, not accumulated.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.known_schemes.is_some() {
            target.known_schemes.clone_from(&source.known_schemes);
        }
    }
}
