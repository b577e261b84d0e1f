//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `GENPATH_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::Result;
use std::env;

/// Overrides the output format (`human`, `json` or `yaml`).
pub const OUTPUT_FORMAT_ENV: &str = "GENPATH_OUTPUT_FORMAT";

/// Overrides the known schemes (comma-separated).
pub const KNOWN_SCHEMES_ENV: &str = "GENPATH_KNOWN_SCHEMES";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use genpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if `GENPATH_OUTPUT_FORMAT` names an unknown format.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(format) = env::var(OUTPUT_FORMAT_ENV) {
            config.output_format = Some(format.parse()?);
        }

        if let Ok(schemes) = env::var(KNOWN_SCHEMES_ENV) {
            config.known_schemes = Some(Self::parse_list(&schemes));
        }

        Ok(())
    }

    /// Split a comma-separated list, trimming items and dropping empty ones.
    fn parse_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }
}
