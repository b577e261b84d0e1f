//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::is_valid_scheme;

/// Validates configuration values.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration.
    ///
    /// Every known scheme must be a name the path grammar accepts: a
    /// non-empty run of ASCII letters, digits and underscores, without the
    /// `://` suffix.
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the first offending scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use genpath::config::{Config, ConfigValidator};
    ///
    /// let ok = Config { known_schemes: Some(vec!["s3".into()]), ..Default::default() };
    /// assert!(ConfigValidator::validate(&ok).is_ok());
    ///
    /// let bad = Config { known_schemes: Some(vec!["s3://".into()]), ..Default::default() };
    /// assert!(ConfigValidator::validate(&bad).is_err());
    /// ```
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(schemes) = &config.known_schemes {
            if let Some(bad) = schemes.iter().find(|s| !is_valid_scheme(s)) {
                return Err(Error::Validation {
                    field: "known_schemes".to_string(),
                    message: format!(
                        "'{bad}' is not a valid scheme (letters, digits and '_' only)"
                    ),
                });
            }
        }

        Ok(())
    }
}
