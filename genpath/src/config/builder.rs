//! Configuration builder combining every source.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds the effective configuration.
///
/// Sources are applied from lowest to highest precedence: built-in
/// defaults, the configuration file, `GENPATH_*` environment variables and
/// finally programmatic overrides.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder using every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the configuration file from `dir` instead of `~/.genpath`.
    #[must_use]
    pub fn with_config_dir(mut self, dir: &Path) -> Self {
        self.config_dir = Some(dir.to_path_buf());
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `GENPATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed,
    /// if an environment variable is invalid, or if validation fails.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            let dir = self.config_dir.or_else(ConfigLoader::default_config_dir);
            match dir {
                Some(dir) => {
                    if let Some(source) = ConfigLoader::load_from_dir(&dir)? {
                        ConfigMerger::merge_into(&mut config, &source.config);
                    }
                }
                None => log::debug!("home directory unknown, skipping configuration file"),
            }
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(overrides) = &self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
