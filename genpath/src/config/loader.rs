//! Configuration file discovery and loading.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Name of the default configuration directory under the home directory.
pub const DEFAULT_CONFIG_DIR: &str = ".genpath";

/// A configuration file together with its parsed contents.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use genpath::config::ConfigLoader;
///
/// if let Some(dir) = ConfigLoader::default_config_dir() {
///     let source = ConfigLoader::load_from_dir(&dir).unwrap();
///     println!("config file found: {}", source.is_some());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Default configuration directory, `~/.genpath`.
    ///
    /// Returns `None` if the home directory cannot be determined.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(DEFAULT_CONFIG_DIR))
    }

    /// Load `config.yaml` from a configuration directory.
    ///
    /// A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from_dir(dir: &Path) -> Result<Option<ConfigSource>> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            log::debug!("no configuration file at {}", path.display());
            return Ok(None);
        }

        let config = Self::load_file(&path)?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(Some(ConfigSource { path, config }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }
}
