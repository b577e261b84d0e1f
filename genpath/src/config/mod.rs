//! Configuration system for genpath tools.
//!
//! This module provides layered configuration with support for:
//! - A YAML configuration file (`~/.genpath/config.yaml` by default)
//! - Environment variable overrides (`GENPATH_*`)
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`GENPATH_OUTPUT_FORMAT`, `GENPATH_KNOWN_SCHEMES`)
//! 3. Configuration file
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use genpath::config::{Config, ConfigBuilder};
//! use genpath::OutputFormat;
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         output_format: Some(OutputFormat::Json),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.output_format(), OutputFormat::Json);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
