#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # genpath
//!
//! Provider-agnostic generic file paths.
//!
//! A generic file path addresses a file or folder in any storage provider
//! through one uniform representation: a root segment identifying the
//! provider, followed by plain path components. The repository provider is
//! rooted at `/`; every other provider is rooted at `scheme://`.
//!
//! ## Core Types
//!
//! - [`GenericFilePath`]: the immutable path value, with parsing and
//!   parent/child/containment operations
//! - [`PathRelationship`]: hierarchy classification between two paths
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use genpath::GenericFilePath;
//!
//! let path = GenericFilePath::parse("s3://bucket/ reports /2024/").unwrap();
//! assert_eq!(path.to_string(), "s3://bucket/reports/2024");
//! assert_eq!(path.scheme(), Some("s3"));
//!
//! let parent = path.parent().unwrap();
//! assert!(parent.contains(&path));
//! assert_eq!(path.relative_segments(&parent).unwrap(), ["2024"]);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, PathReport};
pub use path::{GenericFilePath, PathRelationship, PATH_SEPARATOR, SCHEME_SUFFIX};
