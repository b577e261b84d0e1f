//! Generic file paths.
//!
//! This module provides the provider-agnostic path value used to address
//! files and folders across storage backends, together with relationship
//! checking between paths.
//!
//! # Key Concepts
//!
//! ## Root segment
//!
//! The first segment of a path identifies its provider:
//! - `/` for the repository provider, which has no scheme
//! - `scheme://` for any other provider, e.g. `s3://` or `vfs://`
//!
//! ## Normalization
//!
//! Parsing normalizes a raw string by:
//! - Trimming surrounding whitespace, and whitespace around separators
//! - Dropping empty components and one trailing separator
//!
//! `.` and `..` components are kept as they are.
//!
//! ## The null path
//!
//! [`GenericFilePath::NULL`] has no segments. It is what an empty string
//! parses to, and it is the parent of every provider root.
//!
//! # Examples
//!
//! ```
//! use genpath::path::{GenericFilePath, PathRelationship};
//!
//! let folder = GenericFilePath::parse("/home/admin").unwrap();
//! let file = folder.child("report.prpt").unwrap();
//!
//! assert_eq!(file.as_str(), "/home/admin/report.prpt");
//! assert_eq!(file.relative_segments(&folder).unwrap(), ["report.prpt"]);
//!
//! let rel = PathRelationship::between(&folder, &file);
//! assert_eq!(rel, PathRelationship::Ancestor);
//! ```

mod generic;
mod grammar;
pub mod relationship;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use generic::{Ancestors, GenericFilePath};
pub use grammar::{PATH_SEPARATOR, SCHEME_SUFFIX};
pub use relationship::PathRelationship;

pub(crate) use grammar::is_valid_scheme;
pub(crate) use relationship::display_name;
