//! Error types for the genpath library.
//!
//! The path value type only ever fails in two ways: a raw string whose root
//! segment is malformed ([`Error::InvalidPath`]) and an empty child segment
//! ([`Error::InvalidArgument`]). The remaining variants belong to the
//! configuration and output layers.

use thiserror::Error;

/// Result type alias for operations that may fail with a genpath error.
///
/// # Examples
///
/// ```
/// use genpath::{GenericFilePath, Result};
///
/// fn repository_root() -> Result<GenericFilePath> {
///     GenericFilePath::parse("/")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the genpath library.
#[derive(Debug, Error)]
pub enum Error {
    /// A raw path string could not be parsed.
    ///
    /// Raised when the root segment is neither the path separator nor a
    /// `scheme://` prefix.
    #[error("invalid path '{path}': {reason}")]
    InvalidPath {
        /// The raw path, as given.
        path: String,
        /// The reason the path is invalid.
        reason: String,
    },

    /// An argument to a path derivation was rejected.
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// The rejected argument, as given.
        argument: String,
        /// The reason the argument was rejected.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Check if error came from parsing a malformed path.
    ///
    /// # Examples
    ///
    /// ```
    /// use genpath::GenericFilePath;
    ///
    /// let err = GenericFilePath::parse("noscheme").unwrap_err();
    /// assert!(err.is_invalid_path());
    /// ```
    #[must_use]
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, Self::InvalidPath { .. })
    }

    /// Check if error came from a rejected derivation argument.
    ///
    /// # Examples
    ///
    /// ```
    /// use genpath::GenericFilePath;
    ///
    /// let root = GenericFilePath::parse("/").unwrap();
    /// assert!(root.child("   ").unwrap_err().is_invalid_argument());
    /// ```
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}
