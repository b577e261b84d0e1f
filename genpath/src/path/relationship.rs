//! Path relationship checking.
//!
//! This module classifies how two generic file paths relate to each other in
//! the provider hierarchy, such as whether one is an ancestor or descendant
//! of the other.

use super::generic::GenericFilePath;

/// Relationship between two paths.
///
/// Relationships are decided segment by segment, so `/ab` is not a
/// descendant of `/a`, and paths of different providers are always
/// unrelated. The null path is an ancestor of every other path.
///
/// # Examples
///
/// ```
/// use genpath::{GenericFilePath, PathRelationship};
///
/// let parent = GenericFilePath::parse("s3://bucket").unwrap();
/// let child = GenericFilePath::parse("s3://bucket/key").unwrap();
///
/// assert_eq!(
///     PathRelationship::between(&parent, &child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same after normalization.
    Same,

    /// Neither path is an ancestor or descendant of the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use genpath::{GenericFilePath, PathRelationship};
    ///
    /// let a = GenericFilePath::parse("/a").unwrap();
    /// let ab = GenericFilePath::parse("/a/b").unwrap();
    /// let b = GenericFilePath::parse("/b").unwrap();
    ///
    /// assert_eq!(PathRelationship::between(&a, &ab), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between(&ab, &a), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between(&a, &a), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between(&a, &b), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &GenericFilePath, path2: &GenericFilePath) -> Self {
        if path1 == path2 {
            return Self::Same;
        }

        if path1.contains(path2) {
            return Self::Ancestor;
        }

        if path2.contains(path1) {
            return Self::Descendant;
        }

        Self::Unrelated
    }

    /// Check if the relationship is hierarchical (not unrelated).
    ///
    /// # Examples
    ///
    /// ```
    /// use genpath::PathRelationship;
    ///
    /// assert!(PathRelationship::Ancestor.is_hierarchical());
    /// assert!(PathRelationship::Same.is_hierarchical());
    /// assert!(!PathRelationship::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if a path is within a folder (descendant or same).
    #[must_use]
    pub fn is_within(path: &GenericFilePath, folder: &GenericFilePath) -> bool {
        matches!(Self::between(path, folder), Self::Descendant | Self::Same)
    }

    /// Check if a path contains another path (ancestor or same).
    ///
    /// Agrees with [`GenericFilePath::contains`].
    #[must_use]
    pub fn contains(path: &GenericFilePath, other: &GenericFilePath) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    ///
    /// The null path is shown as `<null>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use genpath::{GenericFilePath, PathRelationship};
    ///
    /// let p1 = GenericFilePath::parse("/a").unwrap();
    /// let p2 = GenericFilePath::parse("/a/b").unwrap();
    ///
    /// let desc = PathRelationship::Ancestor.description(&p1, &p2);
    /// assert_eq!(desc, "/a is an ancestor of /a/b");
    /// ```
    #[must_use]
    pub fn description(&self, path1: &GenericFilePath, path2: &GenericFilePath) -> String {
        let (p1, p2) = (display_name(path1), display_name(path2));
        match self {
            Self::Ancestor => format!("{p1} is an ancestor of {p2}"),
            Self::Descendant => format!("{p1} is a descendant of {p2}"),
            Self::Same => format!("{p1} and {p2} are the same path"),
            Self::Unrelated => format!("{p1} and {p2} are unrelated paths"),
        }
    }
}

impl std::fmt::Display for PathRelationship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ancestor => write!(f, "ancestor"),
            Self::Descendant => write!(f, "descendant"),
            Self::Same => write!(f, "same"),
            Self::Unrelated => write!(f, "unrelated"),
        }
    }
}

/// Name used for a path in human-readable messages.
pub(crate) fn display_name(path: &GenericFilePath) -> &str {
    if path.is_null() {
        "<null>"
    } else {
        path.as_str()
    }
}
