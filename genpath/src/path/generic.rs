//! The generic file path value type.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::grammar::{self, PATH_SEPARATOR, SCHEME_SUFFIX};
use crate::error::{Error, Result};

/// A normalized, provider-agnostic file path.
///
/// A path is a sequence of segments. The first one, the *root segment*,
/// identifies the storage provider: either the separator `/` for the
/// repository provider, or `scheme://` for any other provider. The remaining
/// segments are plain path components.
///
/// Instances are immutable. They are built by [`GenericFilePath::parse`] or
/// derived from another instance with [`parent`](Self::parent) and
/// [`child`](Self::child). The normalized string form is computed once, at
/// construction, and equality, hashing and ordering are all based on it.
///
/// The [`NULL`](Self::NULL) path has no segments. It is the parent of every
/// provider root and its string form is empty.
///
/// # Examples
///
/// ```
/// use genpath::GenericFilePath;
///
/// let path = GenericFilePath::parse("hdfs://a/b").unwrap();
/// assert_eq!(path.root_segment(), "hdfs://");
/// assert_eq!(path.scheme(), Some("hdfs"));
/// assert_eq!(path.non_root_segments(), ["a", "b"]);
///
/// let repo = GenericFilePath::parse("/ a / b /").unwrap();
/// assert_eq!(repo.to_string(), "/a/b");
/// assert!(!repo.has_scheme());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GenericFilePath {
    segments: Vec<String>,
    path: String,
}

impl GenericFilePath {
    /// The null path.
    ///
    /// It has no segments, no root segment, no scheme and no parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use genpath::GenericFilePath;
    ///
    /// assert_eq!(GenericFilePath::parse("").unwrap(), GenericFilePath::NULL);
    /// assert!(GenericFilePath::NULL.is_null());
    /// assert_eq!(GenericFilePath::NULL.parent(), None);
    /// ```
    pub const NULL: Self = Self {
        segments: Vec::new(),
        path: String::new(),
    };

    fn from_segments(segments: Vec<String>) -> Self {
        let path = match segments.split_first() {
            None => String::new(),
            Some((root, rest)) => {
                let mut path = root.clone();
                path.push_str(&rest.join(PATH_SEPARATOR));
                path
            }
        };

        Self { segments, path }
    }

    /// Parse a raw path string.
    ///
    /// Leading and trailing whitespace is ignored, as is whitespace around
    /// separators and a single trailing separator. Empty components are
    /// dropped. An empty (or all-whitespace) string parses to
    /// [`NULL`](Self::NULL).
    ///
    /// Components equal to `.` or `..` are kept verbatim; they are neither
    /// validated nor resolved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the root segment is neither the
    /// separator nor a scheme of word characters followed by `://`.
    ///
    /// # Examples
    ///
    /// ```
    /// use genpath::GenericFilePath;
    ///
    /// let path = GenericFilePath::parse("  s3://bucket//key/ ").unwrap();
    /// assert_eq!(path.as_str(), "s3://bucket/key");
    ///
    /// assert!(GenericFilePath::parse("noscheme").is_err());
    /// assert!(GenericFilePath::parse("ftp:/bad").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(Self::NULL);
        }

        let (root, rest) = grammar::split_root(trimmed).ok_or_else(|| Error::InvalidPath {
            path: raw.to_string(),
            reason: format!(
                "root segment must be '{PATH_SEPARATOR}' or a scheme followed by '{SCHEME_SUFFIX}'"
            ),
        })?;

        let segments = std::iter::once(root)
            .chain(grammar::split_segments(rest))
            .map(str::to_string)
            .collect();

        Ok(Self::from_segments(segments))
    }

    /// Parse an optional raw path string.
    ///
    /// `None` parses to [`NULL`](Self::NULL), like the empty string.
    ///
    /// # Errors
    ///
    /// Same as [`parse`](Self::parse).
    ///
    /// # Examples
    ///
    /// ```
    /// use genpath::GenericFilePath;
    ///
    /// assert!(GenericFilePath::parse_optional(None).unwrap().is_null());
    /// assert!(!GenericFilePath::parse_optional(Some("/")).unwrap().is_null());
    /// ```
    pub fn parse_optional(raw: Option<&str>) -> Result<Self> {
        raw.map_or(Ok(Self::NULL), Self::parse)
    }

    /// Returns `true` if this is the null path.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the root segment.
    ///
    /// This is `/` for the repository provider, `scheme://` for other
    /// providers and the empty string for the null path.
    #[must_use]
    pub fn root_segment(&self) -> &str {
        self.segments.first().map_or("", String::as_str)
    }

    /// Returns the segments following the root segment, possibly none.
    #[must_use]
    pub fn non_root_segments(&self) -> &[String] {
        self.segments.get(1..).unwrap_or_default()
    }

    /// Returns all segments, root segment included.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the number of segments.
    ///
    /// This is also the number of [`parent`](Self::parent) steps needed to
    /// reach the null path.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the root segment carries a scheme.
    ///
    /// Neither the repository root `/` nor the empty root segment of the
    /// null path has one.
    ///
    /// # Examples
    ///
    /// ```
    /// use genpath::GenericFilePath;
    ///
    /// assert!(GenericFilePath::parse("vfs://x").unwrap().has_scheme());
    /// assert!(!GenericFilePath::parse("/x").unwrap().has_scheme());
    /// assert!(!GenericFilePath::NULL.has_scheme());
    /// ```
    #[must_use]
    pub fn has_scheme(&self) -> bool {
        self.root_segment().ends_with(SCHEME_SUFFIX)
    }

    /// Returns the scheme of the root segment, without the `://` suffix.
    #[must_use]
    pub fn scheme(&self) -> Option<&str> {
        self.root_segment().strip_suffix(SCHEME_SUFFIX)
    }

    /// Returns the normalized string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Returns the parent path.
    ///
    /// The null path has no parent, and the parent of a provider root is the
    /// null path.
    ///
    /// # Examples
    ///
    /// ```
    /// use genpath::GenericFilePath;
    ///
    /// let path = GenericFilePath::parse("/a/b").unwrap();
    /// assert_eq!(path.parent().unwrap().as_str(), "/a");
    ///
    /// let root = GenericFilePath::parse("/").unwrap();
    /// assert_eq!(root.parent(), Some(GenericFilePath::NULL));
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        match self.segments.len() {
            0 => None,
            1 => Some(Self::NULL),
            len => Some(Self::from_segments(self.segments[..len - 1].to_vec())),
        }
    }

    /// Returns an iterator over the ancestors of this path, nearest first.
    ///
    /// The last item is always the null path, unless this path is itself
    /// the null path, in which case the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use genpath::GenericFilePath;
    ///
    /// let path = GenericFilePath::parse("s3://a/b").unwrap();
    /// let ancestors: Vec<String> = path.ancestors().map(|p| p.to_string()).collect();
    /// assert_eq!(ancestors, ["s3://a", "s3://", ""]);
    /// ```
    #[must_use]
    pub fn ancestors(&self) -> Ancestors {
        Ancestors {
            next: self.parent(),
        }
    }

    /// Builds a child path by appending one segment.
    ///
    /// The segment is trimmed before being appended.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the segment is empty after
    /// trimming.
    ///
    /// # Examples
    ///
    /// ```
    /// use genpath::GenericFilePath;
    ///
    /// let path = GenericFilePath::parse("/a").unwrap();
    /// assert_eq!(path.child(" b ").unwrap().as_str(), "/a/b");
    /// assert!(path.child("  ").is_err());
    /// ```
    pub fn child(&self, segment: &str) -> Result<Self> {
        let normalized = segment.trim();
        if normalized.is_empty() {
            return Err(Error::InvalidArgument {
                argument: segment.to_string(),
                reason: "child segment is empty".to_string(),
            });
        }

        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(normalized.to_string());

        Ok(Self::from_segments(segments))
    }

    /// Returns the segments of this path beyond a base path.
    ///
    /// Returns `None` if this path is neither equal to nor a descendant of
    /// `base`. Every path is under the null path, so a null base yields all
    /// segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use genpath::GenericFilePath;
    ///
    /// let path = GenericFilePath::parse("/a/b/c").unwrap();
    /// let base = GenericFilePath::parse("/a/b").unwrap();
    /// assert_eq!(path.relative_segments(&base).unwrap(), ["c"]);
    ///
    /// let other = GenericFilePath::parse("/x").unwrap();
    /// assert_eq!(other.relative_segments(&base), None);
    /// ```
    #[must_use]
    pub fn relative_segments(&self, base: &Self) -> Option<&[String]> {
        self.segments.strip_prefix(base.segments.as_slice())
    }

    /// Returns `true` if this path equals, or is an ancestor of, `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use genpath::GenericFilePath;
    ///
    /// let dir = GenericFilePath::parse("/a/b").unwrap();
    /// assert!(dir.contains(&GenericFilePath::parse("/a/b/c").unwrap()));
    /// assert!(!dir.contains(&GenericFilePath::parse("/a").unwrap()));
    /// assert!(GenericFilePath::NULL.contains(&dir));
    /// ```
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        other.relative_segments(self).is_some()
    }
}

impl Default for GenericFilePath {
    fn default() -> Self {
        Self::NULL
    }
}

impl PartialEq for GenericFilePath {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for GenericFilePath {}

impl Hash for GenericFilePath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}

impl PartialOrd for GenericFilePath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GenericFilePath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.path.cmp(&other.path)
    }
}

impl fmt::Display for GenericFilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl AsRef<str> for GenericFilePath {
    fn as_ref(&self) -> &str {
        &self.path
    }
}

impl FromStr for GenericFilePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for GenericFilePath {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for GenericFilePath {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<GenericFilePath> for String {
    fn from(path: GenericFilePath) -> Self {
        path.path
    }
}

/// Iterator over the ancestors of a [`GenericFilePath`].
///
/// Created by [`GenericFilePath::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors {
    next: Option<GenericFilePath>,
}

impl Iterator for Ancestors {
    type Item = GenericFilePath;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.next.as_ref().map_or(0, |p| p.depth() + 1);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Ancestors {}

impl FusedIterator for Ancestors {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn p(raw: &str) -> GenericFilePath {
        GenericFilePath::parse(raw).unwrap()
    }

    #[test]
    fn test_null_identity() {
        assert_eq!(GenericFilePath::parse_optional(None).unwrap(), GenericFilePath::NULL);
        assert_eq!(p(""), GenericFilePath::NULL);
        assert_eq!(p("   \t\n"), GenericFilePath::NULL);

        let null = GenericFilePath::NULL;
        assert!(null.is_null());
        assert_eq!(null.root_segment(), "");
        assert!(null.non_root_segments().is_empty());
        assert!(null.segments().is_empty());
        assert_eq!(null.as_str(), "");
        assert_eq!(null.parent(), None);
        assert_eq!(null.depth(), 0);
        assert_eq!(GenericFilePath::default(), null);
    }

    #[test]
    fn test_null_has_no_scheme() {
        assert!(!GenericFilePath::NULL.has_scheme());
        assert_eq!(GenericFilePath::NULL.scheme(), None);
    }

    #[test]
    fn test_parse_scheme() {
        let path = p("hdfs://a/b");
        assert_eq!(path.scheme(), Some("hdfs"));
        assert_eq!(path.root_segment(), "hdfs://");
        assert!(path.has_scheme());
        assert_eq!(path.non_root_segments(), ["a", "b"]);
        assert_eq!(path.segments(), ["hdfs://", "a", "b"]);
        assert_eq!(path.as_str(), "hdfs://a/b");
    }

    #[test]
    fn test_parse_scheme_root_only() {
        let root = p("s3://");
        assert_eq!(root.segments(), ["s3://"]);
        assert_eq!(root.as_str(), "s3://");
        assert_eq!(root.scheme(), Some("s3"));
        assert!(root.non_root_segments().is_empty());
    }

    #[test]
    fn test_parse_repository() {
        let path = p("/a/b/");
        assert_eq!(path.to_string(), "/a/b");
        assert!(!path.has_scheme());
        assert_eq!(path.scheme(), None);
        assert_eq!(path.root_segment(), "/");

        let root = p("/");
        assert_eq!(root.segments(), ["/"]);
        assert_eq!(root.as_str(), "/");
    }

    #[test]
    fn test_parse_invalid() {
        for raw in ["noscheme", "ftp:/bad", "://x", "a/b", "my-fs://x", "s3:x"] {
            let err = GenericFilePath::parse(raw).unwrap_err();
            assert!(err.is_invalid_path(), "expected invalid path for {raw:?}");
        }
    }

    #[test]
    fn test_parse_invalid_reports_raw_input() {
        match GenericFilePath::parse(" bad ") {
            Err(Error::InvalidPath { path, .. }) => assert_eq!(path, " bad "),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_parse_whitespace_tolerance() {
        assert_eq!(p("/ a / b"), p("/a/b"));
        assert_eq!(p("  /a/b  "), p("/a/b"));
        assert_eq!(p("s3:// bucket /key "), p("s3://bucket/key"));
        assert_eq!(p("/a//b"), p("/a/b"));
        assert_eq!(p("/ a / b").segments(), ["/", "a", "b"]);
    }

    #[test]
    fn test_parse_keeps_internal_whitespace() {
        let path = p("/my docs/q1 report");
        assert_eq!(path.non_root_segments(), ["my docs", "q1 report"]);
    }

    #[test]
    fn test_parse_keeps_dot_segments() {
        let path = p("/a/./../b");
        assert_eq!(path.non_root_segments(), ["a", ".", "..", "b"]);
        assert_eq!(path.as_str(), "/a/./../b");
    }

    #[test]
    fn test_round_trip() {
        for raw in ["", "/", "/a", " /a / b/ ", "s3://", "vfs://x/y/", "/a/../b"] {
            let path = p(raw);
            assert_eq!(p(&path.to_string()), path, "round trip failed for {raw:?}");
        }
    }

    #[test]
    fn test_parent() {
        assert_eq!(p("/a/b").parent(), Some(p("/a")));
        assert_eq!(p("/a").parent(), Some(p("/")));
        assert_eq!(p("/").parent(), Some(GenericFilePath::NULL));
        assert_eq!(p("s3://").parent(), Some(GenericFilePath::NULL));
        assert_eq!(GenericFilePath::NULL.parent(), None);
    }

    #[test]
    fn test_parent_chain_terminates() {
        let path = p("s3://bucket/a/b/c");
        let mut steps = 0;
        let mut current = path.clone();
        while let Some(parent) = current.parent() {
            steps += 1;
            assert!(parent.depth() < current.depth());
            current = parent;
        }
        assert_eq!(current, GenericFilePath::NULL);
        assert_eq!(steps, path.depth());
    }

    #[test]
    fn test_ancestors() {
        let path = p("/a/b");
        let ancestors: Vec<GenericFilePath> = path.ancestors().collect();
        assert_eq!(ancestors, vec![p("/a"), p("/"), GenericFilePath::NULL]);
        assert_eq!(path.ancestors().len(), 3);
        assert_eq!(GenericFilePath::NULL.ancestors().count(), 0);
    }

    #[test]
    fn test_child() {
        assert_eq!(p("/a").child("b").unwrap().to_string(), "/a/b");
        assert_eq!(p("/a").child("  b  ").unwrap(), p("/a/b"));
        assert_eq!(p("s3://").child("bucket").unwrap().as_str(), "s3://bucket");
        assert_eq!(p("/").child("a").unwrap().as_str(), "/a");
    }

    #[test]
    fn test_child_rejects_empty() {
        for segment in ["", "  ", "\t\n"] {
            let err = p("/a").child(segment).unwrap_err();
            assert!(err.is_invalid_argument());
        }
    }

    #[test]
    fn test_child_then_parent() {
        let base = p("vfs://x/y");
        let child = base.child("z").unwrap();
        assert_eq!(child.parent(), Some(base));
    }

    #[test]
    fn test_relative_segments() {
        assert_eq!(p("/a/b/c").relative_segments(&p("/a/b")).unwrap(), ["c"]);
        assert_eq!(p("/a/b").relative_segments(&p("/a/b")).unwrap(), [] as [&str; 0]);
        assert_eq!(p("/x").relative_segments(&p("/a")), None);
        assert_eq!(p("/a").relative_segments(&p("/a/b")), None);
        assert_eq!(p("s3://a").relative_segments(&p("/")), None);
    }

    #[test]
    fn test_relative_segments_null_base() {
        let path = p("s3://a/b");
        assert_eq!(
            path.relative_segments(&GenericFilePath::NULL).unwrap(),
            ["s3://", "a", "b"]
        );
        assert_eq!(
            GenericFilePath::NULL
                .relative_segments(&GenericFilePath::NULL)
                .map(<[String]>::len),
            Some(0)
        );
    }

    #[test]
    fn test_relative_segments_compares_whole_segments() {
        assert_eq!(p("/ab/c").relative_segments(&p("/a")), None);
    }

    #[test]
    fn test_contains() {
        assert!(p("/a/b").contains(&p("/a/b/c")));
        assert!(p("/a/b").contains(&p("/a/b")));
        assert!(!p("/a/b").contains(&p("/a")));
        assert!(!p("/a").contains(&p("s3://a")));
        assert!(GenericFilePath::NULL.contains(&p("/a")));
        assert!(GenericFilePath::NULL.contains(&p("s3://x")));
        assert!(GenericFilePath::NULL.contains(&GenericFilePath::NULL));
        assert!(!p("/").contains(&GenericFilePath::NULL));
    }

    #[test]
    fn test_equality_uses_normalized_form() {
        assert_eq!(p("/a/b/"), p(" / a /b"));
        assert_ne!(p("/a"), p("s3://a"));
    }

    #[test]
    fn test_hash_uses_normalized_form() {
        let mut set = HashSet::new();
        set.insert(p("/a/b"));
        assert!(set.contains(&p("/a/b/")));
        assert!(set.contains(&p("/ a / b")));
        assert!(!set.contains(&p("/a")));
    }

    #[test]
    fn test_ordering() {
        let mut paths = vec![p("/b"), p("s3://a"), GenericFilePath::NULL, p("/a")];
        paths.sort();
        assert_eq!(paths, vec![GenericFilePath::NULL, p("/a"), p("/b"), p("s3://a")]);
    }

    #[test]
    fn test_conversions() {
        let path: GenericFilePath = "/a/b".parse().unwrap();
        assert_eq!(path, p("/a/b"));
        assert_eq!(GenericFilePath::try_from("/a/b").unwrap(), path);
        assert_eq!(GenericFilePath::try_from(String::from("/a/b")).unwrap(), path);
        assert!(GenericFilePath::try_from("bad").is_err());

        let s: String = path.into();
        assert_eq!(s, "/a/b");
    }

    #[test]
    fn test_serde_json() {
        let path = p("s3://bucket/key");
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"s3://bucket/key\"");

        let back: GenericFilePath = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);

        let normalized: GenericFilePath = serde_json::from_str("\" /a / b/ \"").unwrap();
        assert_eq!(normalized, p("/a/b"));

        assert!(serde_json::from_str::<GenericFilePath>("\"noscheme\"").is_err());
    }

    #[test]
    fn test_serde_null_path() {
        let json = serde_json::to_string(&GenericFilePath::NULL).unwrap();
        assert_eq!(json, "\"\"");
        let back: GenericFilePath = serde_json::from_str(&json).unwrap();
        assert!(back.is_null());
    }

    #[test]
    fn test_thread_safety() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GenericFilePath>();
    }
}
