//! Lexical grammar of generic file paths.
//!
//! A raw path is either rooted at the separator (`/a/b`) or at a scheme
//! prefix (`s3://a/b`). Scheme names are restricted to ASCII word
//! characters. Components are separated by `/` with any surrounding
//! whitespace ignored.

use once_cell::sync::Lazy;
use regex::Regex;

/// The path separator, `/`.
///
/// It is also the root segment of the repository provider.
pub const PATH_SEPARATOR: &str = "/";

/// The suffix that terminates the root segment of a provider with a scheme.
pub const SCHEME_SUFFIX: &str = "://";

static SCHEME_ROOT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9A-Za-z_]+://)(.*)$").expect("scheme root pattern is valid")
});

static SEPARATOR_SPLIT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*/\s*").expect("separator split pattern is valid"));

/// Split a trimmed, non-empty raw path into its root segment and the rest.
///
/// Returns `None` when the root is neither the separator nor a well-formed
/// `scheme://` prefix.
pub(crate) fn split_root(trimmed: &str) -> Option<(&str, &str)> {
    if let Some(rest) = trimmed.strip_prefix(PATH_SEPARATOR) {
        return Some((PATH_SEPARATOR, rest));
    }

    let captures = SCHEME_ROOT_PATTERN.captures(trimmed)?;
    let root = captures.get(1)?.as_str();
    let rest = captures.get(2).map_or("", |m| m.as_str());
    Some((root, rest))
}

/// Split the part of a raw path that follows the root segment into
/// components.
///
/// A single trailing separator is ignored. Components are trimmed and
/// empty ones are dropped. `.` and `..` are returned verbatim.
pub(crate) fn split_segments(rest: &str) -> impl Iterator<Item = &str> {
    let rest = rest.strip_suffix(PATH_SEPARATOR).unwrap_or(rest);

    SEPARATOR_SPLIT_PATTERN
        .split(rest)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}

/// Check that a scheme name uses only the characters the grammar accepts.
pub(crate) fn is_valid_scheme(scheme: &str) -> bool {
    !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}
