//! Property-based tests for generic file paths.
//!
//! The relationship module carries its own light property tests; this
//! module exercises parsing and derivation with many more cases.

use super::generic::GenericFilePath;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.-][a-zA-Z0-9 _.-]{0,10}[a-zA-Z0-9_.-]|[a-zA-Z0-9_.-]"
}

fn root_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("/".to_string()),
        "[a-z0-9_]{1,6}".prop_map(|scheme| format!("{scheme}://")),
    ]
}

fn whitespace_strategy() -> impl Strategy<Value = String> {
    "[ \t]{0,2}"
}

// Raw path with random padding around each separator and an optional trailing one
fn raw_path_strategy() -> impl Strategy<Value = (String, Vec<String>)> {
    (
        root_strategy(),
        prop::collection::vec((segment_strategy(), whitespace_strategy()), 0..6),
        any::<bool>(),
    )
        .prop_map(|(root, parts, trailing)| {
            let segments: Vec<String> = std::iter::once(root.clone())
                .chain(parts.iter().map(|(s, _)| s.clone()))
                .collect();
            let mut raw = root;
            let padded: Vec<String> = parts.iter().map(|(s, ws)| format!("{ws}{s}{ws}")).collect();
            raw.push_str(&padded.join("/"));
            if trailing {
                raw.push('/');
            }
            (raw, segments)
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // parse(p.to_string()) == p
    #[test]
    fn parse_round_trip((raw, _) in raw_path_strategy()) {
        let path = GenericFilePath::parse(&raw).unwrap();
        let reparsed = GenericFilePath::parse(&path.to_string()).unwrap();
        prop_assert_eq!(reparsed, path);
    }

    // Padding and a trailing separator never change the segments
    #[test]
    fn parse_recovers_segments((raw, segments) in raw_path_strategy()) {
        let path = GenericFilePath::parse(&raw).unwrap();
        prop_assert_eq!(path.segments(), segments.as_slice());
    }

    // Ascent reaches the null path in exactly depth() steps
    #[test]
    fn parent_chain_length((raw, _) in raw_path_strategy()) {
        let path = GenericFilePath::parse(&raw).unwrap();
        let ancestors: Vec<GenericFilePath> = path.ancestors().collect();
        prop_assert_eq!(ancestors.len(), path.depth());
        prop_assert_eq!(ancestors.last(), Some(&GenericFilePath::NULL));
    }

    // child() then parent() is the identity
    #[test]
    fn child_parent_inverse((raw, _) in raw_path_strategy(), segment in segment_strategy()) {
        let path = GenericFilePath::parse(&raw).unwrap();
        let child = path.child(&segment).unwrap();
        prop_assert_eq!(child.relative_segments(&path).unwrap(), [segment]);
        prop_assert_eq!(child.parent(), Some(path));
    }

    // Every path is under the null path
    #[test]
    fn null_contains_everything((raw, _) in raw_path_strategy()) {
        let path = GenericFilePath::parse(&raw).unwrap();
        prop_assert!(GenericFilePath::NULL.contains(&path));
    }

    // Anything without a separator or scheme prefix is rejected
    #[test]
    fn rejects_bare_words(word in "[a-zA-Z0-9_]{1,12}") {
        let err = GenericFilePath::parse(&word).unwrap_err();
        prop_assert!(err.is_invalid_path());
    }
}
