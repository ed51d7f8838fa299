//! Property tests for asset path validation.

use proptest::prelude::*;

use auditpack::domain::value_objects::{AssetPath, PathError};

fn relative_path_string() -> impl Strategy<Value = String> {
    // No empty segments and no '.'-only segments so ".." never appears by accident
    let segment = proptest::string::string_regex("[A-Za-z0-9_-][A-Za-z0-9._-]{0,15}").unwrap();
    proptest::collection::vec(segment, 1..=4).prop_map(|segments| segments.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Plain relative paths are accepted unchanged.
    #[test]
    fn property_relative_paths_accepted(rel in relative_path_string()) {
        let path = AssetPath::new(&rel).unwrap();
        prop_assert_eq!(path.as_str(), rel.as_str());
    }

    /// PROPERTY: A `..` segment anywhere is rejected.
    #[test]
    fn property_traversal_rejected(prefix in relative_path_string(), suffix in relative_path_string()) {
        let joined = format!("{prefix}/../{suffix}");
        prop_assert_eq!(AssetPath::new(&joined), Err(PathError::ContainsTraversal));
    }

    /// PROPERTY: Absolute paths are rejected.
    #[test]
    fn property_absolute_rejected(rel in relative_path_string()) {
        let absolute = format!("/{}", rel);
        prop_assert_eq!(AssetPath::new(&absolute), Err(PathError::AbsoluteNotAllowed));
    }

    /// PROPERTY: Backslashes normalize to forward slashes.
    #[test]
    fn property_backslashes_normalized(rel in relative_path_string()) {
        let windows = rel.replace('/', "\\");
        let path = AssetPath::new(&windows).unwrap();
        prop_assert_eq!(path.as_str(), rel.as_str());
    }
}
