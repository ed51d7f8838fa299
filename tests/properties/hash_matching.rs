//! Property tests for recorded-hash matching.

use proptest::prelude::*;

use auditpack::domain::value_objects::ContentHash;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Streaming and in-memory digests agree for any content.
    #[test]
    fn property_streamed_digest_matches_buffered(content in proptest::collection::vec(any::<u8>(), 0..200_000)) {
        let streamed = ContentHash::from_reader(content.as_slice()).unwrap();
        prop_assert_eq!(streamed, ContentHash::from_bytes(&content));
    }

    /// PROPERTY: Recorded hashes match regardless of case or `sha256:` prefix.
    #[test]
    fn property_match_ignores_case_and_prefix(content in proptest::collection::vec(any::<u8>(), 0..256)) {
        let digest = ContentHash::from_bytes(&content);
        let hex = digest.as_str().to_string();

        prop_assert!(digest.matches_str(&hex));
        prop_assert!(digest.matches_str(&hex.to_uppercase()));
        let prefixed = format!("sha256:{}", hex);
        prop_assert!(digest.matches_str(&prefixed));
        let prefixed_upper = format!("sha256:{}", hex.to_uppercase());
        prop_assert_eq!(ContentHash::new(&prefixed_upper), digest);
    }

    /// PROPERTY: Different content never matches the other digest.
    #[test]
    fn property_different_content_does_not_match(
        a in proptest::collection::vec(any::<u8>(), 0..64),
        b in proptest::collection::vec(any::<u8>(), 0..64),
    ) {
        prop_assume!(a != b);
        let digest = ContentHash::from_bytes(&a);
        prop_assert!(!digest.matches_str(ContentHash::from_bytes(&b).as_str()));
    }
}
