//! Property tests for file filter construction and matching.

use proptest::prelude::*;

use groupsync::Filter;

fn extension() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,5}").unwrap()
}

fn stem() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9_]{1,8}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Construction never panics, and the derived suffix keeps
    /// only word characters from the pattern.
    #[test]
    fn property_suffix_keeps_only_word_characters(
        pattern in "(?s).{0,64}"
    ) {
        let filter = Filter::new(&pattern);
        prop_assert!(filter
            .suffix()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_'));
    }

    /// PROPERTY: The catch-all pattern matches any candidate.
    #[test]
    fn property_star_matches_everything(
        name in "(?s).{0,64}"
    ) {
        prop_assert!(Filter::new("*").matches_entry(&name));
    }

    /// PROPERTY: Matching is insensitive to the candidate's case.
    #[test]
    fn property_matching_ignores_candidate_case(
        ext in extension(),
        stem in stem(),
    ) {
        let filter = Filter::new(format!("*.{}", ext));
        let name = format!("{}.{}", stem, ext);

        prop_assert_eq!(
            filter.matches_entry(&name),
            filter.matches_entry(&name.to_uppercase())
        );
    }

    /// PROPERTY: An extension pattern accepts files carrying that extension.
    #[test]
    fn property_extension_patterns_accept_their_extension(
        ext in extension(),
        stem in stem(),
    ) {
        let filter = Filter::new(format!("*.{}", ext));
        let name = format!("{}.{}", stem, ext);

        prop_assert!(filter.matches_entry(&name));
    }
}
