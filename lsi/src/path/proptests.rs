//! Extended property-based tests for path splitting.
//!
//! The split module carries quick property tests of its own; these run many
//! more cases and are only built with the `property-tests` feature.

use super::split::{clean, split};
use proptest::prelude::*;
use std::path::{Component, PathBuf};

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 0..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

fn noisy_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            3 => path_component_strategy(),
            1 => Just(".".to_string()),
            1 => Just("..".to_string()),
            1 => Just(String::new()),
        ],
        0..12,
    )
    .prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Joining the elements of a clean absolute path gives the path back
    #[test]
    fn split_join_roundtrips_clean_paths(path in absolute_path_strategy()) {
        prop_assert_eq!(split(&path).join(), path);
    }

    // One element per normal component, plus the root
    #[test]
    fn element_count_matches_components(path in absolute_path_strategy()) {
        let expected = path.components().count();
        prop_assert_eq!(split(&path).len(), expected);
    }

    // Cleaning never leaves "." anywhere but as the whole path
    #[test]
    fn cleaned_paths_have_no_cur_dir(s in noisy_path_strategy()) {
        let cleaned = clean(&s);
        if cleaned != PathBuf::from(".") {
            prop_assert!(cleaned.components().all(|c| c != Component::CurDir));
        }
    }

    // Parent references only ever appear as a leading run
    #[test]
    fn parent_refs_are_leading(s in noisy_path_strategy()) {
        let names = split(&s).names();
        let leading = names.iter().take_while(|n| n.as_str() == "..").count();
        prop_assert!(names[leading..].iter().all(|n| n != ".."));
    }

    // Splitting the cleaned path gives the same elements as the original
    #[test]
    fn split_of_clean_is_stable(s in noisy_path_strategy()) {
        prop_assert_eq!(split(clean(&s)), split(&s));
    }
}
