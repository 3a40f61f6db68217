//! Property-based tests for `Option` using proptest
//!
//! These tests verify algebraic laws that should hold for all possible
//! payload values.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;
use twofold::{some, Option};

fn hash_of(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn none_sorts_before_every_some(x in any::<i64>()) {
        prop_assert!(Option::<i64>::None < some(x));
        prop_assert!(some(x) > Option::None);
    }

    #[test]
    fn ordering_agrees_with_payload_ordering(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(some(a).cmp(&some(b)), a.cmp(&b));
    }

    #[test]
    fn ordering_is_transitive(a in any::<i16>(), b in any::<i16>(), c in any::<i16>()) {
        let (x, y, z) = (some(a), some(b), some(c));
        if x <= y && y <= z {
            prop_assert!(x <= z);
        }
    }

    #[test]
    fn equal_options_hash_identically(x in any::<i64>()) {
        prop_assert_eq!(hash_of(&some(x)), hash_of(&some(x)));
    }

    #[test]
    fn some_hashes_like_its_payload(x in any::<i64>()) {
        prop_assert_eq!(hash_of(&some(x)), hash_of(&x));
    }

    #[test]
    fn map_identity_is_identity(x in any::<i64>()) {
        prop_assert_eq!(some(x).map(|v| v), some(x));
        prop_assert_eq!(Option::<i64>::None.map(|v| v), Option::None);
    }

    #[test]
    fn map_composes(x in any::<i16>()) {
        let composed = some(x).map(|v| i64::from(v) + 1).map(|v| v * 2);
        let fused = some(x).map(|v| (i64::from(v) + 1) * 2);
        prop_assert_eq!(composed, fused);
    }

    #[test]
    fn std_round_trip(x in proptest::option::of(any::<i64>())) {
        prop_assert_eq!(Option::from_std(x).into_std(), x);
    }

    #[test]
    fn bare_payload_equality_matches_wrapped(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(some(a) == b, a == b);
        prop_assert_eq!(some(a).partial_cmp(&b), a.partial_cmp(&b));
    }

    #[test]
    fn filter_is_idempotent(x in any::<i64>()) {
        let even = some(x).filter(|v| v % 2 == 0);
        prop_assert_eq!(even.filter(|v| v % 2 == 0), even);
    }

    #[test]
    fn iteration_yields_the_payload(x in any::<i64>()) {
        prop_assert_eq!(some(x).into_iter().collect::<Vec<_>>(), vec![x]);
        prop_assert_eq!(some(x).iter().count(), 1);
    }

    #[test]
    fn truthiness_matches_is_some(x in proptest::option::of(any::<i64>())) {
        let option = Option::from_std(x);
        prop_assert_eq!(bool::from(option), option.is_some());
        prop_assert_eq!(option.as_bool(), option.is_some());
    }
}
