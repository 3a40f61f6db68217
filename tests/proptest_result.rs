//! Property-based tests for `Result` using proptest
//!
//! These tests verify algebraic laws that should hold for all possible
//! payload values.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use proptest::prelude::*;
use twofold::{Option, Result};

fn hash_of(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn ok_sorts_before_every_error(ok in any::<i64>(), error in any::<i64>()) {
        // Tag order wins regardless of payload magnitudes.
        prop_assert!(Result::<i64, i64>::Ok(ok) < Result::Error(error));
    }

    #[test]
    fn same_tag_ordering_delegates_to_payloads(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(
            Result::<i64, i64>::Ok(a).cmp(&Result::Ok(b)),
            a.cmp(&b)
        );
        prop_assert_eq!(
            Result::<i64, i64>::Error(a).cmp(&Result::Error(b)),
            a.cmp(&b)
        );
    }

    #[test]
    fn hashing_delegates_to_the_active_payload(x in any::<i64>()) {
        prop_assert_eq!(hash_of(&Result::<i64, i64>::Ok(x)), hash_of(&x));
        prop_assert_eq!(hash_of(&Result::<i64, i64>::Error(x)), hash_of(&x));
    }

    #[test]
    fn map_identity_is_identity(x in any::<i64>()) {
        let ok: Result<i64, i64> = Result::Ok(x);
        prop_assert_eq!(ok.map(|v| v), ok);

        let error: Result<i64, i64> = Result::Error(x);
        prop_assert_eq!(error.map_error(|v| v), error);
    }

    #[test]
    fn map_never_changes_the_tag(x in any::<i64>()) {
        prop_assert!(Result::<i64, i64>::Ok(x).map(|v| v.wrapping_mul(2)).is_ok());
        prop_assert!(Result::<i64, i64>::Error(x).map(|v| v.wrapping_mul(2)).is_error());
    }

    #[test]
    fn deconstruct_populates_exactly_one_side(x in any::<i64>(), tag_ok in any::<bool>()) {
        let result: Result<i64, i64> = if tag_ok { Result::Ok(x) } else { Result::Error(x) };
        let (ok, error) = result.deconstruct();
        prop_assert_ne!(ok.is_some(), error.is_some());
        prop_assert_eq!(ok, result.ok());
        prop_assert_eq!(error, result.error());
    }

    #[test]
    fn std_round_trip(x in proptest::result::maybe_err(any::<i64>(), any::<i64>())) {
        prop_assert_eq!(Result::from_std(x).into_std(), x);
    }

    #[test]
    fn truthiness_matches_is_ok(x in any::<i64>(), tag_ok in any::<bool>()) {
        let result: Result<i64, i64> = if tag_ok { Result::Ok(x) } else { Result::Error(x) };
        prop_assert_eq!(bool::from(result), result.is_ok());
        prop_assert_eq!(result.as_bool(), result.is_ok());
    }

    #[test]
    fn unwrap_or_else_receives_the_error(error in any::<i64>()) {
        let recovered = Result::<i64, i64>::Error(error).unwrap_or_else(|e| e.wrapping_add(1));
        prop_assert_eq!(recovered, error.wrapping_add(1));
    }

    #[test]
    fn ok_slot_alone_is_enumerated(x in any::<i64>()) {
        prop_assert_eq!(Result::<i64, i64>::Ok(x).into_iter().collect::<Vec<_>>(), vec![x]);
        prop_assert_eq!(Result::<i64, i64>::Error(x).iter().count(), 0);
    }

    #[test]
    fn option_conversions_are_consistent(x in any::<i64>(), tag_ok in any::<bool>()) {
        let result: Result<i64, i64> = if tag_ok { Result::Ok(x) } else { Result::Error(x) };
        prop_assert_eq!(Option::<i64>::from(result), result.ok());
        prop_assert_eq!(result.ok().is_some(), result.is_ok());
    }
}
