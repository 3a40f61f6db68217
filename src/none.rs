//! The absent-value marker type.

use core::cmp::Ordering;
use core::fmt;

use crate::option::Option;

/// Marker for the absent state of an [`Option`].
///
/// `None` is a zero-sized value usable wherever code wants to talk about
/// absence without naming a payload type. All `None`s are the same value,
/// it converts to boolean `false`, and it compares against any `Option<T>`:
/// equal when the option is absent, and sorting before any present value.
///
/// The boolean algebra of absence is trivial — `&`, `|` and `^` over two
/// `None`s all yield `false`. Bitwise complement is deliberately not
/// implemented: `!None` does not compile, since there is no meaningful
/// "not absent" value to produce.
///
/// # Examples
///
/// ```
/// use twofold::{None, Option};
///
/// let missing: Option<i32> = Option::None;
/// assert_eq!(None, missing);
/// assert!(None < Option::Some(0));
/// assert!(!bool::from(None));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct None;

impl From<None> for bool {
    fn from(_: None) -> Self {
        false
    }
}

impl core::ops::BitAnd for None {
    type Output = bool;

    fn bitand(self, _: Self) -> bool {
        false
    }
}

impl core::ops::BitOr for None {
    type Output = bool;

    fn bitor(self, _: Self) -> bool {
        false
    }
}

impl core::ops::BitXor for None {
    type Output = bool;

    fn bitxor(self, _: Self) -> bool {
        false
    }
}

impl<T> PartialEq<Option<T>> for None {
    fn eq(&self, other: &Option<T>) -> bool {
        other.is_none()
    }
}

impl<T> PartialOrd<Option<T>> for None {
    fn partial_cmp(&self, other: &Option<T>) -> core::option::Option<Ordering> {
        if other.is_none() {
            core::option::Option::Some(Ordering::Equal)
        } else {
            core::option::Option::Some(Ordering::Less)
        }
    }
}

impl fmt::Display for None {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("None")
    }
}

static_assertions::assert_eq_size!(None, ());
static_assertions::assert_impl_all!(None: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_nones_are_equal() {
        assert_eq!(None, None);
        assert_eq!(None, None::default());
    }

    #[test]
    fn acts_as_false() {
        assert!(!bool::from(None));
        assert!(!(None & None));
        assert!(!(None | None));
        assert!(!(None ^ None));
    }

    #[test]
    fn compares_against_options() {
        assert_eq!(None, Option::<i32>::None);
        assert_ne!(None, Option::Some(0));
        assert!(None < Option::Some(i32::MIN));
        assert!(None <= Option::<i32>::None);
    }

    #[test]
    fn displays_as_none() {
        assert_eq!(None.to_string(), "None");
    }
}
