//! The zero-information value type.

use core::fmt;

/// A type with exactly one value and no information content.
///
/// `Unit` stands in where a generic slot requires a type but no data exists
/// or is needed — for example an `Option<Unit>` that only records presence,
/// or a `Result<Unit, E>` whose success carries nothing. It is the nominal
/// twin of `()`, which cannot always be spelled where a named type reads
/// better, and the two convert freely into each other.
///
/// All `Unit` values are identical: equality always holds, ordering is
/// always [`Equal`](core::cmp::Ordering::Equal), and the hash is a fixed
/// constant.
///
/// # Examples
///
/// ```
/// use twofold::Unit;
///
/// let a = Unit::new();
/// let b = Unit::default();
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "()");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit;

impl Unit {
    /// Creates the `Unit` value.
    pub const fn new() -> Self {
        Self
    }
}

impl From<()> for Unit {
    fn from(_: ()) -> Self {
        Self
    }
}

impl From<Unit> for () {
    fn from(_: Unit) -> Self {}
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}

static_assertions::assert_eq_size!(Unit, ());
static_assertions::assert_impl_all!(Unit: Send, Sync, Copy);

#[cfg(test)]
mod tests {
    use super::*;
    use core::cmp::Ordering;

    #[test]
    fn all_units_are_equal() {
        assert_eq!(Unit::new(), Unit::default());
        assert_eq!(Unit::new().cmp(&Unit::new()), Ordering::Equal);
        assert!(Unit::new() <= Unit::new());
        assert!(Unit::new() >= Unit::new());
    }

    #[test]
    fn converts_with_the_empty_tuple() {
        let unit: Unit = ().into();
        let _: () = unit.into();
    }

    #[test]
    fn hash_is_constant() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let hash = |u: Unit| {
            let mut hasher = DefaultHasher::new();
            u.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(Unit::new()), hash(Unit::default()));
    }

    #[test]
    fn displays_as_empty_tuple() {
        assert_eq!(Unit::new().to_string(), "()");
        assert_eq!(format!("{:?}", Unit::new()), "Unit");
    }
}
