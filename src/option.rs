//! Optional values with value semantics and a rich combinator surface.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::option::Option as StdOption;

use crate::error::AccessError;
use crate::iter::Iter;
use crate::result::Result;

/// An optional value: either `Some` and contains a value, or `None` and
/// does not.
///
/// `Option` is a closed sum type with value semantics: it is `Copy` when its
/// payload is, it never clones or drops the payload beyond what assignment
/// does, and its zero value is absence — a default-constructed `Option` is
/// always `None`, never a half-initialized `Some`.
///
/// Combinators follow a strict short-circuit discipline: a predicate or
/// transform is only ever invoked when its branch is the active one. The
/// only operations that can fail are the explicit panicking accessors
/// ([`expect`](Self::expect) and [`unwrap`](Self::unwrap)); everything else
/// is total.
///
/// # Ordering
///
/// `None` sorts strictly before every `Some`; two `Some`s delegate to the
/// payload's order. The same rule applies when comparing against a bare
/// payload value, which is treated as an implicit `Some`.
///
/// # Examples
///
/// ```
/// use twofold::Option;
///
/// let present = Option::Some(5);
/// assert_eq!(present.filter(|n| *n > 0), Option::Some(5));
/// assert_eq!(present.map(|n| n * 2).unwrap_or(0), 10);
///
/// let absent: Option<i32> = Option::default();
/// assert!(absent.is_none());
/// assert_eq!(absent.unwrap_or(7), 7);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Option<T> {
    /// No value. Declared first so the derived total order puts absence
    /// before presence.
    #[default]
    None,
    /// Some value of type `T`.
    Some(T),
}

impl<T> Option<T> {
    /// Returns `true` if the option holds a value.
    #[inline]
    #[must_use]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if the option holds a value and the value matches the
    /// predicate. The predicate is not invoked when the option is `None`.
    #[inline]
    #[must_use]
    pub fn is_some_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
        match self {
            Self::Some(value) => predicate(value),
            Self::None => false,
        }
    }

    /// Returns `true` if the option holds no value.
    #[inline]
    #[must_use]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Converts from `&Option<T>` to `Option<&T>`.
    #[inline]
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Option::Some(value),
            Self::None => Option::None,
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the option is `None`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{}", message),
        }
    }

    /// Returns the contained value.
    ///
    /// # Panics
    ///
    /// Panics if the option is `None`. Accessing the wrong tag is a
    /// programmer error; prefer [`unwrap_or`](Self::unwrap_or) or
    /// [`fold`](Self::fold) when absence is an expected state.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        self.expect("called `Option::unwrap()` on a `None` value")
    }

    /// Returns the contained value or `fallback`.
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => fallback,
        }
    }

    /// Returns the contained value or the payload type's default.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Returns the contained value or computes a fallback. The supplier is
    /// invoked only when the option is `None`.
    #[inline]
    pub fn unwrap_or_else(self, supplier: impl FnOnce() -> T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => supplier(),
        }
    }

    /// Converts into a [`Result`], mapping `Some(v)` to `Ok(v)` and `None`
    /// to `Error(error)`. The error is eagerly supplied; use
    /// [`ok_or_else`](Self::ok_or_else) for a lazily-built one.
    #[inline]
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        match self {
            Self::Some(value) => Result::Ok(value),
            Self::None => Result::Error(error),
        }
    }

    /// Converts into a [`Result`], mapping `Some(v)` to `Ok(v)` and `None`
    /// to `Error(supplier())`. The supplier is invoked only when the option
    /// is `None`.
    #[inline]
    pub fn ok_or_else<E>(self, supplier: impl FnOnce() -> E) -> Result<T, E> {
        match self {
            Self::Some(value) => Result::Ok(value),
            Self::None => Result::Error(supplier()),
        }
    }

    /// Returns the option unchanged if it holds a value matching the
    /// predicate, otherwise `None`. The predicate is not invoked when the
    /// option is already `None`.
    #[inline]
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Maps an `Option<T>` to an `Option<U>` by applying a transform to a
    /// contained value. The transform is not invoked when the option is
    /// `None`.
    #[inline]
    pub fn map<U>(self, transform: impl FnOnce(T) -> U) -> Option<U> {
        match self {
            Self::Some(value) => Option::Some(transform(value)),
            Self::None => Option::None,
        }
    }

    /// Applies a transform to a contained value, or returns the eagerly
    /// supplied `default`.
    #[inline]
    pub fn map_or<U>(self, default: U, transform: impl FnOnce(T) -> U) -> U {
        match self {
            Self::Some(value) => transform(value),
            Self::None => default,
        }
    }

    /// Applies a transform to a contained value, or computes a default. Only
    /// the branch matching the tag is invoked.
    #[inline]
    pub fn map_or_else<U>(self, default: impl FnOnce() -> U, transform: impl FnOnce(T) -> U) -> U {
        match self {
            Self::Some(value) => transform(value),
            Self::None => default(),
        }
    }

    /// Collapses the option by invoking exactly one of the two branches.
    ///
    /// The side-effecting form is this same call with `R = ()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use twofold::Option;
    ///
    /// let label = Option::Some(3).fold(|n| format!("got {}", n), || "nothing".into());
    /// assert_eq!(label, "got 3");
    /// ```
    #[inline]
    pub fn fold<R>(self, on_some: impl FnOnce(T) -> R, on_none: impl FnOnce() -> R) -> R {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// Converts into a [`Result`], mapping `None` to the generic
    /// [`AccessError::WasNone`] failure.
    #[inline]
    pub fn as_result(self) -> Result<T, AccessError> {
        self.ok_or(AccessError::WasNone)
    }

    /// The boolean-context value of the option: `true` iff `Some`.
    ///
    /// Equivalent to [`is_some`](Self::is_some); exists so call sites that
    /// read like a truthiness check have a name for it, alongside the
    /// `From<Option<T>> for bool` conversion.
    #[inline]
    #[must_use]
    pub const fn as_bool(&self) -> bool {
        self.is_some()
    }

    /// Returns `None` if this option is `None`, otherwise returns `other`.
    #[inline]
    pub fn and<U>(self, other: Option<U>) -> Option<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Option::None,
        }
    }

    /// Returns `None` if this option is `None`, otherwise calls `transform`
    /// with the contained value and returns the result.
    #[inline]
    pub fn and_then<U>(self, transform: impl FnOnce(T) -> Option<U>) -> Option<U> {
        match self {
            Self::Some(value) => transform(value),
            Self::None => Option::None,
        }
    }

    /// Returns this option if it holds a value, otherwise `other`.
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => other,
        }
    }

    /// Returns this option if it holds a value, otherwise computes one. The
    /// supplier is invoked only when the option is `None`.
    #[inline]
    pub fn or_else(self, supplier: impl FnOnce() -> Self) -> Self {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => supplier(),
        }
    }

    /// Returns whichever of the two options holds a value, or `None` when
    /// both or neither do.
    #[inline]
    pub fn xor(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(value), Self::None) => Self::Some(value),
            (Self::None, Self::Some(value)) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// Zips two options into an option of a pair; `Some` only when both are.
    #[inline]
    pub fn zip<U>(self, other: Option<U>) -> Option<(T, U)> {
        match (self, other) {
            (Self::Some(a), Option::Some(b)) => Option::Some((a, b)),
            _ => Option::None,
        }
    }

    /// Returns a fresh iterator over the contained value: one element when
    /// `Some`, none when `None`. Each call restarts from the beginning.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().into_std())
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_std(self) -> StdOption<T> {
        match self {
            Self::Some(value) => StdOption::Some(value),
            Self::None => StdOption::None,
        }
    }

    /// Converts from the standard library's `Option`.
    #[inline]
    pub fn from_std(option: StdOption<T>) -> Self {
        match option {
            StdOption::Some(value) => Self::Some(value),
            StdOption::None => Self::None,
        }
    }
}

impl<T> Option<Option<T>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Option<T> {
        match self {
            Self::Some(inner) => inner,
            Self::None => Option::None,
        }
    }
}

/// A bare value converts into its `Some`.
impl<T> From<T> for Option<T> {
    fn from(value: T) -> Self {
        Self::Some(value)
    }
}

/// Boolean-context conversion: `true` iff `Some`.
impl<T> From<Option<T>> for bool {
    fn from(option: Option<T>) -> Self {
        option.is_some()
    }
}

/// A bare payload value compares as an implicit `Some`: equal only when the
/// option holds an equal value.
impl<T: PartialEq> PartialEq<T> for Option<T> {
    fn eq(&self, other: &T) -> bool {
        match self {
            Self::Some(value) => value == other,
            Self::None => false,
        }
    }
}

/// A bare payload value compares as an implicit `Some`: `None` sorts
/// strictly before it, and a held value delegates to the payload's order.
impl<T: PartialOrd> PartialOrd<T> for Option<T> {
    fn partial_cmp(&self, other: &T) -> StdOption<Ordering> {
        match self {
            Self::Some(value) => value.partial_cmp(other),
            Self::None => StdOption::Some(Ordering::Less),
        }
    }
}

/// Hashing delegates to the payload when present; absence hashes a fixed
/// constant.
impl<T: Hash> Hash for Option<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            // No discriminant byte: `Some(v)` must hash exactly like `v`,
            // so `Some(0u8)` and `None` are allowed to collide.
            Self::Some(value) => value.hash(state),
            Self::None => state.write_u8(0),
        }
    }
}

/// Renders as `Some(<value>)` or `None`. The exact format is an observable
/// contract.
impl<T: fmt::Display> fmt::Display for Option<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(f, "Some({})", value),
            Self::None => f.write_str("None"),
        }
    }
}

static_assertions::assert_impl_all!(Option<i32>: Send, Sync, Copy);
