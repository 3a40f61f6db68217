//! Success-or-error values with value semantics, mirroring [`Option`]
//! structurally with two payload slots.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use crate::iter::Iter;
use crate::option::Option;

/// A value that is exactly one of a success (`Ok`) or an error (`Error`).
///
/// The `Error` tag is ordinary control data, not a raised failure: nothing
/// propagates until a caller explicitly extracts with the panicking
/// accessors or branches with [`fold`](Self::fold). Value semantics match
/// [`Option`]: `Copy` when both payloads are, no hidden allocation, and the
/// zero value is failure — a default-constructed `Result` is
/// `Error(E::default())`, so the success tag always requires explicit
/// construction.
///
/// # Ordering
///
/// Any `Ok` sorts strictly before any `Error`, regardless of payload
/// magnitudes; two values with the same tag delegate to that payload's
/// order.
///
/// # Examples
///
/// ```
/// use twofold::Result;
///
/// let parsed: Result<i32, String> = Result::Ok(147);
/// assert_eq!(parsed.map(|x| x * 2), Result::Ok(294));
///
/// let failed: Result<i32, String> = Result::Error("bad".into());
/// assert_eq!(failed.map(|x| x * 2), Result::Error("bad".to_string()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Result<T, E> {
    /// Success, containing a `T`. Declared first so the derived total order
    /// puts success before failure.
    Ok(T),
    /// Error, containing an `E`.
    Error(E),
}

impl<T, E> Result<T, E> {
    /// Returns `true` if the result is `Ok`.
    #[inline]
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the result is `Ok` and the value matches the
    /// predicate. The predicate is not invoked on `Error`.
    #[inline]
    #[must_use]
    pub fn is_ok_and(self, predicate: impl FnOnce(T) -> bool) -> bool {
        match self {
            Self::Ok(value) => predicate(value),
            Self::Error(_) => false,
        }
    }

    /// Returns `true` if the result is `Error`.
    #[inline]
    #[must_use]
    pub const fn is_error(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` if the result is `Error` and the error matches the
    /// predicate. The predicate is not invoked on `Ok`.
    #[inline]
    #[must_use]
    pub fn is_error_and(self, predicate: impl FnOnce(E) -> bool) -> bool {
        match self {
            Self::Ok(_) => false,
            Self::Error(error) => predicate(error),
        }
    }

    /// Converts from `&Result<T, E>` to `Result<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Error(error) => Result::Error(error),
        }
    }

    /// Returns the contained `Ok` value.
    ///
    /// # Panics
    ///
    /// On `Error`, re-raises the error payload *itself* via
    /// [`std::panic::panic_any`]: the exact error value becomes the panic
    /// payload, recoverable by identity through
    /// [`catch_unwind`](std::panic::catch_unwind) and a downcast. The error
    /// is never wrapped in a new message. Use [`expect`](Self::expect) for a
    /// plain-message panic, or [`fold`](Self::fold) when failure is an
    /// expected state.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T
    where
        E: core::any::Any + Send,
    {
        match self {
            Self::Ok(value) => value,
            Self::Error(error) => std::panic::panic_any(error),
        }
    }

    /// Returns the contained `Ok` value.
    ///
    /// # Panics
    ///
    /// Panics with `message` (and the error rendered for debugging) if the
    /// result is `Error`.
    #[inline]
    #[track_caller]
    pub fn expect(self, message: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Error(error) => panic!("{}: {:?}", message, error),
        }
    }

    /// Returns the contained `Ok` value or `fallback`.
    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Error(_) => fallback,
        }
    }

    /// Returns the contained `Ok` value or the payload type's default.
    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(|_| T::default())
    }

    /// Returns the contained `Ok` value or computes one from the error. The
    /// supplier is invoked only on `Error`.
    #[inline]
    pub fn unwrap_or_else(self, supplier: impl FnOnce(E) -> T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Error(error) => supplier(error),
        }
    }

    /// Returns the contained `Error` value.
    ///
    /// # Panics
    ///
    /// Panics with a generic invalid-state message if the result is `Ok`.
    /// The `Ok` value is only rendered into the message, never re-raised.
    #[inline]
    #[track_caller]
    pub fn unwrap_error(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Ok(value) => {
                panic!("called `Result::unwrap_error()` on an `Ok` value: {:?}", value)
            }
            Self::Error(error) => error,
        }
    }

    /// Returns the contained `Error` value.
    ///
    /// # Panics
    ///
    /// Panics with `message` if the result is `Ok`.
    #[inline]
    #[track_caller]
    pub fn expect_error(self, message: &str) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Ok(value) => panic!("{}: {:?}", message, value),
            Self::Error(error) => error,
        }
    }

    /// Returns the contained `Error` value or `fallback`.
    #[inline]
    pub fn unwrap_error_or(self, fallback: E) -> E {
        match self {
            Self::Ok(_) => fallback,
            Self::Error(error) => error,
        }
    }

    /// Returns the contained `Error` value or the error type's default.
    #[inline]
    pub fn unwrap_error_or_default(self) -> E
    where
        E: Default,
    {
        self.unwrap_error_or_else(|_| E::default())
    }

    /// Returns the contained `Error` value or computes one from the `Ok`
    /// value. The supplier is invoked only on `Ok`.
    #[inline]
    pub fn unwrap_error_or_else(self, supplier: impl FnOnce(T) -> E) -> E {
        match self {
            Self::Ok(value) => supplier(value),
            Self::Error(error) => error,
        }
    }

    /// Converts into an [`Option`] over the `Ok` slot, discarding any error.
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Option::Some(value),
            Self::Error(_) => Option::None,
        }
    }

    /// Converts into an [`Option`] over the `Error` slot, discarding any
    /// `Ok` value.
    #[inline]
    pub fn error(self) -> Option<E> {
        match self {
            Self::Ok(_) => Option::None,
            Self::Error(error) => Option::Some(error),
        }
    }

    /// Converts into an [`Option`] over the `Ok` slot. Alias of
    /// [`ok`](Self::ok); the error payload is intentionally lost.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.ok()
    }

    /// Splits into per-slot options; exactly one side is populated.
    ///
    /// # Examples
    ///
    /// ```
    /// use twofold::{Option, Result};
    ///
    /// let (ok, error) = Result::<i32, String>::Ok(5).deconstruct();
    /// assert_eq!(ok, Option::Some(5));
    /// assert_eq!(error, Option::None);
    /// ```
    #[inline]
    pub fn deconstruct(self) -> (Option<T>, Option<E>) {
        match self {
            Self::Ok(value) => (Option::Some(value), Option::None),
            Self::Error(error) => (Option::None, Option::Some(error)),
        }
    }

    /// Maps a `Result<T, E>` to a `Result<U, E>` by applying a transform to
    /// a contained `Ok` value, leaving any error untouched.
    #[inline]
    pub fn map<U>(self, transform: impl FnOnce(T) -> U) -> Result<U, E> {
        match self {
            Self::Ok(value) => Result::Ok(transform(value)),
            Self::Error(error) => Result::Error(error),
        }
    }

    /// Applies a transform to a contained `Ok` value, or returns the eagerly
    /// supplied `default`.
    #[inline]
    pub fn map_or<U>(self, default: U, transform: impl FnOnce(T) -> U) -> U {
        match self {
            Self::Ok(value) => transform(value),
            Self::Error(_) => default,
        }
    }

    /// Applies a transform to a contained `Ok` value, or computes a default
    /// from the error. Only the branch matching the tag is invoked.
    #[inline]
    pub fn map_or_else<U>(self, default: impl FnOnce(E) -> U, transform: impl FnOnce(T) -> U) -> U {
        match self {
            Self::Ok(value) => transform(value),
            Self::Error(error) => default(error),
        }
    }

    /// Maps a `Result<T, E>` to a `Result<T, F>` by applying a transform to
    /// a contained error, leaving any `Ok` value untouched.
    #[inline]
    pub fn map_error<F>(self, transform: impl FnOnce(E) -> F) -> Result<T, F> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Error(error) => Result::Error(transform(error)),
        }
    }

    /// Applies a transform to a contained error, or returns the eagerly
    /// supplied `default`.
    #[inline]
    pub fn map_error_or<F>(self, default: F, transform: impl FnOnce(E) -> F) -> F {
        match self {
            Self::Ok(_) => default,
            Self::Error(error) => transform(error),
        }
    }

    /// Applies a transform to a contained error, or computes a default from
    /// the `Ok` value. Only the branch matching the tag is invoked.
    #[inline]
    pub fn map_error_or_else<F>(
        self,
        default: impl FnOnce(T) -> F,
        transform: impl FnOnce(E) -> F,
    ) -> F {
        match self {
            Self::Ok(value) => default(value),
            Self::Error(error) => transform(error),
        }
    }

    /// Collapses the result by invoking exactly one of the two branches.
    ///
    /// The side-effecting form is this same call with `R = ()`.
    #[inline]
    pub fn fold<R>(self, on_ok: impl FnOnce(T) -> R, on_error: impl FnOnce(E) -> R) -> R {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Error(error) => on_error(error),
        }
    }

    /// The boolean-context value of the result: `true` iff `Ok`.
    ///
    /// Equivalent to [`is_ok`](Self::is_ok); paired with the
    /// `From<Result<T, E>> for bool` conversion.
    #[inline]
    #[must_use]
    pub const fn as_bool(&self) -> bool {
        self.is_ok()
    }

    /// Returns `true` if the result holds an `Ok` value equal to `value`.
    ///
    /// Bare-payload comparisons are methods rather than `PartialEq` impls:
    /// with two independent payload types the two trait impls become
    /// ambiguous whenever `T` and `E` coincide.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Self::Ok(ok) => ok == value,
            Self::Error(_) => false,
        }
    }

    /// Returns `true` if the result holds an error equal to `error`.
    #[inline]
    #[must_use]
    pub fn contains_error(&self, error: &E) -> bool
    where
        E: PartialEq,
    {
        match self {
            Self::Ok(_) => false,
            Self::Error(held) => held == error,
        }
    }

    /// Compares against a bare `Ok`-typed value, which is treated as an
    /// implicit `Ok`: a held error sorts strictly after it, a held `Ok`
    /// delegates to the payload's order.
    #[inline]
    pub fn partial_cmp_ok(&self, value: &T) -> Option<Ordering>
    where
        T: PartialOrd,
    {
        match self {
            Self::Ok(ok) => Option::from_std(ok.partial_cmp(value)),
            Self::Error(_) => Option::Some(Ordering::Greater),
        }
    }

    /// Compares against a bare error-typed value, which is treated as an
    /// implicit `Error`: a held `Ok` sorts strictly before it, a held error
    /// delegates to the payload's order.
    #[inline]
    pub fn partial_cmp_error(&self, error: &E) -> Option<Ordering>
    where
        E: PartialOrd,
    {
        match self {
            Self::Ok(_) => Option::Some(Ordering::Less),
            Self::Error(held) => Option::from_std(held.partial_cmp(error)),
        }
    }

    /// Returns `other` if this result is `Ok`, otherwise the held error.
    #[inline]
    pub fn and<U>(self, other: Result<U, E>) -> Result<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Error(error) => Result::Error(error),
        }
    }

    /// Calls `transform` with a contained `Ok` value, otherwise passes the
    /// held error through.
    #[inline]
    pub fn and_then<U>(self, transform: impl FnOnce(T) -> Result<U, E>) -> Result<U, E> {
        match self {
            Self::Ok(value) => transform(value),
            Self::Error(error) => Result::Error(error),
        }
    }

    /// Returns this result if it is `Ok`, otherwise `other`.
    #[inline]
    pub fn or<F>(self, other: Result<T, F>) -> Result<T, F> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Error(_) => other,
        }
    }

    /// Returns this result if it is `Ok`, otherwise computes one from the
    /// error. The supplier is invoked only on `Error`.
    #[inline]
    pub fn or_else<F>(self, supplier: impl FnOnce(E) -> Result<T, F>) -> Result<T, F> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Error(error) => supplier(error),
        }
    }

    /// Returns a fresh iterator over the `Ok` slot: one element when `Ok`,
    /// none when `Error`. The error payload is never enumerated.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_ref().ok().into_std())
    }

    /// Converts into the standard library's `Result`.
    #[inline]
    pub fn into_std(self) -> core::result::Result<T, E> {
        match self {
            Self::Ok(value) => core::result::Result::Ok(value),
            Self::Error(error) => core::result::Result::Err(error),
        }
    }

    /// Converts from the standard library's `Result`.
    #[inline]
    pub fn from_std(result: core::result::Result<T, E>) -> Self {
        match result {
            core::result::Result::Ok(value) => Self::Ok(value),
            core::result::Result::Err(error) => Self::Error(error),
        }
    }
}

/// The zero value is failure: `Error(E::default())`. Success always requires
/// explicit construction.
impl<T, E: Default> Default for Result<T, E> {
    fn default() -> Self {
        Self::Error(E::default())
    }
}

/// Boolean-context conversion: `true` iff `Ok`.
impl<T, E> From<Result<T, E>> for bool {
    fn from(result: Result<T, E>) -> Self {
        result.is_ok()
    }
}

/// Hashing delegates to whichever payload is active.
impl<T: Hash, E: Hash> Hash for Result<T, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Ok(value) => value.hash(state),
            Self::Error(error) => error.hash(state),
        }
    }
}

/// Renders as `Ok(<value>)` or `Error(<value>)`. The exact format is an
/// observable contract.
impl<T: fmt::Display, E: fmt::Display> fmt::Display for Result<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => write!(f, "Ok({})", value),
            Self::Error(error) => write!(f, "Error({})", error),
        }
    }
}

static_assertions::assert_impl_all!(Result<i32, String>: Send, Sync);
