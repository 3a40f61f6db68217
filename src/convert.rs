//! Adapters from the standard library's sum types into this crate's.
//!
//! The inherent `into_std`/`from_std` methods cover the other direction;
//! these traits exist so call chains starting from std values read
//! naturally.

use core::option::Option as StdOption;
use core::result::Result as StdResult;

use crate::option::Option;
use crate::result::Result;

/// Conversion into [`Option`], implemented for the standard library's
/// `Option`.
///
/// # Examples
///
/// ```
/// use twofold::{IntoOption, Option};
///
/// let found = [1, 2, 3].iter().find(|&&n| n > 1).into_option();
/// assert_eq!(found, Option::Some(&2));
/// ```
pub trait IntoOption<T> {
    fn into_option(self) -> Option<T>;
}

impl<T> IntoOption<T> for StdOption<T> {
    #[inline]
    fn into_option(self) -> Option<T> {
        Option::from_std(self)
    }
}

/// Conversion into [`Result`], implemented for the standard library's
/// `Result`.
pub trait IntoResult<T, E> {
    fn into_result(self) -> Result<T, E>;
}

impl<T, E> IntoResult<T, E> for StdResult<T, E> {
    #[inline]
    fn into_result(self) -> Result<T, E> {
        Result::from_std(self)
    }
}

/// Lossy conversion keeping only the `Ok` slot, matching
/// [`Result::into_option`].
///
/// Call sites must name the target type (`Option::<T>::from(result)`):
/// the bare-value conversion `From<T> for Option<T>` also accepts a
/// `Result`, wrapping it whole. [`Result::into_option`] and
/// [`Result::ok`] avoid the ambiguity entirely.
impl<T, E> From<Result<T, E>> for Option<T> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result.ok()
    }
}
