//! Zero-or-one iteration over [`Option`] and the `Ok` slot of [`Result`].
//!
//! Both adapters wrap the remaining element directly, so they are `Fused`,
//! exact-sized, and double-ended for free. Iteration consumes the adapter,
//! not the source: calling [`Option::iter`] or [`Result::iter`] again
//! yields a fresh pass over the same value.

use core::iter::FusedIterator;
use core::option::Option as StdOption;

use crate::option::Option;
use crate::result::Result;

/// A by-value iterator yielding the contained value at most once.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    remaining: StdOption<T>,
}

impl<T> IntoIter<T> {
    #[inline]
    pub(crate) fn new(remaining: StdOption<T>) -> Self {
        Self { remaining }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> StdOption<T> {
        self.remaining.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, StdOption<usize>) {
        let remaining = usize::from(self.remaining.is_some());
        (remaining, StdOption::Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> StdOption<T> {
        self.remaining.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

/// A borrowing iterator yielding a reference to the contained value at most
/// once.
#[derive(Debug)]
pub struct Iter<'a, T> {
    remaining: StdOption<&'a T>,
}

impl<'a, T> Iter<'a, T> {
    #[inline]
    pub(crate) fn new(remaining: StdOption<&'a T>) -> Self {
        Self { remaining }
    }
}

// Derived Clone would demand T: Clone; the reference is copyable on its own.
impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self { remaining: self.remaining }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> StdOption<&'a T> {
        self.remaining.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, StdOption<usize>) {
        let remaining = usize::from(self.remaining.is_some());
        (remaining, StdOption::Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> StdOption<&'a T> {
        self.remaining.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.into_std())
    }
}

impl<'a, T> IntoIterator for &'a Option<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Iterating a result enumerates only the `Ok` slot; errors yield nothing.
impl<T, E> IntoIterator for Result<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self.ok().into_std())
    }
}

impl<'a, T, E> IntoIterator for &'a Result<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
