//! Error types for state-dependent conversions.

use thiserror::Error;

/// Error produced when a state-dependent conversion meets the wrong tag.
///
/// The `Error`/`None` tags themselves are ordinary control data and never
/// raise anything; this type only shows up when a caller explicitly asks to
/// reinterpret absence as a failure, e.g. [`Option::as_result`].
///
/// [`Option::as_result`]: crate::Option::as_result
///
/// # Examples
///
/// ```
/// use twofold::{AccessError, Option, Result};
///
/// let missing: Option<i32> = Option::None;
/// assert_eq!(missing.as_result(), Result::Error(AccessError::WasNone));
/// ```
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessError {
    /// The option held no value.
    #[error("option was none")]
    WasNone,
}
