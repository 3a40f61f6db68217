//! Value-semantic `Option` and `Result` sum types with a rich combinator
//! surface.
//!
//! These shadow the std types on purpose: same algebra, different
//! defaults. Absence and failure are the zero values (`Option::default()`
//! is `None`, `Result::default()` is `Error`), values convert to `bool` in
//! boolean contexts, options compare directly against bare payloads, and
//! both types enumerate their contained value zero-or-one times.
//!
//! # Examples
//!
//! ```
//! use twofold::{some, Option, Result};
//!
//! let option = some(147).filter(|n| n % 3 == 0);
//! assert_eq!(option, Option::Some(147));
//! assert!(bool::from(option));
//!
//! let result: Result<i32, String> = option.ok_or_else(|| "empty".into());
//! assert_eq!(result.map(|n| n * 2), Result::Ok(294));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(clippy::all)]

pub mod convert;
pub mod error;
pub mod iter;
pub mod none;
pub mod option;
pub mod result;
pub mod unit;

pub use convert::{IntoOption, IntoResult};
pub use error::AccessError;
pub use none::None;
pub use option::Option;
pub use result::Result;
pub use unit::Unit;

/// Shorthand constructor for [`Option::Some`], useful where the variant
/// path reads poorly in expression position.
///
/// ```
/// use twofold::{some, Option};
///
/// assert_eq!(some("a"), Option::Some("a"));
/// ```
#[inline]
pub fn some<T>(value: T) -> Option<T> {
    Option::Some(value)
}

/// Prelude for glob imports. Deliberately excludes the [`None`] marker,
/// which shadows the std prelude's `None` binding.
pub mod prelude {
    pub use crate::{some, AccessError, IntoOption, IntoResult, Unit};
    pub use crate::{Option, Result};
}
