//! Owning containers, fixed strings and return-value errors for code that
//! must not use panics as control flow.
//!
//! - [`Array`]: heap buffer with a single owner and deep-copy `Clone`.
//! - [`FixedArray`]: inline array with a compile-time capacity.
//! - [`ZStr`]: nul-terminated byte string with a fixed capacity.
//! - [`Unique`]: single-owner heap cell with a pluggable [`Release`] policy.
//! - [`Error`], [`ErrorKind`], [`Result`]: the failure payload returned by
//!   every fallible operation.
//!
//! Every accessor has a checked form returning [`Result`]; indexing with `[]`
//! is the unchecked form and treats an out-of-range index as a contract
//! violation.
//!
//! ```
//! use holdfast::{Array, ErrorKind, ResultExt};
//!
//! let speeds = Array::from([0.5, 1.0]);
//! let third = speeds.at(2).context("no speed for motor 2");
//! assert_eq!(ErrorKind::IndexOutOfRange, third.unwrap_err().kind());
//! ```

#![forbid(unsafe_code)]

#[macro_use]
mod logging;
mod array;
mod error;
mod fixed;
mod result;
mod unique;
mod zstr;

pub use array::Array;
pub use error::{Error, ErrorKind};
pub use fixed::FixedArray;
pub use result::{Result, ResultExt, ResultMut, ResultRef};
pub use unique::{DropRelease, Release, Unique};
pub use zstr::ZStr;

#[cfg(test)]
pub mod dropflag;
