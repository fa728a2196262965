//! The `Maybe` optional value.
//!
//! This module provides:
//!
//! - [`Maybe`]: an immutable value that is either present or absent
//! - [`InvalidStateError`]: reported when the value of an absent `Maybe` is read
//! - Query operators (`select`, `select_many`, `select_many_with`, `where_`)
//!
//! # Examples
//!
//! ```rust
//! use lambars_maybe::maybe::Maybe;
//!
//! let a = Maybe::lift(10);
//! let b: Maybe<i32> = Maybe::absent();
//!
//! let sum = a.bind(|x| b.bind(|y| Maybe::lift(x + y)));
//! assert_eq!(sum, Maybe::absent());
//! ```

mod container;
mod error;
mod query;

pub use container::Maybe;
pub use error::{InvalidStateError, VALUE_NOT_PRESENT_MESSAGE};
