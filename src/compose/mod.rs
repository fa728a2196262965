//! Composition utilities for `Maybe`.
//!
//! - [`maybe!`](crate::maybe!): comprehension over `Maybe` values with bind,
//!   guard, let and yield steps
//!
//! # Example
//!
//! ```rust
//! use lambars_maybe::maybe;
//! use lambars_maybe::maybe::Maybe;
//!
//! let result = maybe! {
//!     x <= Maybe::lift(2);
//!     y <= Maybe::lift(3);
//!     if x < y;
//!     yield x * y
//! };
//! assert_eq!(result, Maybe::lift(6));
//! ```

mod maybe_macro;
