//! # lambars-maybe
//!
//! A `Maybe` type for Rust with a monadic API and query-comprehension
//! operators.
//!
//! ## Overview
//!
//! [`Maybe<T>`](maybe::Maybe) is an immutable value that is either present
//! or absent. Every composition operator is built on [`Maybe::bind`], which
//! short-circuits on absence, so a chain of operators stops at the first
//! absent value. The crate includes:
//!
//! - **Maybe**: construction, inspection, equality and hashing, `map`,
//!   `bind`, `match_with`, `tap`, `or_else`
//! - **Query operators**: `select`, `select_many`, `select_many_with`, `where_`
//! - **Type Classes**: Functor, Applicative, Monad for `Maybe`
//! - **Comprehension**: the `maybe!` macro (feature `compose`)
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Applicative, Monad)
//! - `compose`: The `maybe!` comprehension macro
//! - `serde`: `Serialize`/`Deserialize` for `Maybe`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lambars_maybe::prelude::*;
//!
//! let a = Maybe::lift(10);
//! let b: Maybe<i32> = Maybe::absent();
//!
//! assert_eq!(a.bind(|x| b.bind(|y| Maybe::lift(x + y))), Maybe::absent());
//! assert_eq!(a.map(|x| x + 1).or_else(0), 11);
//! ```
//!
//! [`Maybe::bind`]: maybe::Maybe::bind

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lambars_maybe::prelude::*;
/// ```
pub mod prelude {
    pub use crate::maybe::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod maybe;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;
