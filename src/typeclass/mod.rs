//! Type class traits for `Maybe`.
//!
//! - [`TypeConstructor`]: emulation of higher-kinded types with GATs
//! - [`Functor`]: mapping over the held value
//! - [`Applicative`]: lifting values and combining independent `Maybe`s
//! - [`Monad`]: sequencing dependent computations
//!
//! Each trait is implemented for [`Maybe`](crate::maybe::Maybe) in terms of
//! its inherent operators, so the trait methods short-circuit exactly like
//! [`Maybe::bind`](crate::maybe::Maybe::bind).
//!
//! # Examples
//!
//! ```rust
//! use lambars_maybe::maybe::Maybe;
//! use lambars_maybe::typeclass::{Applicative, Functor, Monad};
//!
//! let width = Maybe::lift(3);
//! let height = Maybe::lift(4);
//! let area = width.map2(height, |w, h| w * h).fmap(|a| a * 2);
//! assert_eq!(area, Maybe::lift(24));
//!
//! let halved = area.flat_map(|a| if a % 2 == 0 { Maybe::lift(a / 2) } else { Maybe::absent() });
//! assert_eq!(halved, Maybe::lift(12));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
