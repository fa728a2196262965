//! Monad type class - sequencing computations within a context.
//!
//! `Monad` extends [`Applicative`] with `flat_map`, where each step may
//! depend on the value produced by the previous one. For `Maybe`,
//! `flat_map` is [`Maybe::bind`]: the first absent step ends the sequence.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_maybe::maybe::Maybe;
//! use lambars_maybe::typeclass::Monad;
//!
//! fn parse_positive(text: &str) -> Maybe<i32> {
//!     Maybe::from_nullable(text.parse::<i32>().ok()).where_(|n| *n > 0)
//! }
//!
//! let result = Maybe::lift("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Maybe::lift(n * 2));
//! assert_eq!(result, Maybe::lift(84));
//! ```

use super::applicative::Applicative;
use crate::maybe::Maybe;

/// A type class for types that support sequencing of computations.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    /// use lambars_maybe::typeclass::Monad;
    ///
    /// let y = Maybe::lift(5).flat_map(|n| if n > 10 { Maybe::lift(n) } else { Maybe::absent() });
    /// assert_eq!(y, Maybe::absent());
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for `flat_map`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` is absent, `next` is not returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    /// use lambars_maybe::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::lift(5).then(Maybe::lift("hello")), Maybe::lift("hello"));
    /// assert_eq!(Maybe::<i32>::absent().then(Maybe::lift("hello")), Maybe::absent());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Monad for Maybe<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.bind(function)
    }
}
