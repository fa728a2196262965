//! Applicative type class - applying functions within a context.
//!
//! `Applicative` extends [`Functor`] with `pure`, which lifts a plain value
//! into the context, and with ways to combine several independent values in
//! the same context. For `Maybe`, `pure` is [`Maybe::lift`] and every
//! combinator yields `Absent` as soon as one input is absent.
//!
//! # Laws
//!
//! ## Identity
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_maybe::maybe::Maybe;
//! use lambars_maybe::typeclass::Applicative;
//!
//! let x: Maybe<i32> = <Maybe<()>>::pure(42);
//! assert_eq!(x, Maybe::lift(42));
//!
//! let sum = Maybe::lift(1).map2(Maybe::lift(2), |a, b| a + b);
//! assert_eq!(sum, Maybe::lift(3));
//! ```

use super::functor::Functor;
use crate::maybe::Maybe;

/// A type class for functors that can lift values and combine independent
/// computations.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    /// use lambars_maybe::typeclass::Applicative;
    ///
    /// let x: Maybe<&str> = <Maybe<()>>::pure("hello");
    /// assert_eq!(x, Maybe::lift("hello"));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    /// use lambars_maybe::typeclass::Applicative;
    ///
    /// let sum = Maybe::lift(1).map2(Maybe::<i32>::absent(), |x, y| x + y);
    /// assert_eq!(sum, Maybe::absent());
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three applicative values using a ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Combines two applicative values, keeping the left value.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
    {
        self.map2(other, |a, _| a)
    }

    /// Combines two applicative values, keeping the right value.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.map2(other, |_, b| b)
    }

    /// Applies a function held in the context to a value held in the context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    /// use lambars_maybe::typeclass::Applicative;
    ///
    /// let function: Maybe<fn(i32) -> i32> = Maybe::lift(|x| x + 1);
    /// assert_eq!(function.apply(Maybe::lift(5)), Maybe::lift(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::lift(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(A, B) -> C,
    {
        self.bind(|a| other.map(|b| function(a, b)))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Maybe<B>, third: Maybe<C>, function: F) -> Maybe<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.bind(|a| second.bind(|b| third.map(|c| function(a, b, c))))
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.bind(|function| other.map(function))
    }
}
