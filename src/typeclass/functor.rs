//! Functor type class - mapping over container values.
//!
//! A `Functor` transforms the contents of a container without changing its
//! shape. For `Maybe`, `fmap` is [`Maybe::map`]: a present value is
//! transformed, an absent value stays absent and the function is not called.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use lambars_maybe::maybe::Maybe;
//! use lambars_maybe::typeclass::Functor;
//!
//! let transformed: Maybe<String> = Maybe::lift(5).fmap(|n| n.to_string());
//! assert_eq!(transformed, Maybe::lift("5".to_string()));
//!
//! let absent: Maybe<i32> = Maybe::absent();
//! assert_eq!(absent.fmap(|n| n.to_string()), Maybe::absent());
//! ```

use super::higher::TypeConstructor;
use crate::maybe::Maybe;

/// A type class for types that can have a function mapped over their contents.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    /// use lambars_maybe::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::lift(5).fmap(|n| n * 2), Maybe::lift(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor,
    /// leaving the functor itself available.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    /// use lambars_maybe::typeclass::Functor;
    ///
    /// let word = Maybe::lift("hello".to_string());
    /// assert_eq!(word.fmap_ref(|text| text.len()), Maybe::lift(5));
    /// assert!(word.has_value());
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    /// use lambars_maybe::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::lift(5).replace("replaced"), Maybe::lift("replaced"));
    /// assert_eq!(Maybe::<i32>::absent().replace("replaced"), Maybe::absent());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}
