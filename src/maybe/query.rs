//! Query-comprehension operators for `Maybe`.
//!
//! `select`, `select_many` and `where_` read like the stages of a query:
//! "for each x in the source, for each y in a projection, where a predicate
//! holds, select a result". Each of them is a thin layer over
//! [`Maybe::bind`] and [`Maybe::map`], so an absent stage stops the rest of
//! the query. The `maybe!` macro offers the same pipeline
//! as a block.
//!
//! # Examples
//!
//! ```rust
//! use lambars_maybe::maybe::Maybe;
//!
//! let total = Maybe::lift(10)
//!     .select_many_with(|_| Maybe::lift(5), |x, y| x + y)
//!     .where_(|sum| *sum > 12)
//!     .select(|sum| sum * 2);
//! assert_eq!(total, Maybe::lift(30));
//! ```

use super::container::Maybe;

impl<T> Maybe<T> {
    /// Projects the held value. Same as [`Maybe::map`].
    #[inline]
    pub fn select<R, F>(self, projection: F) -> Maybe<R>
    where
        F: FnOnce(T) -> R,
    {
        self.map(projection)
    }

    /// Projects the held value into another `Maybe`. Same as [`Maybe::bind`].
    #[inline]
    pub fn select_many<U, F>(self, projection: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        self.bind(projection)
    }

    /// Projects the held value into another `Maybe`, then combines the
    /// source and projected values.
    ///
    /// `combine` runs only when both the source and the projection are
    /// present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// let hello = Maybe::lift("he".to_string())
    ///     .select_many_with(|_| Maybe::lift("llo".to_string()), |head, tail| head + &tail);
    /// assert_eq!(hello, Maybe::lift("hello".to_string()));
    ///
    /// let nothing = Maybe::lift("he".to_string())
    ///     .select_many_with(|_| Maybe::<String>::absent(), |head, tail| head + &tail);
    /// assert_eq!(nothing, Maybe::absent());
    /// ```
    #[inline]
    pub fn select_many_with<U, R, F, C>(self, projection: F, combine: C) -> Maybe<R>
    where
        T: Clone,
        F: FnOnce(T) -> Maybe<U>,
        C: FnOnce(T, U) -> R,
    {
        self.bind(|source| {
            projection(source.clone()).map(|projected| combine(source, projected))
        })
    }

    /// Keeps the held value only if `predicate` holds for it.
    ///
    /// `predicate` is not called when this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::lift(4).where_(|n| n % 2 == 0), Maybe::lift(4));
    /// assert_eq!(Maybe::lift(3).where_(|n| n % 2 == 0), Maybe::absent());
    /// ```
    #[inline]
    pub fn where_<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.bind(|value| {
            if predicate(&value) {
                Self::lift(value)
            } else {
                Self::absent()
            }
        })
    }
}
