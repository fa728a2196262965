//! The `Maybe<T>` type and its primitive operations.
//!
//! `Maybe<T>` is either `Present(T)` or `Absent`. All composition is built
//! on a single primitive, [`Maybe::bind`], which short-circuits on `Absent`
//! without calling its function. Every derived operator that yields a
//! `Maybe` goes through `bind`, so a chain of operators stops at the first
//! absent value and no later stage (or its side effects) runs.
//!
//! # Null-like inputs
//!
//! Rust has no universal null, so [`Maybe::lift`] is total and always
//! produces `Present`. Nullable inputs are expressed as `Option<T>` and are
//! collapsed with [`Maybe::from_nullable`] (or `From<Option<T>>`), where
//! `None` becomes `Absent`. [`Maybe::map_nullable`] applies the same
//! collapse to the result of a mapping function.
//!
//! # Examples
//!
//! ```rust
//! use lambars_maybe::maybe::Maybe;
//!
//! let greeting = Maybe::lift("he".to_string())
//!     .bind(|head| Maybe::lift("llo").map(move |tail| head + tail));
//! assert_eq!(greeting, Maybe::lift("hello".to_string()));
//!
//! let missing: Maybe<i32> = Maybe::absent();
//! assert_eq!(missing.map(|n| n + 1).or_else(0), 0);
//! ```

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::error::InvalidStateError;

/// Prefix written into the hasher before every `Maybe`.
const MAYBE_HASH_SALT: u64 = 0x4d61_7962_6553_616c;

/// Stand-in for the value's hash when the `Maybe` is absent.
const ABSENT_HASH_SENTINEL: u64 = 0x4e6f_7468_696e_6700;

/// An immutable optional value.
///
/// `Absent` is declared first, so the derived ordering places every absent
/// value before every present one. Two absent values of the same `T` are
/// always equal.
///
/// # Type Parameters
///
/// * `T` - The type of the held value
///
/// # Examples
///
/// ```rust
/// use lambars_maybe::maybe::Maybe;
///
/// let present = Maybe::lift(5);
/// assert!(present.has_value());
/// assert_eq!(*present.value(), 5);
///
/// let absent: Maybe<i32> = Maybe::absent();
/// assert!(!absent.has_value());
/// assert_eq!(absent, Maybe::ABSENT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Maybe<T> {
    /// No value.
    Absent,
    /// A held value.
    Present(T),
}

impl<T> Maybe<T> {
    /// The canonical absent value for `T`.
    pub const ABSENT: Self = Self::Absent;

    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value as present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::lift(42), Maybe::Present(42));
    /// assert!(Maybe::lift(String::new()).has_value());
    /// ```
    #[inline]
    pub const fn lift(value: T) -> Self {
        Self::Present(value)
    }

    /// Returns the canonical absent value.
    #[inline]
    pub const fn absent() -> Self {
        Self::Absent
    }

    /// Lifts a nullable value, collapsing `None` to `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::from_nullable(Some(3)), Maybe::lift(3));
    /// assert_eq!(Maybe::from_nullable(None::<i32>), Maybe::absent());
    /// ```
    #[inline]
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Absent,
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns `true` if a value is held.
    #[inline]
    pub const fn has_value(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns `true` if no value is held.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns a reference to the held value.
    ///
    /// Use [`Maybe::has_value`], [`Maybe::match_with`] or [`Maybe::or_else`]
    /// when absence is an expected outcome.
    ///
    /// # Panics
    ///
    /// Panics with the [`InvalidStateError`] message if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// let present = Maybe::lift("text");
    /// assert_eq!(*present.value(), "text");
    /// ```
    ///
    /// ```rust,should_panic
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::absent();
    /// absent.value();
    /// ```
    #[inline]
    #[track_caller]
    pub fn value(&self) -> &T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("{}", InvalidStateError::new("value")),
        }
    }

    /// Returns the held value, consuming the `Maybe`.
    ///
    /// # Panics
    ///
    /// Panics with the [`InvalidStateError`] message if this is `Absent`.
    #[inline]
    #[track_caller]
    pub fn into_value(self) -> T {
        match self {
            Self::Present(value) => value,
            Self::Absent => panic!("{}", InvalidStateError::new("into_value")),
        }
    }

    /// Returns a reference to the held value, or an [`InvalidStateError`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateError` if this is `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::lift(1).try_value(), Ok(&1));
    /// assert!(Maybe::<i32>::absent().try_value().is_err());
    /// ```
    #[inline]
    pub const fn try_value(&self) -> Result<&T, InvalidStateError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(InvalidStateError::new("try_value")),
        }
    }

    /// Returns the held value, consuming the `Maybe`, or an [`InvalidStateError`].
    ///
    /// # Errors
    ///
    /// Returns `InvalidStateError` if this is `Absent`.
    #[inline]
    pub fn try_into_value(self) -> Result<T, InvalidStateError> {
        match self {
            Self::Present(value) => Ok(value),
            Self::Absent => Err(InvalidStateError::new("try_into_value")),
        }
    }

    /// Borrows the held value, producing a `Maybe<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// let name = Maybe::lift("lambars".to_string());
    /// let length = name.as_ref().map(|text| text.len());
    /// assert_eq!(length, Maybe::lift(7));
    /// assert!(name.has_value());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Present(value) => Maybe::Present(value),
            Self::Absent => Maybe::Absent,
        }
    }

    /// Converts into an `Option<T>`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent => None,
        }
    }

    // =========================================================================
    // Bind
    // =========================================================================

    /// Threads the held value through a function returning another `Maybe`.
    ///
    /// If this is `Absent`, returns `Absent` without calling `function`.
    /// Otherwise returns `function(value)` unchanged. A panic inside
    /// `function` propagates to the caller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// fn half(n: i32) -> Maybe<i32> {
    ///     if n % 2 == 0 { Maybe::lift(n / 2) } else { Maybe::absent() }
    /// }
    ///
    /// assert_eq!(Maybe::lift(8).bind(half).bind(half), Maybe::lift(2));
    /// assert_eq!(Maybe::lift(6).bind(half).bind(half), Maybe::absent());
    /// ```
    #[inline]
    pub fn bind<R, F>(self, function: F) -> Maybe<R>
    where
        F: FnOnce(T) -> Maybe<R>,
    {
        match self {
            Self::Present(value) => function(value),
            Self::Absent => Maybe::Absent,
        }
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Applies a function to the held value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::lift(2).map(|n| n * 10), Maybe::lift(20));
    /// assert_eq!(Maybe::<i32>::absent().map(|n| n * 10), Maybe::absent());
    /// ```
    #[inline]
    pub fn map<R, F>(self, function: F) -> Maybe<R>
    where
        F: FnOnce(T) -> R,
    {
        self.bind(|value| Maybe::lift(function(value)))
    }

    /// Applies a function whose result may be null-like, collapsing `None`
    /// to `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// let parsed = Maybe::lift("12").map_nullable(|text| text.parse::<i32>().ok());
    /// assert_eq!(parsed, Maybe::lift(12));
    ///
    /// let rejected = Maybe::lift("twelve").map_nullable(|text| text.parse::<i32>().ok());
    /// assert_eq!(rejected, Maybe::absent());
    /// ```
    #[inline]
    pub fn map_nullable<R, F>(self, function: F) -> Maybe<R>
    where
        F: FnOnce(T) -> Option<R>,
    {
        self.bind(|value| Maybe::from_nullable(function(value)))
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the `Maybe` with one function per variant.
    ///
    /// Exactly one of the two functions is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// let describe = |maybe: Maybe<i32>| {
    ///     maybe.match_with(|n| format!("got {n}"), || "nothing".to_string())
    /// };
    /// assert_eq!(describe(Maybe::lift(3)), "got 3");
    /// assert_eq!(describe(Maybe::absent()), "nothing");
    /// ```
    #[inline]
    pub fn match_with<R, P, A>(self, on_present: P, on_absent: A) -> R
    where
        P: FnOnce(T) -> R,
        A: FnOnce() -> R,
    {
        match self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
    }

    /// Eliminates the `Maybe`, using `fallback` for the absent case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::lift(4).match_or(|n| n * 2, -1), 8);
    /// assert_eq!(Maybe::<i32>::absent().match_or(|n| n * 2, -1), -1);
    /// ```
    #[inline]
    pub fn match_or<R, P>(self, on_present: P, fallback: R) -> R
    where
        P: FnOnce(T) -> R,
    {
        self.match_with(on_present, || fallback)
    }

    // =========================================================================
    // Taps
    // =========================================================================

    /// Runs the callback matching the variant and returns `self` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// use std::cell::Cell;
    ///
    /// let seen = Cell::new(0);
    /// let result = Maybe::lift(5).tap(|n| seen.set(*n), || seen.set(-1));
    /// assert_eq!(seen.get(), 5);
    /// assert_eq!(result, Maybe::lift(5));
    /// ```
    #[inline]
    pub fn tap<P, A>(self, on_present: P, on_absent: A) -> Self
    where
        P: FnOnce(&T),
        A: FnOnce(),
    {
        match &self {
            Self::Present(value) => on_present(value),
            Self::Absent => on_absent(),
        }
        self
    }

    /// Runs `on_present` if a value is held and returns `self` unchanged.
    #[inline]
    pub fn tap_present<P>(self, on_present: P) -> Self
    where
        P: FnOnce(&T),
    {
        self.tap(on_present, || {})
    }

    /// Runs `on_absent` if no value is held and returns `self` unchanged.
    #[inline]
    pub fn tap_absent<A>(self, on_absent: A) -> Self
    where
        A: FnOnce(),
    {
        self.tap(|_| {}, on_absent)
    }

    // =========================================================================
    // Fallbacks
    // =========================================================================

    /// Returns the held value, or `fallback` if absent.
    ///
    /// `fallback` is evaluated before the call. Prefer
    /// [`Maybe::or_else_with`] when it is expensive to compute.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// assert_eq!(Maybe::lift(1).or_else(9), 1);
    /// assert_eq!(Maybe::absent().or_else(9), 9);
    /// ```
    #[inline]
    pub fn or_else(self, fallback: T) -> T {
        self.match_with(|value| value, || fallback)
    }

    /// Returns the held value, or the result of `fallback` if absent.
    ///
    /// `fallback` is only called when no value is held.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// let mut calls = 0;
    /// assert_eq!(Maybe::lift(1).or_else_with(|| { calls += 1; 9 }), 1);
    /// assert_eq!(calls, 0);
    /// ```
    #[inline]
    pub fn or_else_with<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.match_with(|value| value, fallback)
    }
}

// =============================================================================
// Dynamic Equality
// =============================================================================

impl<T: PartialEq + 'static> Maybe<T> {
    /// Compares against a value of any type.
    ///
    /// Returns `false` when `other` is not a `Maybe<T>`; otherwise behaves
    /// like `==`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambars_maybe::maybe::Maybe;
    ///
    /// let number = Maybe::lift(0);
    /// assert!(number.equals_any(&Maybe::lift(0)));
    /// assert!(!number.equals_any(&Maybe::lift(String::new())));
    /// assert!(!number.equals_any(&0));
    /// ```
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Absent
    }
}

impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        MAYBE_HASH_SALT.hash(state);
        match self {
            Self::Present(value) => value.hash(state),
            Self::Absent => ABSENT_HASH_SENTINEL.hash(state),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(value) => write!(formatter, "Maybe<{value}>"),
            Self::Absent => formatter.write_str("Maybe<Nothing>"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts an `Option`, collapsing `None` to `Absent`.
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Maybe<T>
where
    T: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Maybe<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize<'de>>::deserialize(deserializer).map(Self::from_nullable)
    }
}

static_assertions::assert_impl_all!(Maybe<i32>: Send, Sync, Copy, Eq, Hash, Default);
static_assertions::assert_impl_all!(Maybe<String>: Send, Sync, Clone, Ord);
static_assertions::assert_not_impl_any!(Maybe<std::rc::Rc<i32>>: Send, Sync);
