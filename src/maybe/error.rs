//! Error type for reading the value out of an absent [`Maybe`](super::Maybe).
//!
//! Reading the value of an absent `Maybe` is a programmer error. The
//! panicking accessors ([`Maybe::value`](super::Maybe::value) and
//! [`Maybe::into_value`](super::Maybe::into_value)) report it with the
//! message of [`InvalidStateError`], while the `try_` accessors return it.

/// The fixed message carried by every [`InvalidStateError`].
pub const VALUE_NOT_PRESENT_MESSAGE: &str = "value is not present";

/// Represents an attempt to read the value of an absent `Maybe`.
///
/// # Examples
///
/// ```rust
/// use lambars_maybe::maybe::{InvalidStateError, Maybe};
///
/// let absent: Maybe<i32> = Maybe::absent();
/// let error = absent.try_value().unwrap_err();
/// assert_eq!(error, InvalidStateError::new("try_value"));
/// assert_eq!(format!("{error}"), "Maybe::try_value: value is not present");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidStateError {
    /// The name of the accessor that was called on the absent value.
    pub method_name: &'static str,
}

impl InvalidStateError {
    /// Creates an error for the given accessor name.
    #[inline]
    pub const fn new(method_name: &'static str) -> Self {
        Self { method_name }
    }

    /// Returns the fixed precondition message, without the accessor name.
    #[inline]
    pub const fn message(&self) -> &'static str {
        VALUE_NOT_PRESENT_MESSAGE
    }
}

impl std::fmt::Display for InvalidStateError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "Maybe::{}: {}",
            self.method_name, VALUE_NOT_PRESENT_MESSAGE
        )
    }
}

impl std::error::Error for InvalidStateError {}
