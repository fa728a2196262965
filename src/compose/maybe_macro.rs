//! Comprehension macro for `Maybe`.
//!
//! The [`maybe!`] macro writes a chain of dependent `Maybe` computations as a
//! flat block, in the style of a query expression or Scala's
//! for-comprehension. Each `<=` step is a [`Maybe::bind`], each `if` step is
//! a guard with the meaning of [`Maybe::where_`], and the final `yield`
//! lifts the result with [`Maybe::lift`].
//!
//! # Syntax
//!
//! ```text
//! maybe! {
//!     pattern <= source;        // Bind: continue with the held value
//!     if condition;             // Guard: stop with Absent when false
//!     let pattern = expression; // Pure let binding
//!     yield expression          // Final value, lifted into Maybe
//! }
//! ```
//!
//! A final bare expression that is already a `Maybe` may be used in place
//! of `yield`. Wrap it in a block when it starts with `if`, otherwise it is
//! read as a guard.
//!
//! # Supported Patterns
//!
//! - **Identifier pattern**: `x <= source;`
//! - **Tuple pattern**: `(a, b) <= source;`
//! - **Wildcard pattern**: `_ <= source;`
//! - **Let binding (identifier)**: `let x = expression;`
//! - **Let binding (tuple)**: `let (a, b) = expression;`
//!
//! # Short-circuiting
//!
//! Because every step expands to a nested `bind`, the first absent source or
//! failing guard ends the block. Nothing written after that point is
//! evaluated.
//!
//! ```rust
//! use lambars_maybe::maybe;
//! use lambars_maybe::maybe::Maybe;
//! use std::cell::Cell;
//!
//! let inner_runs = &Cell::new(0);
//! let a = Maybe::lift(10);
//! let b: Maybe<i32> = Maybe::absent();
//!
//! let result = maybe! {
//!     x <= a;
//!     y <= b;
//!     let _ = inner_runs.set(inner_runs.get() + 1);
//!     yield x + y
//! };
//! assert_eq!(result, Maybe::absent());
//! assert_eq!(inner_runs.get(), 0);
//! ```
//!
//! # Implementation Details
//!
//! `pattern <= source; rest` expands to
//!
//! ```rust,ignore
//! Maybe::bind(source, move |pattern| { /* expanded rest */ })
//! ```
//!
//! and `yield expression` expands to `Maybe::lift(expression)`.
//!
//! [`Maybe::bind`]: crate::maybe::Maybe::bind
//! [`Maybe::where_`]: crate::maybe::Maybe::where_
//! [`Maybe::lift`]: crate::maybe::Maybe::lift

#![forbid(unsafe_code)]

/// Comprehension over `Maybe` values.
///
/// # Examples
///
/// ## Combining two values
///
/// ```rust
/// use lambars_maybe::maybe;
/// use lambars_maybe::maybe::Maybe;
///
/// let result = maybe! {
///     head <= Maybe::lift("he".to_string());
///     tail <= Maybe::lift("llo");
///     yield head + tail
/// };
/// assert_eq!(result, Maybe::lift("hello".to_string()));
/// ```
///
/// ## Guards
///
/// ```rust
/// use lambars_maybe::maybe;
/// use lambars_maybe::maybe::Maybe;
///
/// let even_sum = |a: Maybe<i32>, b: Maybe<i32>| maybe! {
///     x <= a;
///     y <= b;
///     if (x + y) % 2 == 0;
///     yield x + y
/// };
/// assert_eq!(even_sum(Maybe::lift(1), Maybe::lift(3)), Maybe::lift(4));
/// assert_eq!(even_sum(Maybe::lift(1), Maybe::lift(2)), Maybe::absent());
/// ```
///
/// ## Tuple patterns and let bindings
///
/// ```rust
/// use lambars_maybe::maybe;
/// use lambars_maybe::maybe::Maybe;
///
/// let result = maybe! {
///     (width, height) <= Maybe::lift((3, 4));
///     let area = width * height;
///     yield area
/// };
/// assert_eq!(result, Maybe::lift(12));
/// ```
///
/// ## Ending with a `Maybe` expression
///
/// ```rust
/// use lambars_maybe::maybe;
/// use lambars_maybe::maybe::Maybe;
///
/// let result = maybe! {
///     text <= Maybe::lift("42");
///     Maybe::from_nullable(text.parse::<i32>().ok())
/// };
/// assert_eq!(result, Maybe::lift(42));
/// ```
#[macro_export]
macro_rules! maybe {
    // ==========================================================================
    // Terminal case: yield lifts the result
    // ==========================================================================

    (yield $result:expr) => {
        $crate::maybe::Maybe::lift($result)
    };

    // ==========================================================================
    // Guard: if condition; rest
    // ==========================================================================

    (if $condition:expr ; $($rest:tt)+) => {
        if $condition {
            $crate::maybe!($($rest)+)
        } else {
            $crate::maybe::Maybe::absent()
        }
    };

    // ==========================================================================
    // Let binding: let pattern = expression; rest
    // ==========================================================================

    (let $pattern:ident = $expr:expr ; $($rest:tt)+) => {{
        let $pattern = $expr;
        $crate::maybe!($($rest)+)
    }};

    (let ($($pattern:tt)*) = $expr:expr ; $($rest:tt)+) => {{
        let ($($pattern)*) = $expr;
        $crate::maybe!($($rest)+)
    }};

    (let _ = $expr:expr ; $($rest:tt)+) => {{
        let _ = $expr;
        $crate::maybe!($($rest)+)
    }};

    // ==========================================================================
    // Bind: pattern <= source; rest
    // ==========================================================================

    (_ <= $source:expr ; $($rest:tt)+) => {
        $crate::maybe::Maybe::bind($source, move |_| {
            $crate::maybe!($($rest)+)
        })
    };

    ($pattern:ident <= $source:expr ; $($rest:tt)+) => {
        $crate::maybe::Maybe::bind($source, move |$pattern| {
            $crate::maybe!($($rest)+)
        })
    };

    (($($pattern:tt)*) <= $source:expr ; $($rest:tt)+) => {
        $crate::maybe::Maybe::bind($source, move |($($pattern)*)| {
            $crate::maybe!($($rest)+)
        })
    };

    // ==========================================================================
    // Terminal case: an expression that is already a Maybe
    // ==========================================================================

    ($result:expr) => {
        $result
    };
}

#[cfg(test)]
mod tests {
    use crate::maybe::Maybe;
    use std::cell::Cell;

    #[test]
    fn test_yield_only() {
        let result = maybe! {
            yield 42
        };
        assert_eq!(result, Maybe::lift(42));
    }

    #[test]
    fn test_single_bind() {
        let result = maybe! {
            x <= Maybe::lift(5);
            yield x * 2
        };
        assert_eq!(result, Maybe::lift(10));
    }

    #[test]
    fn test_nested_bind() {
        let result = maybe! {
            x <= Maybe::lift(5);
            y <= Maybe::lift(10);
            yield x + y
        };
        assert_eq!(result, Maybe::lift(15));
    }

    #[test]
    fn test_absent_source_short_circuits() {
        let result: Maybe<i32> = maybe! {
            x <= Maybe::lift(5);
            y <= Maybe::<i32>::absent();
            yield x + y
        };
        assert_eq!(result, Maybe::absent());
    }

    #[test]
    fn test_guard_passes() {
        let result = maybe! {
            x <= Maybe::lift(4);
            if x % 2 == 0;
            yield x
        };
        assert_eq!(result, Maybe::lift(4));
    }

    #[test]
    fn test_guard_fails() {
        let result = maybe! {
            x <= Maybe::lift(3);
            if x % 2 == 0;
            yield x
        };
        assert_eq!(result, Maybe::absent());
    }

    #[test]
    fn test_failed_guard_stops_later_steps() {
        let later_steps = &Cell::new(0);
        let result = maybe! {
            x <= Maybe::lift(1);
            if x > 1;
            y <= {
                later_steps.set(later_steps.get() + 1);
                Maybe::lift(x)
            };
            yield y
        };
        assert_eq!(result, Maybe::absent());
        assert_eq!(later_steps.get(), 0);
    }

    #[test]
    fn test_tuple_pattern() {
        let result = maybe! {
            (a, b) <= Maybe::lift((1, 2));
            yield a + b
        };
        assert_eq!(result, Maybe::lift(3));
    }

    #[test]
    fn test_wildcard_pattern() {
        let result = maybe! {
            _ <= Maybe::lift(5);
            yield "done"
        };
        assert_eq!(result, Maybe::lift("done"));
    }

    #[test]
    fn test_let_binding() {
        let result = maybe! {
            x <= Maybe::lift(5);
            let doubled = x * 2;
            yield doubled
        };
        assert_eq!(result, Maybe::lift(10));
    }

    #[test]
    fn test_let_tuple_binding() {
        let result = maybe! {
            pair <= Maybe::lift((3, 4));
            let (a, b) = pair;
            yield a * b
        };
        assert_eq!(result, Maybe::lift(12));
    }

    #[test]
    fn test_terminal_maybe_expression() {
        let result = maybe! {
            x <= Maybe::lift(0);
            {
                if x == 0 { Maybe::absent() } else { Maybe::lift(10 / x) }
            }
        };
        assert_eq!(result, Maybe::<i32>::absent());
    }
}
