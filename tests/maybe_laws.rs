//! Property-based tests for `Maybe`.
//!
//! - **Identity and associativity laws** for `bind`
//! - **Equality** and hashing consistency
//! - **Map/where** interaction with absence

#![forbid(unsafe_code)]

use lambars_maybe::maybe::Maybe;
use proptest::prelude::*;
use std::cell::Cell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn maybe_i32() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from_nullable)
}

fn maybe_string() -> impl Strategy<Value = Maybe<String>> {
    any::<Option<String>>().prop_map(Maybe::from_nullable)
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn checked_half(n: i32) -> Maybe<i32> {
    if n % 2 == 0 {
        Maybe::lift(n / 2)
    } else {
        Maybe::absent()
    }
}

fn checked_increment(n: i32) -> Maybe<i32> {
    Maybe::from_nullable(n.checked_add(1))
}

// =============================================================================
// Bind laws
// =============================================================================

proptest! {
    /// bind(lift(x), f) == f(x)
    #[test]
    fn prop_bind_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Maybe::lift(value).bind(checked_half), checked_half(value));
    }

    /// bind(m, lift) == m
    #[test]
    fn prop_bind_right_identity(value in maybe_i32()) {
        prop_assert_eq!(value.bind(Maybe::lift), value);
    }

    /// bind(bind(m, f), g) == bind(m, |x| bind(f(x), g))
    #[test]
    fn prop_bind_associativity(value in maybe_i32()) {
        let left = value.bind(checked_half).bind(checked_increment);
        let right = value.bind(|x| checked_half(x).bind(checked_increment));
        prop_assert_eq!(left, right);
    }

    /// bind(absent, f) == absent, and f never runs
    #[test]
    fn prop_bind_absent_never_calls_function(offset in any::<i32>()) {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::absent().bind(|value| {
            calls.set(calls.get() + 1);
            Maybe::lift(value.wrapping_add(offset))
        });
        prop_assert_eq!(result, Maybe::absent());
        prop_assert_eq!(calls.get(), 0);
    }

    /// lift(x).has_value() for every x
    #[test]
    fn prop_lift_is_present(value in any::<String>()) {
        prop_assert!(Maybe::lift(value).has_value());
    }

    /// from_nullable collapses exactly the None inputs
    #[test]
    fn prop_from_nullable_matches_option(value in any::<Option<i32>>()) {
        prop_assert_eq!(Maybe::from_nullable(value).has_value(), value.is_some());
    }
}

// =============================================================================
// Equality and hashing
// =============================================================================

proptest! {
    /// lift(x) == lift(y) iff x == y
    #[test]
    fn prop_lift_equality_follows_values(left in 0..8_i32, right in 0..8_i32) {
        prop_assert_eq!(Maybe::lift(left) == Maybe::lift(right), left == right);
    }

    /// lift(x) != absent
    #[test]
    fn prop_present_never_equals_absent(value in any::<i32>()) {
        prop_assert_ne!(Maybe::lift(value), Maybe::absent());
    }

    /// Equal values hash equally
    #[test]
    fn prop_equal_values_hash_equally(value in maybe_string()) {
        let copy = value.clone();
        prop_assert_eq!(hash_of(&value), hash_of(&copy));
    }

    /// Comparison against an unrelated type is false
    #[test]
    fn prop_equals_any_unrelated_type_is_false(value in maybe_i32()) {
        prop_assert!(!value.equals_any(&value.map(|n| n.to_string())));
        prop_assert!(!value.equals_any(&0_u8));
        prop_assert!(value.equals_any(&value));
    }
}

// =============================================================================
// Map, where and orElse
// =============================================================================

proptest! {
    /// map(lift(x), f) == lift(f(x))
    #[test]
    fn prop_map_present(value in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(3);
        prop_assert_eq!(Maybe::lift(value).map(function), Maybe::lift(function(value)));
    }

    /// map_nullable collapses a None result
    #[test]
    fn prop_map_nullable_collapses(value in any::<i32>()) {
        let expected = Maybe::from_nullable(value.checked_mul(2));
        prop_assert_eq!(Maybe::lift(value).map_nullable(|n| n.checked_mul(2)), expected);
    }

    /// where(lift(x), p) is lift(x) when p(x) and absent otherwise
    #[test]
    fn prop_where_filters(value in any::<i32>()) {
        let predicate = |n: &i32| n % 3 == 0;
        let expected = if predicate(&value) { Maybe::lift(value) } else { Maybe::absent() };
        prop_assert_eq!(Maybe::lift(value).where_(predicate), expected);
    }

    /// The thunk form of or_else runs only for absent values
    #[test]
    fn prop_or_else_with_is_lazy(value in maybe_i32(), fallback in any::<i32>()) {
        let calls = Cell::new(0);
        let result = value.or_else_with(|| {
            calls.set(calls.get() + 1);
            fallback
        });
        prop_assert_eq!(result, value.or_else(fallback));
        prop_assert_eq!(calls.get(), usize::from(value.is_absent()));
    }
}
