//! Tests for the `maybe!` comprehension macro.
//!
//! The macro must behave like the explicit `bind`/`where_`/`lift` chain it
//! expands to.

#![cfg(feature = "compose")]
#![forbid(unsafe_code)]

use lambars_maybe::maybe;
use lambars_maybe::maybe::Maybe;
use proptest::prelude::*;
use std::cell::Cell;

fn maybe_i32() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from_nullable)
}

#[test]
fn comprehension_concatenates_strings() {
    let result = maybe! {
        head <= Maybe::lift("he".to_string());
        tail <= Maybe::lift("llo".to_string());
        yield head + &tail
    };
    assert_eq!(result, Maybe::lift("hello".to_string()));
}

#[test]
fn comprehension_with_absent_second_operand_is_absent() {
    let result = maybe! {
        head <= Maybe::lift("he".to_string());
        tail <= Maybe::<String>::absent();
        yield head + &tail
    };
    assert_eq!(result, Maybe::absent());
}

#[test]
fn comprehension_never_runs_steps_after_absent() {
    let counter = &Cell::new(0);
    let a = Maybe::lift(10);
    let b: Maybe<i32> = Maybe::absent();

    let result = maybe! {
        x <= a;
        y <= b;
        let sum = {
            counter.set(counter.get() + 1);
            x + y
        };
        yield sum
    };

    assert_eq!(result, Maybe::absent());
    assert_eq!(counter.get(), 0);
}

#[test]
fn comprehension_guard_in_the_middle() {
    let lookup = |key: &str| match key {
        "width" => Maybe::lift(3),
        "height" => Maybe::lift(4),
        _ => Maybe::absent(),
    };

    let area = |first: &'static str, second: &'static str| maybe! {
        width <= lookup(first);
        if width > 0;
        height <= lookup(second);
        yield width * height
    };

    assert_eq!(area("width", "height"), Maybe::lift(12));
    assert_eq!(area("width", "depth"), Maybe::absent());
}

proptest! {
    /// maybe! { x <= m; yield f(x) } == m.map(f)
    #[test]
    fn prop_single_bind_equals_map(value in maybe_i32()) {
        let function = |n: i32| n.wrapping_mul(2);
        let comprehension = maybe! {
            x <= value;
            yield function(x)
        };
        prop_assert_eq!(comprehension, value.map(function));
    }

    /// maybe! { x <= a; y <= b; yield (x, y) } == a.select_many_with(|_| b, pair)
    #[test]
    fn prop_nested_bind_equals_select_many_with(left in maybe_i32(), right in maybe_i32()) {
        let comprehension = maybe! {
            x <= left;
            y <= right;
            yield (x, y)
        };
        let query = left.select_many_with(|_| right, |x, y| (x, y));
        prop_assert_eq!(comprehension, query);
    }

    /// maybe! { x <= m; if p(x); yield x } == m.where_(p)
    #[test]
    fn prop_guard_equals_where(value in maybe_i32()) {
        let comprehension = maybe! {
            x <= value;
            if x % 2 == 0;
            yield x
        };
        prop_assert_eq!(comprehension, value.where_(|x| x % 2 == 0));
    }
}
