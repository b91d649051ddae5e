#![cfg(feature = "list")]
//! Property-based tests for LazyList.
//!
//! These tests check that the lazy combinators agree with their eager
//! counterparts on finite lists, and that `take` bounds the work done on
//! infinite ones.

use lazylist::list::LazyList;
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

// =============================================================================
// Strategy for generating element vectors
// =============================================================================

/// Generates a `Vec<i32>` with up to `max_size` elements.
fn elements_strategy(max_size: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..max_size)
}

/// Generates small vectors for faster tests.
fn small_elements() -> impl Strategy<Value = Vec<i32>> {
    elements_strategy(30)
}

proptest! {
    // =========================================================================
    // Construction and Consumption
    // =========================================================================

    #[test]
    fn prop_eager_round_trip_is_identity(elements in small_elements()) {
        let list = LazyList::from_eager_sequence(elements.clone());
        prop_assert_eq!(list.to_eager_sequence(), elements);
    }

    #[test]
    fn prop_length_matches_eager_len(elements in small_elements()) {
        let list = LazyList::from_eager_sequence(elements);
        prop_assert_eq!(list.length(), list.to_eager_sequence().len());
    }

    #[test]
    fn prop_collect_matches_from_sequence(elements in small_elements()) {
        let collected: LazyList<i32> = elements.iter().copied().collect();
        let built = LazyList::from_sequence(elements.clone());
        prop_assert_eq!(collected.to_eager_sequence(), built.to_eager_sequence());
    }

    // =========================================================================
    // Map
    // =========================================================================

    #[test]
    fn prop_map_is_elementwise(elements in small_elements()) {
        let function = |x: i32| x.wrapping_mul(3).wrapping_sub(1);
        let mapped = LazyList::from_eager_sequence(elements.clone()).map(function);
        let expected: Vec<i32> = elements.into_iter().map(function).collect();
        prop_assert_eq!(mapped.to_eager_sequence(), expected);
    }

    #[test]
    fn prop_map_identity(elements in small_elements()) {
        let list = LazyList::from_eager_sequence(elements.clone());
        prop_assert_eq!(list.map(|x| x).to_eager_sequence(), elements);
    }

    #[test]
    fn prop_map_composition(elements in small_elements()) {
        let list = LazyList::from_eager_sequence(elements);
        let first = |x: i32| x.wrapping_add(1);
        let second = |x: i32| x.wrapping_mul(2);
        prop_assert_eq!(
            list.map(first).map(second).to_eager_sequence(),
            list.map(move |x| second(first(x))).to_eager_sequence()
        );
    }

    // =========================================================================
    // Take and Drop
    // =========================================================================

    #[test]
    fn prop_take_length_is_min(elements in small_elements(), count in 0_usize..40) {
        let length = elements.len();
        let list = LazyList::from_eager_sequence(elements);
        prop_assert_eq!(list.take(count).length(), count.min(length));
    }

    #[test]
    fn prop_take_matches_prefix(elements in small_elements(), count in 0_usize..40) {
        let list = LazyList::from_eager_sequence(elements.clone());
        let expected: Vec<i32> = elements.into_iter().take(count).collect();
        prop_assert_eq!(list.take(count).to_eager_sequence(), expected);
    }

    #[test]
    fn prop_take_on_infinite_has_length_count(seed: u32, count in 0_usize..200) {
        let list = LazyList::generate(seed, |n| n.wrapping_add(1));
        prop_assert_eq!(list.take(count).length(), count);
    }

    #[test]
    fn prop_take_forces_at_most_count_nodes(count in 0_usize..100) {
        let forced = Rc::new(Cell::new(0_usize));
        let counter = Rc::clone(&forced);
        let list = LazyList::unfold(0_u64, move |&n| {
            counter.set(counter.get() + 1);
            Some((n, n + 1))
        });

        let _ = list.take(count).to_eager_sequence();
        prop_assert!(forced.get() <= count);
    }

    #[test]
    fn prop_drop_removes_prefix(elements in small_elements(), count in 0_usize..40) {
        let list = LazyList::from_eager_sequence(elements.clone());
        let skip = count.min(elements.len());
        prop_assert_eq!(list.drop(count).to_eager_sequence(), elements[skip..].to_vec());
    }

    #[test]
    fn prop_take_drop_partition(elements in small_elements(), count in 0_usize..40) {
        let list = LazyList::from_eager_sequence(elements.clone());
        let mut rejoined = list.take(count).to_eager_sequence();
        rejoined.extend(list.drop(count).to_eager_sequence());
        prop_assert_eq!(rejoined, elements);
    }

    // =========================================================================
    // Reduce
    // =========================================================================

    #[test]
    fn prop_reduce_matches_iterator_fold(elements in small_elements(), initial: i64) {
        let list = LazyList::from_eager_sequence(elements.clone());
        let expected = elements
            .iter()
            .fold(initial, |accumulator, &x| accumulator.wrapping_add(i64::from(x)));
        prop_assert_eq!(
            list.reduce(|accumulator, x| accumulator.wrapping_add(i64::from(x)), initial),
            expected
        );
    }

    // =========================================================================
    // Memoization
    // =========================================================================

    #[test]
    fn prop_memoize_preserves_elements(elements in small_elements()) {
        let list = LazyList::from_eager_sequence(elements.clone()).memoize();
        prop_assert_eq!(list.to_eager_sequence(), elements.clone());
        prop_assert_eq!(list.to_eager_sequence(), elements);
    }
}
