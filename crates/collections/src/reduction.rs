//! Left folds over a collection

use crate::traversal::each;
use underbar_core::Container;

/// Fold every element into an accumulator, in traversal order.
///
/// Each step computes `accumulator = iterator(accumulator, element)`; an
/// empty collection returns `initial` unchanged.
///
/// ```
/// use underbar_collections::reduce;
///
/// let sum = reduce(&vec![1, 2, 3], |total, n| total + n, 0);
/// assert_eq!(sum, 6);
/// ```
pub fn reduce<C, F, A>(collection: &C, iterator: F, initial: A) -> A
where
    C: Container + ?Sized,
    F: FnMut(A, &C::Value) -> A,
{
    // `each` lends elements only for the duration of one visitor call, so
    // the accumulator is moved out of this slot and back on every step. It
    // is empty only while `iterator` runs; a panic there unwinds past the
    // final match.
    let mut iterator = iterator;
    let mut slot = Some(initial);
    each(collection, |element, _, _| {
        if let Some(previous) = slot.take() {
            slot = Some(iterator(previous, element));
        }
    });
    match slot {
        Some(result) => result,
        None => unreachable!("reduce slot is refilled after every step"),
    }
}

/// [`reduce`] starting from `A::default()` (zero for numbers)
pub fn reduce_default<C, F, A>(collection: &C, iterator: F) -> A
where
    C: Container + ?Sized,
    F: FnMut(A, &C::Value) -> A,
    A: Default,
{
    reduce(collection, iterator, A::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[test]
    fn test_sum() {
        assert_eq!(reduce(&vec![1, 2, 3], |total, n| total + n, 0), 6);
    }

    #[test]
    fn test_default_initial_is_zero() {
        let total: i64 = reduce_default(&vec![4i64, 5], |total, n| total + n);
        assert_eq!(total, 9);
        let empty: i64 = reduce_default(&Vec::<i64>::new(), |total, n| total + n);
        assert_eq!(empty, 0);
    }

    #[test]
    fn test_fold_order_is_traversal_order() {
        let joined = reduce(&["a", "b", "c"], |acc, s| acc + *s, String::new());
        assert_eq!(joined, "abc");
    }

    #[test]
    fn test_reduce_mapping_values() {
        let mut cart = HashMap::new();
        cart.insert("bread", 3);
        cart.insert("milk", 2);
        assert_eq!(reduce(&cart, |total, price| total + price, 0), 5);
    }

    #[test]
    fn test_iterator_panic_propagates() {
        let outcome = std::panic::catch_unwind(|| {
            reduce(
                &vec![1, 2, 3],
                |total: i32, n| {
                    if *n == 2 {
                        panic!("bad element");
                    }
                    total + n
                },
                0,
            )
        });
        assert!(outcome.is_err());
    }

    #[test]
    fn test_accumulator_is_moved_not_cloned() {
        struct Tally(Vec<u8>);

        let tally = reduce(
            &[1u8, 2, 3],
            |mut tally: Tally, n| {
                tally.0.push(*n);
                tally
            },
            Tally(Vec::new()),
        );
        assert_eq!(tally.0, vec![1, 2, 3]);
    }

    proptest! {
        #[test]
        fn empty_reduce_returns_initial(initial in any::<i32>()) {
            let result = reduce(&Vec::<i32>::new(), |_, n| *n, initial);
            prop_assert_eq!(result, initial);
        }
    }
}
