//! Selecting elements: filter, reject, uniq, first, last

use crate::search::index_of;
use crate::traversal::each;
use underbar_core::{Container, Truthy};

/// Elements whose predicate result is truthy, in traversal order
pub fn filter<C, P, R>(collection: &C, mut predicate: P) -> Vec<C::Value>
where
    C: Container + ?Sized,
    C::Value: Clone,
    P: FnMut(&C::Value) -> R,
    R: Truthy,
{
    let mut result = Vec::new();
    each(collection, |element, _, _| {
        if predicate(element).is_truthy() {
            result.push(element.clone());
        }
    });
    result
}

/// Elements whose predicate result is exactly `false`.
///
/// This is not the complement of [`filter`]: a predicate returning a merely
/// falsy value (`None`, `0`, `""`) keeps the element out of both results.
///
/// ```
/// use underbar_collections::{filter, reject};
///
/// let maybe_even = |n: &i32| if *n > 2 { Some(n % 2 == 0) } else { None };
/// assert_eq!(filter(&vec![1, 2, 3, 4], maybe_even), vec![4]);
/// assert_eq!(reject(&vec![1, 2, 3, 4], maybe_even), vec![3]);
/// ```
pub fn reject<C, P, R>(collection: &C, mut predicate: P) -> Vec<C::Value>
where
    C: Container + ?Sized,
    C::Value: Clone,
    P: FnMut(&C::Value) -> R,
    R: Truthy,
{
    let mut result = Vec::new();
    each(collection, |element, _, _| {
        if predicate(element).is_false() {
            result.push(element.clone());
        }
    });
    result
}

/// Duplicate-free copy keeping first occurrences, compared with `==`.
///
/// Returns `None` when no collection is supplied.
pub fn uniq<'a, C>(collection: impl Into<Option<&'a C>>) -> Option<Vec<C::Value>>
where
    C: Container + ?Sized + 'a,
    C::Value: PartialEq + Clone,
{
    let collection = collection.into()?;
    let mut result: Vec<C::Value> = Vec::new();
    each(collection, |element, _, _| {
        if index_of(result.as_slice(), element).is_none() {
            result.push(element.clone());
        }
    });
    Some(result)
}

/// The first element, if any
pub fn first<T: Clone>(sequence: &[T]) -> Option<T> {
    sequence.first().cloned()
}

/// The first `n` elements; all of them when `n` exceeds the length
pub fn first_n<T: Clone>(sequence: &[T], n: usize) -> Vec<T> {
    sequence[..n.min(sequence.len())].to_vec()
}

/// The last element, if any
pub fn last<T: Clone>(sequence: &[T]) -> Option<T> {
    sequence.last().cloned()
}

/// The last `n` elements; all of them when `n` exceeds the length
pub fn last_n<T: Clone>(sequence: &[T], n: usize) -> Vec<T> {
    sequence[sequence.len().saturating_sub(n)..].to_vec()
}
