//! The traversal primitive

use underbar_core::Container;

/// Call `visitor(value, key, collection)` once for every element.
///
/// Sequences are visited in ascending index order; mappings in their own
/// iteration order. An empty collection produces no calls.
///
/// ```
/// use underbar_collections::each;
///
/// let mut total = 0;
/// each(&vec![1, 2, 3], |value, _, _| total += value);
/// assert_eq!(total, 6);
/// ```
pub fn each<C, F>(collection: &C, visitor: F)
where
    C: Container + ?Sized,
    F: FnMut(&C::Value, C::Key, &C),
{
    collection.each(visitor);
}
