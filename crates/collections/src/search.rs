//! Search by equality

use crate::traversal::each;
use underbar_core::Container;

/// Key of the first element equal to `target`, or `None` when absent.
///
/// For sequences the key is the index. The traversal always runs to the
/// end, but once a match is recorded later matches are ignored.
pub fn index_of<C>(collection: &C, target: &C::Value) -> Option<C::Key>
where
    C: Container + ?Sized,
    C::Value: PartialEq,
{
    let mut found = None;
    each(collection, |element, key, _| {
        if found.is_none() && element == target {
            found = Some(key);
        }
    });
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_first_match() {
        let numbers = vec![10, 20, 30, 20];
        assert_eq!(index_of(&numbers, &20), Some(1));
        assert_eq!(index_of(&numbers, &10), Some(0));
    }

    #[test]
    fn test_missing_is_none() {
        assert_eq!(index_of(&vec![1, 2, 3], &4), None);
        assert_eq!(index_of(&Vec::<i32>::new(), &1), None);
    }

    #[test]
    fn test_works_on_slices_of_strings() {
        let words = ["tea", "coffee", "tea"];
        assert_eq!(index_of(&words[..], &"tea"), Some(0));
    }
}
