//! Set operations over sequences, keeping first-occurrence order

use crate::predicates::every;
use crate::search::index_of;
use crate::selection::{filter, uniq};

/// Distinct elements of `first` present in every one of `others`.
///
/// Order follows first occurrence in `first`. With no `others` this is
/// just the deduplicated `first`.
pub fn intersection<T, S>(first: &[T], others: &[S]) -> Vec<T>
where
    T: PartialEq + Clone,
    S: AsRef<[T]>,
{
    let unique = uniq(first).unwrap_or_default();
    filter(unique.as_slice(), |item| {
        every(others, |other| index_of(other.as_ref(), item).is_some())
    })
}

/// Distinct elements of `first` present in none of `others`
pub fn difference<T, S>(first: &[T], others: &[S]) -> Vec<T>
where
    T: PartialEq + Clone,
    S: AsRef<[T]>,
{
    let unique = uniq(first).unwrap_or_default();
    filter(unique.as_slice(), |item| {
        every(others, |other| index_of(other.as_ref(), item).is_none())
    })
}
