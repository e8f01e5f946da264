//! Membership and quantifier tests, expressed as folds

use crate::reduction::reduce;
use underbar_core::{Container, Truthy};

/// Whether any element equals `target`
pub fn contains<C>(collection: &C, target: &C::Value) -> bool
where
    C: Container + ?Sized,
    C::Value: PartialEq,
{
    reduce(
        collection,
        |was_found, item| was_found || item == target,
        false,
    )
}

/// Whether every element passes `predicate`; `true` for an empty collection.
///
/// After the first failure the predicate is not called again.
pub fn every<C, P, R>(collection: &C, mut predicate: P) -> bool
where
    C: Container + ?Sized,
    P: FnMut(&C::Value) -> R,
    R: Truthy,
{
    reduce(
        collection,
        |passing, element| passing && predicate(element).is_truthy(),
        true,
    )
}

/// Whether every element is itself truthy
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Container + ?Sized,
    C::Value: Truthy,
{
    every(collection, |element| element.is_truthy())
}

/// Whether any element passes `predicate`; `false` for an empty collection.
///
/// After the first success the predicate is not called again.
pub fn some<C, P, R>(collection: &C, mut predicate: P) -> bool
where
    C: Container + ?Sized,
    P: FnMut(&C::Value) -> R,
    R: Truthy,
{
    reduce(
        collection,
        |found, element| found || predicate(element).is_truthy(),
        false,
    )
}

/// Whether any element is itself truthy
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Container + ?Sized,
    C::Value: Truthy,
{
    some(collection, |element| element.is_truthy())
}
