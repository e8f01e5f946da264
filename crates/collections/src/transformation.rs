//! Transforming elements: map, pluck, invoke

use crate::traversal::each;
use underbar_core::{Capabilities, Container, Error, Method, Record, Result};

/// Results of `iterator(element, key, collection)` for every element, in
/// traversal order
pub fn map<C, F, R>(collection: &C, mut iterator: F) -> Vec<R>
where
    C: Container + ?Sized,
    F: FnMut(&C::Value, C::Key, &C) -> R,
{
    let mut result = Vec::with_capacity(collection.len());
    each(collection, |element, key, container| {
        result.push(iterator(element, key, container));
    });
    result
}

/// The field `name` of every record; `None` where a record lacks it
pub fn pluck<C>(collection: &C, name: &str) -> Vec<Option<<C::Value as Record>::Field>>
where
    C: Container + ?Sized,
    C::Value: Record,
    <C::Value as Record>::Field: Clone,
{
    map(collection, |record, _, _| record.field(name).cloned())
}

/// Call `method` on every element with `args`.
///
/// A [`Method::Named`] capability is looked up on each element separately.
/// The first element that lacks it stops the call with
/// [`Error::MissingCapability`]; nothing is recovered.
pub fn invoke<T, A, R>(sequence: &[T], method: &Method<'_, T, A, R>, args: &A) -> Result<Vec<R>>
where
    T: Capabilities<A, Output = R>,
{
    let mut failure = None;
    let results = map(sequence, |element, index, _| {
        if failure.is_some() {
            return None;
        }
        let outcome = method.apply(element, args);
        if outcome.is_none() {
            failure = Some(Error::missing_capability(
                method.name().unwrap_or_default(),
                index,
            ));
        }
        outcome
    });

    match failure {
        Some(error) => Err(error),
        None => Ok(results.into_iter().flatten().collect()),
    }
}

/// Call `func` with every element as receiver; the callable-only form of
/// [`invoke`] with no capability bound
pub fn invoke_with<T, A, R, F>(sequence: &[T], func: F, args: &A) -> Vec<R>
where
    F: Fn(&T, &A) -> R,
{
    map(sequence, |element, _, _| func(element, args))
}
