//! Merging mappings

use crate::traversal::each;
use underbar_core::{Container, MappingMut};

/// Copy every entry of each source into `target`, in source order.
///
/// Later sources overwrite earlier ones and the target's own entries.
/// Returns the mutated target.
pub fn extend<'t, M, S>(target: &'t mut M, sources: &[&S]) -> &'t mut M
where
    M: MappingMut + ?Sized,
    M::Value: Clone,
    S: Container<Key = M::Key, Value = M::Value> + ?Sized,
{
    each(sources, |source, _, _| {
        each(*source, |value, key, _| target.assign(key, value.clone()));
    });
    target
}

/// Like [`extend`], but only fills keys the target does not have yet.
///
/// The check happens at assignment time, so for a key present in several
/// sources the first source wins, and existing target entries are never
/// overwritten.
pub fn defaults<'t, M, S>(target: &'t mut M, sources: &[&S]) -> &'t mut M
where
    M: MappingMut + ?Sized,
    M::Value: Clone,
    S: Container<Key = M::Key, Value = M::Value> + ?Sized,
{
    each(sources, |source, _, _| {
        each(*source, |value, key, _| {
            if !target.has(&key) {
                target.assign(key, value.clone());
            }
        });
    });
    target
}
