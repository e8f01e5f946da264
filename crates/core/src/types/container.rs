//! Uniform traversal over the two container shapes
//!
//! A container is either a *sequence* (integer keys, visited in ascending
//! index order) or a *mapping* (unique keys, visited in whatever order the
//! map iterates). Both expose the same [`Container::each`] capability so that
//! every combinator can be written once against the trait.

use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};

/// The canonical ordered sequence shape
pub type OrderedSequence<T> = Vec<T>;

/// The canonical keyed mapping shape (iterates in insertion order)
pub type KeyedMapping<K, V> = IndexMap<K, V>;

/// A collection that can be walked with a single calling convention.
///
/// The visitor receives `(value, key, container)` exactly once per element.
/// Implementations must not skip or repeat entries and must accept an empty
/// container (zero visits).
pub trait Container {
    /// Index for sequences, key for mappings
    type Key: Clone;
    /// Element or entry value
    type Value;

    /// Call `visitor(value, key, self)` once for every element
    fn each<F>(&self, visitor: F)
    where
        F: FnMut(&Self::Value, Self::Key, &Self);

    /// Number of elements
    fn len(&self) -> usize;

    /// Whether the container has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A mapping that can be written to, used as the target of object merges
pub trait MappingMut {
    type Key;
    type Value;

    /// Whether `key` is currently present
    fn has(&self, key: &Self::Key) -> bool;

    /// Insert or overwrite `key`
    fn assign(&mut self, key: Self::Key, value: Self::Value);
}

// Sequences

impl<T> Container for [T] {
    type Key = usize;
    type Value = T;

    fn each<F>(&self, mut visitor: F)
    where
        F: FnMut(&T, usize, &Self),
    {
        for index in 0..<[T]>::len(self) {
            visitor(&self[index], index, self);
        }
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T, const N: usize> Container for [T; N] {
    type Key = usize;
    type Value = T;

    fn each<F>(&self, mut visitor: F)
    where
        F: FnMut(&T, usize, &Self),
    {
        for (index, element) in self.iter().enumerate() {
            visitor(element, index, self);
        }
    }

    fn len(&self) -> usize {
        N
    }
}

impl<T> Container for Vec<T> {
    type Key = usize;
    type Value = T;

    fn each<F>(&self, mut visitor: F)
    where
        F: FnMut(&T, usize, &Self),
    {
        for (index, element) in self.iter().enumerate() {
            visitor(element, index, self);
        }
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> Container for VecDeque<T> {
    type Key = usize;
    type Value = T;

    fn each<F>(&self, mut visitor: F)
    where
        F: FnMut(&T, usize, &Self),
    {
        for (index, element) in self.iter().enumerate() {
            visitor(element, index, self);
        }
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

// Mappings

impl<K, V, S> Container for HashMap<K, V, S>
where
    K: Clone,
{
    type Key = K;
    type Value = V;

    fn each<F>(&self, mut visitor: F)
    where
        F: FnMut(&V, K, &Self),
    {
        for (key, value) in self.iter() {
            visitor(value, key.clone(), self);
        }
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl<K, V> Container for BTreeMap<K, V>
where
    K: Clone,
{
    type Key = K;
    type Value = V;

    fn each<F>(&self, mut visitor: F)
    where
        F: FnMut(&V, K, &Self),
    {
        for (key, value) in self.iter() {
            visitor(value, key.clone(), self);
        }
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

impl<K, V, S> Container for IndexMap<K, V, S>
where
    K: Clone,
{
    type Key = K;
    type Value = V;

    fn each<F>(&self, mut visitor: F)
    where
        F: FnMut(&V, K, &Self),
    {
        for (key, value) in self.iter() {
            visitor(value, key.clone(), self);
        }
    }

    fn len(&self) -> usize {
        IndexMap::len(self)
    }
}

impl Container for serde_json::Map<String, serde_json::Value> {
    type Key = String;
    type Value = serde_json::Value;

    fn each<F>(&self, mut visitor: F)
    where
        F: FnMut(&serde_json::Value, String, &Self),
    {
        for (key, value) in self.iter() {
            visitor(value, key.clone(), self);
        }
    }

    fn len(&self) -> usize {
        serde_json::Map::len(self)
    }
}

impl<K, V, S> MappingMut for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn has(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K, V> MappingMut for BTreeMap<K, V>
where
    K: Ord,
{
    type Key = K;
    type Value = V;

    fn has(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K, V, S> MappingMut for IndexMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    fn has(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    // Overwriting keeps the key's original position
    fn assign(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl MappingMut for serde_json::Map<String, serde_json::Value> {
    type Key = String;
    type Value = serde_json::Value;

    fn has(&self, key: &String) -> bool {
        self.contains_key(key)
    }

    fn assign(&mut self, key: String, value: serde_json::Value) {
        self.insert(key, value);
    }
}
