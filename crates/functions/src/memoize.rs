//! Result caching per argument

use crate::wrapped::Wrapped;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use tracing::trace;

/// Wrapper returned by [`memoize`].
///
/// The cache grows without bound; drop the wrapper to release it.
pub struct Memoize<F, A, R> {
    func: F,
    cache: HashMap<A, R>,
}

/// Wrap `func` so that each distinct argument is computed once.
///
/// Arguments are compared by value through `Hash` and `Eq`. Tuples work as
/// multi-argument keys.
pub fn memoize<F, A, R>(func: F) -> Memoize<F, A, R>
where
    F: FnMut(A) -> R,
    A: Hash + Eq + Clone,
    R: Clone,
{
    Memoize {
        func,
        cache: HashMap::new(),
    }
}

impl<F, A, R> Memoize<F, A, R> {
    /// Number of cached results
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

impl<F, A, R> Memoize<F, A, R>
where
    A: Hash + Eq,
{
    pub fn is_cached(&self, args: &A) -> bool {
        self.cache.contains_key(args)
    }
}

impl<F, A, R> Wrapped<A> for Memoize<F, A, R>
where
    F: FnMut(A) -> R,
    A: Hash + Eq + Clone,
    R: Clone,
{
    type Output = R;

    fn call(&mut self, args: A) -> R {
        match self.cache.entry(args) {
            Entry::Occupied(hit) => {
                trace!("memoize: cache hit");
                hit.get().clone()
            }
            Entry::Vacant(miss) => {
                let result = (self.func)(miss.key().clone());
                trace!("memoize: cache miss");
                miss.insert(result).clone()
            }
        }
    }
}

impl<F, A, R> fmt::Debug for Memoize<F, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoize")
            .field("cached", &self.cache.len())
            .finish_non_exhaustive()
    }
}
