//! Call-at-most-once decorator

use crate::wrapped::Wrapped;
use std::fmt;
use std::marker::PhantomData;
use tracing::trace;

/// Wrapper returned by [`once`].
///
/// Holds the function until its first call and the result afterwards.
pub struct Once<F, A, R> {
    func: Option<F>,
    result: Option<R>,
    _args: PhantomData<fn(A)>,
}

/// Wrap `func` so that only its first call runs.
///
/// Every call, the first included, returns a clone of the first result.
///
/// ```
/// use underbar_functions::{once, Wrapped};
///
/// let mut init = once(|name: &str| format!("hello {name}"));
/// assert_eq!(init.call("moe"), "hello moe");
/// assert_eq!(init.call("curly"), "hello moe");
/// ```
pub fn once<F, A, R>(func: F) -> Once<F, A, R>
where
    F: FnOnce(A) -> R,
{
    Once {
        func: Some(func),
        result: None,
        _args: PhantomData,
    }
}

impl<F, A, R> Once<F, A, R> {
    /// Whether the wrapped function has run
    pub fn is_called(&self) -> bool {
        self.func.is_none()
    }

    /// The cached result, once the function has run
    pub fn result(&self) -> Option<&R> {
        self.result.as_ref()
    }
}

impl<F, A, R> Wrapped<A> for Once<F, A, R>
where
    F: FnOnce(A) -> R,
    R: Clone,
{
    type Output = R;

    /// # Panics
    ///
    /// Panics if the wrapped function panicked during its first call.
    fn call(&mut self, args: A) -> R {
        if let Some(func) = self.func.take() {
            trace!("once: running wrapped function");
            self.result = Some(func(args));
        }
        match &self.result {
            Some(result) => result.clone(),
            None => panic!("once: wrapped function panicked on its first call"),
        }
    }
}

impl<F, A, R: fmt::Debug> fmt::Debug for Once<F, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Once")
            .field("called", &self.is_called())
            .field("result", &self.result)
            .finish()
    }
}
