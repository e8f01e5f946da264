//! Named capabilities and the method selector used by `invoke`

use std::borrow::Cow;
use std::fmt;

/// A capability bound to its receiver type: `(receiver, args) -> output`
pub type Capability<T, A, R> = fn(&T, &A) -> R;

/// Operations an element exposes by name.
///
/// ```
/// use underbar_core::{Capabilities, Capability};
///
/// struct Word(String);
///
/// impl Capabilities<usize> for Word {
///     type Output = String;
///
///     fn capability(&self, name: &str) -> Option<Capability<Self, usize, String>> {
///         match name {
///             "repeat" => Some(|word, times| word.0.repeat(*times)),
///             _ => None,
///         }
///     }
/// }
///
/// let word = Word("ab".to_string());
/// let repeat = word.capability("repeat").unwrap();
/// assert_eq!(repeat(&word, &2), "abab");
/// ```
pub trait Capabilities<A>: Sized {
    type Output;

    /// Look up the capability called `name`
    fn capability(&self, name: &str) -> Option<Capability<Self, A, Self::Output>>;
}

/// What to call on every element: a function, or a capability name
/// resolved separately on each element.
pub enum Method<'a, T, A, R> {
    Callable(Box<dyn Fn(&T, &A) -> R + 'a>),
    Named(Cow<'a, str>),
}

impl<'a, T, A, R> Method<'a, T, A, R> {
    /// Wrap a function called with each element as its receiver
    pub fn callable(func: impl Fn(&T, &A) -> R + 'a) -> Self {
        Method::Callable(Box::new(func))
    }

    /// Select the capability called `name` on each element
    pub fn named(name: impl Into<Cow<'a, str>>) -> Self {
        Method::Named(name.into())
    }

    /// Apply to one receiver.
    ///
    /// Returns `None` when a named capability does not exist on `receiver`.
    pub fn apply(&self, receiver: &T, args: &A) -> Option<R>
    where
        T: Capabilities<A, Output = R>,
    {
        match self {
            Method::Callable(func) => Some(func(receiver, args)),
            Method::Named(name) => receiver
                .capability(name)
                .map(|capability| capability(receiver, args)),
        }
    }

    /// The capability name, for named methods
    pub fn name(&self) -> Option<&str> {
        match self {
            Method::Callable(_) => None,
            Method::Named(name) => Some(&**name),
        }
    }
}

impl<'a, T, A, R> From<&'a str> for Method<'a, T, A, R> {
    fn from(name: &'a str) -> Self {
        Method::named(name)
    }
}

impl<T, A, R> From<String> for Method<'_, T, A, R> {
    fn from(name: String) -> Self {
        Method::named(name)
    }
}

impl<T, A, R> fmt::Debug for Method<'_, T, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Callable(_) => f.write_str("Method::Callable(..)"),
            Method::Named(name) => write!(f, "Method::Named({name:?})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Counter(i32);

    impl Capabilities<i32> for Counter {
        type Output = i32;

        fn capability(&self, name: &str) -> Option<Capability<Self, i32, i32>> {
            match name {
                "add" => Some(|counter, by| counter.0 + by),
                "times" => Some(|counter, by| counter.0 * by),
                _ => None,
            }
        }
    }

    #[test]
    fn test_named_method_resolves_on_receiver() {
        let method: Method<'_, Counter, i32, i32> = Method::named("times");
        assert_eq!(method.apply(&Counter(4), &3), Some(12));
        assert_eq!(method.name(), Some("times"));
    }

    #[test]
    fn test_unknown_name_is_none() {
        let method: Method<'_, Counter, i32, i32> = "divide".into();
        assert_eq!(method.apply(&Counter(4), &3), None);
    }

    #[test]
    fn test_callable_ignores_capabilities() {
        let method = Method::callable(|counter: &Counter, by: &i32| counter.0 - by);
        assert_eq!(method.apply(&Counter(10), &4), Some(6));
        assert_eq!(format!("{method:?}"), "Method::Callable(..)");
    }
}
