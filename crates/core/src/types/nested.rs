//! Arbitrarily nested sequences

use serde::{Deserialize, Serialize};

/// A leaf value or a sequence of further nested values.
///
/// Deserializes from plain JSON arrays: `[1, [2, [3]]]` becomes
/// `Seq([Leaf(1), Seq([Leaf(2), Seq([Leaf(3)])])])`. Note that when `T`
/// itself accepts arrays (such as `serde_json::Value`) every array is read
/// as a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    Leaf(T),
    Seq(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn leaf(value: T) -> Self {
        Nested::Leaf(value)
    }

    pub fn seq(items: impl IntoIterator<Item = Nested<T>>) -> Self {
        Nested::Seq(items.into_iter().collect())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Nested::Leaf(_))
    }

    /// Nesting depth: 0 for a leaf, 1 for a flat sequence
    pub fn depth(&self) -> usize {
        match self {
            Nested::Leaf(_) => 0,
            Nested::Seq(items) => 1 + items.iter().map(Nested::depth).max().unwrap_or(0),
        }
    }
}

/// Build a [`Nested`] value from bracketed literals.
///
/// Every item must be a single token tree: a literal, an identifier, a
/// parenthesised expression or a bracketed sub-sequence.
///
/// ```
/// use underbar_core::{nested, Nested};
///
/// let value = nested!([1, [2, 3]]);
/// assert_eq!(
///     value,
///     Nested::Seq(vec![
///         Nested::Leaf(1),
///         Nested::Seq(vec![Nested::Leaf(2), Nested::Leaf(3)]),
///     ])
/// );
/// ```
#[macro_export]
macro_rules! nested {
    ([ $($item:tt),* $(,)? ]) => {
        $crate::Nested::Seq(vec![$($crate::nested!($item)),*])
    };
    ($leaf:expr) => {
        $crate::Nested::Leaf($leaf)
    };
}
