//! Flattening of arbitrarily nested sequences

use crate::reduction::reduce;
use underbar_core::Nested;

/// Every leaf of `nested`, left to right, regardless of depth
pub fn flatten<T: Clone>(nested: &Nested<T>) -> Vec<T> {
    match nested {
        Nested::Leaf(value) => vec![value.clone()],
        Nested::Seq(items) => reduce(
            items.as_slice(),
            |mut result, item| {
                result.extend(flatten(item));
                result
            },
            Vec::new(),
        ),
    }
}
