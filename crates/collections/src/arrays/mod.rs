//! Combinators over one or more sequences
//!
//! - **`sort`**: in-place stable sort by a numeric criterion
//! - **`zip`**: index-wise grouping padded to the longest input
//! - **`flatten`**: depth-unbounded flattening of [`Nested`](underbar_core::Nested) values
//! - **`sets`**: intersection and difference with first-occurrence order
//! - **`shuffle`**: Fisher–Yates permutation into a new vector

pub mod flatten;
pub mod sets;
pub mod shuffle;
pub mod sort;
pub mod zip;

pub use flatten::flatten;
pub use sets::{difference, intersection};
pub use shuffle::{shuffle, shuffle_with};
pub use sort::{sort_by, Property, SortCriterion};
pub use zip::zip;
