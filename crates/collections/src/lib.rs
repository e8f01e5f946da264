//! Collection combinators built on a single traversal primitive.
//!
//! Every function here is written in terms of [`each`], directly or through
//! another combinator, so sequences and mappings get identical treatment:
//!
//! - **traversal**: [`each`]
//! - **search**: [`index_of`]
//! - **selection**: [`filter`], [`reject`], [`uniq`], [`first`], [`last`]
//! - **transformation**: [`map`], [`pluck`], [`invoke`]
//! - **reduction**: [`reduce`] and the predicates [`contains`], [`every`], [`some`]
//! - **objects**: [`extend`], [`defaults`]
//! - **arrays**: [`sort_by`], [`zip`], [`flatten`], [`intersection`],
//!   [`difference`], [`shuffle`]

pub mod arrays;
pub mod objects;
pub mod predicates;
pub mod reduction;
pub mod search;
pub mod selection;
pub mod transformation;
pub mod traversal;

pub use arrays::{
    difference, flatten, intersection, shuffle, shuffle_with, sort_by, zip, Property,
    SortCriterion,
};
pub use objects::{defaults, extend};
pub use predicates::{contains, every, every_truthy, some, some_truthy};
pub use reduction::{reduce, reduce_default};
pub use search::index_of;
pub use selection::{filter, first, first_n, last, last_n, reject, uniq};
pub use transformation::{invoke, invoke_with, map, pluck};
pub use traversal::each;
