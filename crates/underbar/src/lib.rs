//! # underbar
//!
//! Functional utilities over ordered sequences and keyed mappings, derived
//! from a single traversal primitive ([`each`]).
//!
//! ```
//! use underbar::prelude::*;
//!
//! let total = reduce(&[1, 2, 3], |sum, n| sum + n, 0);
//! assert_eq!(total, 6);
//!
//! let odds = reject(&vec![1, 2, 3, 4], |n| n % 2 == 0);
//! assert_eq!(odds, vec![1, 3]);
//!
//! let mut square = memoize(|n: u32| n * n);
//! assert_eq!(square.call(9), 81);
//! ```
//!
//! The member crates are re-exported for direct use:
//!
//! - [`types`] and [`errors`]: container traits, [`Nested`], the error type
//! - [`collections`]: the combinators
//! - [`functions`]: `once`, `memoize`, `delay` and schedulers
//! - [`utils`]: settings, randomness, tracing setup

pub use underbar_collections as collections;
pub use underbar_functions as functions;
pub use underbar_utils as utils;

pub use underbar_collections::*;
pub use underbar_core::{errors, types};
pub use underbar_core::{
    nested, AsNumber, Capabilities, Capability, Container, Error, MappingMut, Method, Nested,
    Record, Result, Truthy,
};
pub use underbar_functions::{
    delay, memoize, once, DelayHandle, ManualScheduler, Memoize, Once, Scheduler, Task, TaskId,
    TokioScheduler, Wrapped,
};
pub use underbar_utils::Settings;

/// Everything needed for typical use in one import
pub mod prelude {
    pub use crate::{
        contains, defaults, delay, difference, each, every, extend, filter, first, flatten,
        index_of, intersection, invoke, last, map, memoize, nested, once, pluck, reduce, reject,
        shuffle, some, sort_by, uniq, zip, Container, Method, Nested, Property, Scheduler,
        Truthy, Wrapped,
    };
}
