//! Core traits, types and errors for the `underbar` collection library.
//!
//! ## Key Components
//!
//! - **`types`**: the [`Container`] abstraction over sequences and mappings,
//!   plus the value-level traits combinators rely on ([`Truthy`],
//!   [`Record`], [`AsNumber`], [`Capabilities`]) and the [`Nested`] tree.
//! - **`errors`**: the `Error` enum and `Result` alias for the few
//!   operations that can fail.
//! - **`constants`**: environment variable names and defaults.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result},
    types::*,
};
