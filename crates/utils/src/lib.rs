//! Shared utilities for underbar
//!
//! This crate holds the pieces that sit around the pure combinators:
//! settings loading, the random source consumed by `shuffle`, and tracing
//! initialisation for binaries and tests that want log output.

pub mod config;
pub mod random;
pub mod tracing;

pub use config::Settings;
pub use random::{from_settings, seeded, RandomSource};
