//! Function decorators for underbar
//!
//! Each decorator returns a value that owns its state outright and is called
//! through the [`Wrapped`] trait:
//!
//! - [`once`]: run the function on the first call only, then replay its result
//! - [`memoize`]: cache results per argument, without eviction
//! - [`delay`]: hand a call to a [`Scheduler`] to run later

pub mod delay;
pub mod memoize;
pub mod once;
pub mod scheduler;
pub mod wrapped;

pub use delay::delay;
pub use memoize::{memoize, Memoize};
pub use once::{once, Once};
pub use scheduler::{DelayHandle, ManualScheduler, Scheduler, Task, TaskId, TokioScheduler};
pub use wrapped::Wrapped;
