//! Deferred execution of callbacks
//!
//! [`delay`](crate::delay) only needs something that can run a boxed callback
//! after a duration. Two implementations are provided: [`TokioScheduler`]
//! for real async runtimes and [`ManualScheduler`], a virtual clock that is
//! advanced by hand.

mod manual;
mod runtime;

pub use manual::{ManualScheduler, TaskId};
pub use runtime::{DelayHandle, TokioScheduler};

use std::time::Duration;

/// A callback handed to a scheduler
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs a callback once, no earlier than `delay` from now
pub trait Scheduler {
    /// Returned to the caller; used for cancellation or completion
    type Handle;

    fn schedule(&self, callback: Task, delay: Duration) -> Self::Handle;
}
