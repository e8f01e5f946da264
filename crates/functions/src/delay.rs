//! Deferred invocation

use crate::scheduler::Scheduler;
use std::time::Duration;
use tracing::debug;

/// Run `func(args)` once, no earlier than `wait` from now.
///
/// Returns whatever handle the scheduler hands back; cancellation goes
/// through it.
pub fn delay<S, F, A>(scheduler: &S, func: F, wait: Duration, args: A) -> S::Handle
where
    S: Scheduler + ?Sized,
    F: FnOnce(A) + Send + 'static,
    A: Send + 'static,
{
    debug!(wait_ms = wait.as_millis() as u64, "scheduling delayed call");
    scheduler.schedule(Box::new(move || func(args)), wait)
}
