use super::{Scheduler, Task};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;
use underbar_core::{Error, Result};

/// Schedules callbacks as tokio tasks that sleep, then run
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Use the runtime the caller is running inside
    pub fn try_current() -> Result<Self> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|e| Error::runtime(format!("no tokio runtime available: {e}")))
    }
}

impl Scheduler for TokioScheduler {
    type Handle = DelayHandle;

    fn schedule(&self, callback: Task, delay: Duration) -> DelayHandle {
        let join = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            debug!(delay_ms = delay.as_millis() as u64, "firing delayed callback");
            callback();
        });
        DelayHandle { join }
    }
}

/// Handle to a callback scheduled on [`TokioScheduler`]
#[derive(Debug)]
pub struct DelayHandle {
    join: JoinHandle<()>,
}

impl DelayHandle {
    /// Cancel the callback if it has not run yet
    pub fn cancel(&self) {
        self.join.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Wait for the task to end.
    ///
    /// Returns `true` when the callback ran to completion, `false` when it
    /// was cancelled or panicked.
    pub async fn finished(self) -> bool {
        self.join.await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::time::Instant;

    fn counter() -> (Arc<AtomicUsize>, Task) {
        let count = Arc::new(AtomicUsize::new(0));
        let task_count = Arc::clone(&count);
        let task: Task = Box::new(move || {
            task_count.fetch_add(1, Ordering::SeqCst);
        });
        (count, task)
    }

    #[test]
    fn test_no_runtime_is_an_error() {
        let error = TokioScheduler::try_current().unwrap_err();
        assert!(matches!(error, Error::Runtime { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_after_delay() {
        let scheduler = TokioScheduler::try_current().unwrap();
        let (count, task) = counter();
        let started = Instant::now();

        let handle = scheduler.schedule(task, Duration::from_millis(100));
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        assert!(handle.finished().await);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(started.elapsed() >= Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_firing() {
        let scheduler = TokioScheduler::try_current().unwrap();
        let (count, task) = counter();

        let handle = scheduler.schedule(task, Duration::from_secs(1));
        handle.cancel();
        assert!(!handle.finished().await);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
