use super::{Scheduler, Task};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Identifies a callback on a [`ManualScheduler`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

#[derive(Default)]
struct State {
    now: Duration,
    next_id: u64,
    // Keyed by (deadline, id) so iteration is FIFO by deadline, then by
    // scheduling order.
    pending: BTreeMap<(Duration, u64), Task>,
}

/// A virtual clock. Nothing runs until [`advance`](Self::advance) is called.
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
/// use underbar_functions::{delay, ManualScheduler};
///
/// let clock = ManualScheduler::new();
/// let fired = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&fired);
/// delay(&clock, move |value| flag.store(value, Ordering::SeqCst), Duration::from_secs(1), true);
///
/// clock.advance(Duration::from_millis(999));
/// assert!(!fired.load(Ordering::SeqCst));
/// clock.advance(Duration::from_millis(1));
/// assert!(fired.load(Ordering::SeqCst));
/// ```
#[derive(Default)]
pub struct ManualScheduler {
    state: Mutex<State>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time, measured from creation
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Number of callbacks still waiting
    pub fn pending(&self) -> usize {
        self.state.lock().pending.len()
    }

    /// Remove a callback that has not fired. Returns whether it was pending.
    pub fn cancel(&self, id: TaskId) -> bool {
        let mut state = self.state.lock();
        let key = state.pending.keys().find(|(_, task)| *task == id.0).copied();
        match key {
            Some(key) => state.pending.remove(&key).is_some(),
            None => false,
        }
    }

    /// Move the clock forward by `by`, running every callback that falls due.
    ///
    /// Callbacks run without the lock held, so they may schedule more work;
    /// anything that becomes due within the window also runs. The clock
    /// never moves backwards and saturates at `Duration::MAX`; a callback
    /// scheduled that far out only runs once the clock has saturated.
    /// Returns the number of callbacks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.state.lock().now.saturating_add(by);
        let mut fired = 0;

        loop {
            let due = {
                let mut state = self.state.lock();
                let next = state.pending.keys().next().map(|&(deadline, _)| deadline);
                let popped = match next {
                    Some(deadline) if deadline <= target => {
                        state.now = state.now.max(deadline);
                        state.pending.pop_first()
                    }
                    _ => None,
                };
                popped
            };
            let Some(((deadline, id), task)) = due else {
                break;
            };
            debug!(task = id, deadline_ms = deadline.as_millis() as u64, "firing delayed callback");
            task();
            fired += 1;
        }

        // A nested advance from inside a callback may already be further on
        let mut state = self.state.lock();
        state.now = state.now.max(target);
        fired
    }
}

impl Scheduler for ManualScheduler {
    type Handle = TaskId;

    fn schedule(&self, callback: Task, delay: Duration) -> TaskId {
        let mut state = self.state.lock();
        let id = state.next_id;
        state.next_id += 1;
        let deadline = state.now.saturating_add(delay);
        state.pending.insert((deadline, id), callback);
        TaskId(id)
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("ManualScheduler")
            .field("now", &state.now)
            .field("pending", &state.pending.len())
            .finish()
    }
}
