//! One-shot deferred tasks.
//!
//! [`Timers`] is a queue of tasks keyed by a deadline in epoch milliseconds.
//! Nothing runs on its own: the owner reads the current time from a
//! [`Clock`](crate::Clock) and calls [`Timers::take_due`] from its event loop,
//! which keeps every state change on the single UI thread and lets tests step
//! time with a [`FixedClock`](crate::FixedClock).
//!
//! Tasks are plain values (usually an enum), not closures; the owner decides
//! what a due task does to its state.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle returned by [`Timers::schedule`], used to cancel the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle {
    due: u64,
    id: u64,
}

impl TimerHandle {
    /// Deadline in epoch milliseconds.
    pub fn due_millis(&self) -> u64 {
        self.due
    }
}

/// Queue of pending one-shot tasks.
///
/// Tasks with the same deadline fire in the order they were scheduled.
#[derive(Debug)]
pub struct Timers<T> {
    pending: BTreeMap<TimerHandle, T>,
    next_id: u64,
}

impl<T> Default for Timers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Timers<T> {
    pub fn new() -> Self {
        Self {
            pending: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Schedule `task` to become due `delay` after `now_millis`.
    pub fn schedule(&mut self, now_millis: u64, delay: Duration, task: T) -> TimerHandle {
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        let handle = TimerHandle {
            due: now_millis.saturating_add(delay_ms),
            id: self.next_id,
        };
        self.next_id += 1;
        self.pending.insert(handle, task);
        handle
    }

    /// Cancel a pending task. Returns the task if it had not fired yet.
    pub fn cancel(&mut self, handle: TimerHandle) -> Option<T> {
        self.pending.remove(&handle)
    }

    /// Remove and return every task whose deadline is at or before `now_millis`,
    /// earliest first.
    pub fn take_due(&mut self, now_millis: u64) -> Vec<T> {
        let due = match now_millis.checked_add(1) {
            Some(next) => {
                let later = self.pending.split_off(&TimerHandle { due: next, id: 0 });
                std::mem::replace(&mut self.pending, later)
            }
            None => std::mem::take(&mut self.pending),
        };
        due.into_values().collect()
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.keys().next().map(|h| h.due)
    }

    /// Number of pending tasks matching `pred`.
    pub fn count_where(&self, pred: impl Fn(&T) -> bool) -> usize {
        self.pending.values().filter(|t| pred(t)).count()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
