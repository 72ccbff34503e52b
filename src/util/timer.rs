//! One-shot timer port.
//!
//! Page helpers never call `setTimeout` directly; they go through a
//! [`Scheduler`] so the same debounce/dismiss logic runs against the browser
//! event loop under `hydrate` and against a virtual clock in tests.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Deferred work handed to a [`Scheduler`].
pub type TimerCallback = Box<dyn FnOnce()>;

/// Opaque identifier for a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// Schedules and cancels one-shot callbacks.
pub trait Scheduler {
    /// Run `callback` once after `delay_ms` milliseconds.
    fn schedule(&self, delay_ms: u32, callback: TimerCallback) -> TimerHandle;

    /// Cancel a pending timer. Cancelling a fired or unknown handle is a no-op.
    fn cancel(&self, handle: TimerHandle);
}

/// Virtual-clock scheduler driven explicitly through [`ManualScheduler::advance`].
///
/// Clones share the same clock, so a test can hand one clone to the code under
/// test and keep another to move time forward.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<ManualClock>>,
}

#[derive(Default)]
struct ManualClock {
    now_ms: u64,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

struct PendingTimer {
    id: u64,
    due_ms: u64,
    callback: TimerCallback,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds elapsed on the virtual clock.
    pub fn now_ms(&self) -> u64 {
        self.inner.borrow().now_ms
    }

    /// Number of timers that have not fired or been cancelled.
    pub fn pending_count(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Move the clock forward by `ms`, firing due timers in deadline order.
    ///
    /// Callbacks may schedule new timers; those fire within the same call if
    /// they fall due before the target time.
    pub fn advance(&self, ms: u64) {
        let target = self.inner.borrow().now_ms.saturating_add(ms);
        loop {
            let next = {
                let mut clock = self.inner.borrow_mut();
                let due = clock
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.due_ms <= target)
                    .min_by_key(|(_, timer)| (timer.due_ms, timer.id))
                    .map(|(idx, _)| idx);
                if let Some(idx) = due {
                    let timer = clock.pending.remove(idx);
                    clock.now_ms = timer.due_ms;
                    Some(timer.callback)
                } else {
                    clock.now_ms = target;
                    None
                }
            };
            match next {
                Some(callback) => callback(),
                None => break,
            }
        }
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, callback: TimerCallback) -> TimerHandle {
        let mut clock = self.inner.borrow_mut();
        clock.next_id += 1;
        let id = clock.next_id;
        let due_ms = clock.now_ms + u64::from(delay_ms);
        clock.pending.push(PendingTimer { id, due_ms, callback });
        TimerHandle(id)
    }

    fn cancel(&self, handle: TimerHandle) {
        self.inner
            .borrow_mut()
            .pending
            .retain(|timer| timer.id != handle.0);
    }
}

/// `setTimeout`-backed scheduler for the browser.
#[cfg(feature = "hydrate")]
#[derive(Clone, Default)]
pub struct BrowserScheduler {
    inner: Rc<RefCell<BrowserTimers>>,
}

#[cfg(feature = "hydrate")]
#[derive(Default)]
struct BrowserTimers {
    next_id: u64,
    pending: std::collections::HashMap<u64, gloo_timers::callback::Timeout>,
}

#[cfg(feature = "hydrate")]
impl BrowserScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(feature = "hydrate")]
impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay_ms: u32, callback: TimerCallback) -> TimerHandle {
        let id = {
            let mut timers = self.inner.borrow_mut();
            timers.next_id += 1;
            timers.next_id
        };
        let timers = Rc::clone(&self.inner);
        let timeout = gloo_timers::callback::Timeout::new(delay_ms, move || {
            // Keep the fired `Timeout` alive until the callback returns.
            let fired = timers.borrow_mut().pending.remove(&id);
            callback();
            drop(fired);
        });
        self.inner.borrow_mut().pending.insert(id, timeout);
        TimerHandle(id)
    }

    fn cancel(&self, handle: TimerHandle) {
        let removed = self.inner.borrow_mut().pending.remove(&handle.0);
        if let Some(timeout) = removed {
            timeout.cancel();
        }
    }
}
