//! Trailing-edge debounce for search boxes and other chatty inputs.
//!
//! Each call cancels the pending invocation and re-arms the timer with the
//! latest arguments, so the wrapped function runs once per quiet period.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::cell::Cell;
use std::rc::Rc;

use super::timer::{Scheduler, TimerHandle};

/// A debounced wrapper around `Fn(A)`.
pub struct Debouncer<A, S: Scheduler> {
    scheduler: S,
    wait_ms: u32,
    func: Rc<dyn Fn(A)>,
    pending: Rc<Cell<Option<TimerHandle>>>,
}

impl<A: 'static, S: Scheduler> Debouncer<A, S> {
    pub fn new(scheduler: S, wait_ms: u32, func: impl Fn(A) + 'static) -> Self {
        Self {
            scheduler,
            wait_ms,
            func: Rc::new(func),
            pending: Rc::new(Cell::new(None)),
        }
    }

    /// Queue an invocation with `args`, replacing any pending one.
    pub fn call(&self, args: A) {
        self.cancel();
        let func = Rc::clone(&self.func);
        let pending = Rc::clone(&self.pending);
        let handle = self.scheduler.schedule(
            self.wait_ms,
            Box::new(move || {
                pending.set(None);
                func(args);
            }),
        );
        self.pending.set(Some(handle));
    }

    /// Drop the pending invocation, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }
}

#[cfg(feature = "hydrate")]
impl<A: 'static> Debouncer<A, super::timer::BrowserScheduler> {
    /// Debouncer backed by `setTimeout`.
    pub fn browser(wait_ms: u32, func: impl Fn(A) + 'static) -> Self {
        Self::new(super::timer::BrowserScheduler::new(), wait_ms, func)
    }
}

/// Wrap `func` so it only runs after `wait_ms` without further calls.
pub fn debounce<A, S>(scheduler: S, wait_ms: u32, func: impl Fn(A) + 'static) -> impl Fn(A)
where
    A: 'static,
    S: Scheduler,
{
    let debouncer = Debouncer::new(scheduler, wait_ms, func);
    move |args| debouncer.call(args)
}
