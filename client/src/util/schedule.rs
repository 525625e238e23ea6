//! Cancellable scheduled work: debounced values and teardown guards.
//!
//! DESIGN
//! ======
//! Timers themselves live in the browser (`gloo_timers` sleeps driven by
//! `spawn_local`). What lives here is the bookkeeping that decides whether a
//! timer that fired is still allowed to act:
//!
//! - `Debounce<T>` hands out a ticket per scheduled value. Only the ticket
//!   from the latest `schedule` call can take the value, so earlier timers
//!   fire into nothing (last call wins). After `teardown` no ticket works.
//! - `TaskGuard` is an alive flag shared with spawned tasks and cleared from
//!   `on_cleanup`, so a late timer never touches a disposed view.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Identifies one `Debounce::schedule` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug)]
pub struct Debounce<T> {
    delay_ms: u32,
    generation: u64,
    pending: Option<T>,
    torn_down: bool,
}

impl<T> Debounce<T> {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms, generation: 0, pending: None, torn_down: false }
    }

    #[must_use]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Replace any pending value and return the ticket that may claim it.
    pub fn schedule(&mut self, value: T) -> Ticket {
        self.generation += 1;
        if !self.torn_down {
            self.pending = Some(value);
        }
        Ticket(self.generation)
    }

    /// Claim the pending value if `ticket` is still the latest.
    pub fn take(&mut self, ticket: Ticket) -> Option<T> {
        if self.torn_down || ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Drop the pending value; outstanding tickets become stale.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    /// Cancel and refuse all future work.
    pub fn teardown(&mut self) {
        self.cancel();
        self.torn_down = true;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

/// Alive flag shared between a component and the tasks it spawns.
#[derive(Clone, Debug)]
pub struct TaskGuard {
    alive: Arc<AtomicBool>,
}

impl Default for TaskGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskGuard {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// A guard cancelled when the current reactive owner is cleaned up.
    pub fn scoped() -> Self {
        let guard = Self::new();
        let on_drop = guard.clone();
        leptos::prelude::on_cleanup(move || on_drop.cancel());
        guard
    }
}

/// Run `f` after `delay_ms` unless `guard` was cancelled in the meantime.
///
/// Server builds never run timers; `f` is dropped.
pub fn after(guard: &TaskGuard, delay_ms: u32, f: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        let guard = guard.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(delay_ms))).await;
            if guard.is_alive() {
                f();
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (guard, delay_ms, f);
    }
}
