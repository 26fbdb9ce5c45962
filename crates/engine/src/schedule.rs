//! Cancellable deferred tasks.
//!
//! A [`DeferredSlot`] holds at most one pending task. Scheduling into an
//! occupied slot replaces the old task, so a superseded payload can never
//! commit. The host polls [`DeferredSlot::take_due`] from its tick.

use std::time::{Duration, Instant};

use tracing::debug;

#[derive(Debug)]
struct Pending<T> {
    due: Instant,
    generation: u64,
    payload: T,
}

#[derive(Debug)]
pub struct DeferredSlot<T> {
    label: &'static str,
    generation: u64,
    pending: Option<Pending<T>>,
}

impl<T> DeferredSlot<T> {
    pub const fn new(label: &'static str) -> Self {
        Self {
            label,
            generation: 0,
            pending: None,
        }
    }

    /// Schedules `payload` to become due `delay` after `now`, cancelling any
    /// outstanding task. Returns the generation of the new task.
    pub fn schedule(&mut self, now: Instant, delay: Duration, payload: T) -> u64 {
        self.generation += 1;
        if let Some(previous) = self.pending.take() {
            debug!(
                slot = self.label,
                superseded = previous.generation,
                generation = self.generation,
                "pending task superseded"
            );
        }
        self.pending = Some(Pending {
            due: now + delay,
            generation: self.generation,
            payload,
        });
        self.generation
    }

    /// Drops the pending task, returning its payload.
    pub fn cancel(&mut self) -> Option<T> {
        let pending = self.pending.take()?;
        debug!(slot = self.label, generation = pending.generation, "pending task cancelled");
        Some(pending.payload)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref().map(|pending| &pending.payload)
    }

    pub fn due_at(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.due)
    }

    /// Takes the payload if its deadline has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<T> {
        if self.pending.as_ref().is_some_and(|pending| pending.due <= now) {
            return self.pending.take().map(|pending| pending.payload);
        }
        None
    }
}
