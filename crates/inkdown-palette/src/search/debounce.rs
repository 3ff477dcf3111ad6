//! Last-write-wins debounce timer.
//!
//! Each call bumps a generation counter and sleeps for the configured delay;
//! a call that is no longer the newest generation when it wakes was
//! superseded by a later keystroke. At most one debounced search is ever
//! conceptually in flight, and a superseded one has no side effects.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

pub struct Debouncer {
    delay: Duration,
    generation: AtomicU64,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: AtomicU64::new(0),
        }
    }

    /// Wait out the debounce delay. Returns `false` when a newer call
    /// arrived during the wait (this call was superseded). A zero delay
    /// returns `true` immediately.
    pub async fn wait(&self) -> bool {
        if self.delay.is_zero() {
            return true;
        }
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;
        generation == self.generation.load(Ordering::SeqCst)
    }
}
