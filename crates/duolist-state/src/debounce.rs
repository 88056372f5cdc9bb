use std::time::{Duration, Instant};

/// Search input debounce delay.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);

/// Handle for one scheduled release of a [`Debouncer`].
///
/// Only the ticket with the latest generation can release the value; older
/// tickets are dead even if their timer still fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub deadline: Instant,
}

/// Holds back a rapidly changing value until it has been stable for `delay`.
///
/// The debouncer does not own a timer. Each [`push`](Debouncer::push) returns
/// a [`Ticket`]; the caller arranges for [`fire`](Debouncer::fire) to be
/// called with that ticket's generation once the deadline passes.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    generation: u64,
    pending: Option<T>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Generation of the most recent push.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Record a new value, restarting the quiet period.
    pub fn push(&mut self, value: T, now: Instant) -> Ticket {
        self.generation += 1;
        let deadline = now + self.delay;
        self.pending = Some(value);
        Ticket {
            generation: self.generation,
            deadline,
        }
    }

    /// Release the pending value if `generation` is still current.
    pub fn fire(&mut self, generation: u64) -> Option<T> {
        if generation != self.generation {
            return None;
        }
        self.pending.take()
    }
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}
