use std::time::Duration;

use tokio::time::Instant;

#[derive(Debug)]
struct Pending<T> {
    value: T,
    first_call: Instant,
    last_call: Instant,
}

/// Trailing-edge debounce with a ceiling: a burst of calls collapses into its
/// latest value, released once calls pause for `wait` or once `max_wait` has
/// passed since the burst began, whichever comes first.
///
/// A call that lands within `wait` of the previous one continues the burst
/// even after a release, so the next ceiling counts from that release.
#[derive(Debug)]
pub struct Debouncer<T> {
    wait: Duration,
    max_wait: Duration,
    pending: Option<Pending<T>>,
    last_call: Option<Instant>,
    last_release: Option<Instant>,
}

impl<T> Debouncer<T> {
    pub fn new(wait: Duration, max_wait: Duration) -> Self {
        Self {
            wait,
            max_wait: max_wait.max(wait),
            pending: None,
            last_call: None,
            last_release: None,
        }
    }

    pub fn call(&mut self, value: T, now: Instant) {
        let continues_burst = self
            .last_call
            .is_some_and(|last| now.saturating_duration_since(last) < self.wait);
        self.last_call = Some(now);

        match &mut self.pending {
            Some(pending) => {
                pending.value = value;
                pending.last_call = now;
            }
            None => {
                let first_call = match self.last_release {
                    Some(released) if continues_burst => released,
                    _ => now,
                };
                self.pending = Some(Pending {
                    value,
                    first_call,
                    last_call: now,
                });
            }
        }
    }

    pub fn cancel(&mut self) {
        self.pending = None;
        self.last_call = None;
        self.last_release = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value becomes due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending
            .as_ref()
            .map(|p| (p.last_call + self.wait).min(p.first_call + self.max_wait))
    }

    /// Release the pending value if it is due at `now`.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = self.deadline().is_some_and(|deadline| now >= deadline);
        if due {
            self.last_release = Some(now);
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }
}
