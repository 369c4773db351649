use std::time::Duration;

use tokio::time::Instant;

/// Accepts at most one event per window. The window opens at the accepted
/// event; anything arriving before it closes is dropped, not deferred.
#[derive(Debug)]
pub struct Throttle {
    window: Duration,
    last_accepted: Option<Instant>,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: None,
        }
    }

    pub fn try_acquire(&mut self, now: Instant) -> bool {
        let open = self
            .last_accepted
            .is_none_or(|last| now.saturating_duration_since(last) >= self.window);
        if open {
            self.last_accepted = Some(now);
        }
        open
    }

    /// When the current window closes, if one is active at `now`.
    pub fn reopens_at(&self, now: Instant) -> Option<Instant> {
        self.last_accepted
            .map(|last| last + self.window)
            .filter(|deadline| *deadline > now)
    }
}
