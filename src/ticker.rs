use std::time::{Duration, Instant};

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Paces the event loop: how long to wait for input before the next tick
#[derive(Debug, Clone)]
pub struct Ticker {
    rate: Duration,
    last: Instant,
}

impl Ticker {
    pub fn new(rate: Duration, now: Instant) -> Self {
        Self { rate, last: now }
    }

    /// Time left before the next tick is due
    pub fn timeout(&self, now: Instant) -> Duration {
        self.rate.saturating_sub(now.saturating_duration_since(self.last))
    }

    /// Consume a due tick
    pub fn is_due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) >= self.rate {
            self.last = now;
            true
        } else {
            false
        }
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_TICK_MS), Instant::now())
    }
}
