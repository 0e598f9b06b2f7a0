use chrono::NaiveDate;
use std::time::Instant;

/// Source of the current calendar day and monotonic time
pub trait Clock {
    fn today(&self) -> NaiveDate;
    fn now(&self) -> Instant;
}

/// Local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}

#[cfg(test)]
pub use manual::ManualClock;
