use std::time::{Duration, Instant};

/// How long the confetti stays up after all three tasks are done
pub const CELEBRATION_DURATION: Duration = Duration::from_millis(3000);

/// Pending celebration, expressed as a deadline
#[derive(Debug, Clone, Default)]
pub struct Celebration {
    deadline: Option<Instant>,
}

impl Celebration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a celebration unless one is still running.
    ///
    /// A pending deadline is never pushed back.
    pub fn trigger(&mut self, now: Instant) -> bool {
        if self.is_active(now) {
            return false;
        }
        self.deadline = Some(now + CELEBRATION_DURATION);
        true
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now < deadline)
    }

    /// Drop an expired deadline, returning true if it just ended
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[cfg(test)]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_sets_deadline() {
        let start = Instant::now();
        let mut celebration = Celebration::new();

        assert!(!celebration.is_active(start));
        assert!(celebration.trigger(start));
        assert!(celebration.is_active(start));
        assert_eq!(celebration.deadline(), Some(start + CELEBRATION_DURATION));
    }

    #[test]
    fn test_retrigger_does_not_extend() {
        let start = Instant::now();
        let mut celebration = Celebration::new();
        celebration.trigger(start);

        let later = start + Duration::from_millis(1500);
        assert!(!celebration.trigger(later));
        assert_eq!(celebration.deadline(), Some(start + CELEBRATION_DURATION));
    }

    #[test]
    fn test_expires_after_exactly_three_seconds() {
        let start = Instant::now();
        let mut celebration = Celebration::new();
        celebration.trigger(start);

        assert!(celebration.is_active(start + Duration::from_millis(2999)));
        assert!(!celebration.is_active(start + Duration::from_millis(3000)));

        assert!(!celebration.tick(start + Duration::from_millis(2999)));
        assert!(celebration.tick(start + Duration::from_millis(3000)));
        assert!(celebration.deadline().is_none());
    }

    #[test]
    fn test_can_trigger_again_after_expiry() {
        let start = Instant::now();
        let mut celebration = Celebration::new();
        celebration.trigger(start);

        let after = start + CELEBRATION_DURATION;
        assert!(celebration.trigger(after));
        assert_eq!(celebration.deadline(), Some(after + CELEBRATION_DURATION));
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut celebration = Celebration::new();
        celebration.trigger(start);
        celebration.cancel();
        assert!(!celebration.is_active(start));
    }
}
