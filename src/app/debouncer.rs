use std::time::{Duration, Instant};

/// Delays suggestion refreshes until typing pauses
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    /// Timestamp of the last input that triggered a debounce
    last_input_time: Option<Instant>,
    /// Whether there's a pending refresh waiting for debounce to expire
    pending_execution: bool,
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            last_input_time: None,
            pending_execution: false,
        }
    }

    pub fn schedule_execution(&mut self) {
        self.schedule_execution_at(Instant::now());
    }

    pub fn schedule_execution_at(&mut self, now: Instant) {
        self.last_input_time = Some(now);
        self.pending_execution = true;
    }

    pub fn should_execute(&self) -> bool {
        self.should_execute_at(Instant::now())
    }

    pub fn should_execute_at(&self, now: Instant) -> bool {
        if !self.pending_execution {
            return false;
        }

        match self.last_input_time {
            Some(last_time) => now.saturating_duration_since(last_time) >= self.delay,
            None => false,
        }
    }

    pub fn mark_executed(&mut self) {
        self.pending_execution = false;
        self.last_input_time = None;
    }

    pub fn has_pending(&self) -> bool {
        self.pending_execution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_DEBOUNCE_MS: u64 = 150;

    fn at(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    #[test]
    fn test_new_debouncer_has_no_pending() {
        let debouncer = Debouncer::new(TEST_DEBOUNCE_MS);
        assert!(!debouncer.has_pending());
        assert!(!debouncer.should_execute_at(Instant::now()));
    }

    #[test]
    fn test_should_execute_false_immediately_after_schedule() {
        let base = Instant::now();
        let mut debouncer = Debouncer::new(TEST_DEBOUNCE_MS);
        debouncer.schedule_execution_at(base);
        assert!(debouncer.has_pending());
        assert!(!debouncer.should_execute_at(base));
    }

    #[test]
    fn test_should_execute_true_after_debounce_period() {
        let base = Instant::now();
        let mut debouncer = Debouncer::new(TEST_DEBOUNCE_MS);
        debouncer.schedule_execution_at(base);
        assert!(debouncer.should_execute_at(at(base, TEST_DEBOUNCE_MS)));
    }

    #[test]
    fn test_schedule_resets_timer() {
        let base = Instant::now();
        let mut debouncer = Debouncer::new(TEST_DEBOUNCE_MS);

        debouncer.schedule_execution_at(base);
        debouncer.schedule_execution_at(at(base, TEST_DEBOUNCE_MS / 2));

        assert!(!debouncer.should_execute_at(at(base, TEST_DEBOUNCE_MS)));
        assert!(debouncer.should_execute_at(at(base, TEST_DEBOUNCE_MS + TEST_DEBOUNCE_MS / 2)));
    }

    #[test]
    fn test_mark_executed_clears_state() {
        let base = Instant::now();
        let mut debouncer = Debouncer::new(TEST_DEBOUNCE_MS);
        debouncer.schedule_execution_at(base);
        debouncer.mark_executed();
        assert!(!debouncer.has_pending());
        assert!(!debouncer.should_execute_at(at(base, TEST_DEBOUNCE_MS * 2)));
    }

    #[test]
    fn test_zero_delay_executes_immediately() {
        let base = Instant::now();
        let mut debouncer = Debouncer::new(0);
        debouncer.schedule_execution_at(base);
        assert!(debouncer.should_execute_at(base));
    }
}
