use std::time::{Duration, Instant};

/// Leading-edge throttle with a trailing catch-up run.
///
/// The first call in a window runs immediately. Calls inside the window are
/// collapsed into a single trailing run that becomes available once the
/// window has elapsed, so the last event of a burst is never lost.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last_run: Option<Instant>,
    trailing: bool,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: None,
            trailing: false,
        }
    }

    /// Returns `true` when the caller should run now. Otherwise a trailing
    /// run is recorded.
    pub fn should_run(&mut self, now: Instant) -> bool {
        if self.window_elapsed(now) {
            self.last_run = Some(now);
            self.trailing = false;
            return true;
        }
        self.trailing = true;
        false
    }

    /// Returns `true` once when a trailing run is pending and its window has passed.
    pub fn take_trailing(&mut self, now: Instant) -> bool {
        if self.trailing && self.window_elapsed(now) {
            self.trailing = false;
            self.last_run = Some(now);
            return true;
        }
        false
    }

    pub fn has_trailing(&self) -> bool {
        self.trailing
    }

    /// Instant at which a pending trailing run becomes available.
    pub fn trailing_due(&self) -> Option<Instant> {
        if !self.trailing {
            return None;
        }
        self.last_run.map(|last| last + self.interval)
    }

    pub fn reset(&mut self) {
        self.last_run = None;
        self.trailing = false;
    }

    fn window_elapsed(&self, now: Instant) -> bool {
        self.last_run
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_burst_into_one_trailing_run() {
        let start = Instant::now();
        let mut throttle = Throttle::new(Duration::from_millis(16));
        assert!(throttle.should_run(start));
        assert!(!throttle.should_run(start + Duration::from_millis(4)));
        assert!(!throttle.should_run(start + Duration::from_millis(8)));
        assert_eq!(throttle.trailing_due(), Some(start + Duration::from_millis(16)));

        assert!(!throttle.take_trailing(start + Duration::from_millis(10)));
        assert!(throttle.take_trailing(start + Duration::from_millis(16)));
        assert!(!throttle.take_trailing(start + Duration::from_millis(40)));
    }

    #[test]
    fn zero_interval_never_throttles() {
        let start = Instant::now();
        let mut throttle = Throttle::new(Duration::ZERO);
        assert!(throttle.should_run(start));
        assert!(throttle.should_run(start));
        assert!(!throttle.has_trailing());
    }
}
