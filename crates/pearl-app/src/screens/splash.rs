//! Splash screen timer.

use std::time::Duration;

use pearl_core::Instant;

/// Splash screen state: a single pending deadline.
#[derive(Debug, Clone)]
pub struct SplashState<I> {
    /// When the splash hands over to onboarding. `None` once fired or torn
    /// down.
    deadline: Option<I>,
}

impl<I: Instant> SplashState<I> {
    /// Start the splash timer at `now`.
    pub fn new(now: I, delay: Duration) -> Self {
        Self { deadline: Some(now + delay) }
    }

    /// Whether the timer is still armed.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire the timer if it is due. Returns `true` exactly once.
    pub fn tick(&mut self, now: I) -> bool {
        if let Some(deadline) = self.deadline
            && now >= deadline
        {
            self.deadline = None;
            return true;
        }
        false
    }

    /// Disarm the timer without firing.
    pub fn teardown(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant as StdInstant;

    use super::*;

    #[test]
    fn fires_once_after_delay() {
        let t0 = StdInstant::now();
        let mut splash = SplashState::new(t0, Duration::from_secs(2));

        assert!(!splash.tick(t0 + Duration::from_millis(1999)));
        assert!(splash.tick(t0 + Duration::from_secs(2)));
        assert!(!splash.tick(t0 + Duration::from_secs(5)));
        assert!(!splash.is_pending());
    }

    #[test]
    fn teardown_disarms() {
        let t0 = StdInstant::now();
        let mut splash = SplashState::new(t0, Duration::from_secs(2));
        splash.teardown();
        assert!(!splash.tick(t0 + Duration::from_secs(10)));
    }
}
