//! Production environment using the system clock.
//!
//! `SystemEnv` is the production implementation of the Environment trait:
//! real `std::time::Instant` time that advances naturally and tokio sleeps for
//! actual wall-clock delays.

use std::time::Duration;

use pearl_core::Environment;

/// Production environment using system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create a new system environment.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnv {
    type Instant = std::time::Instant;

    fn now(&self) -> Self::Instant {
        std::time::Instant::now()
    }

    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_monotonic() {
        let env = SystemEnv::new();
        let a = env.now();
        let b = env.now();
        assert!(b >= a);
    }

    #[tokio::test]
    async fn sleep_waits_at_least_duration() {
        let env = SystemEnv::new();
        let start = env.now();
        env.sleep(Duration::from_millis(10)).await;
        assert!(env.now() - start >= Duration::from_millis(10));
    }
}
