//! Virtual clock for deterministic simulation.
//!
//! Time only moves when a test advances it. Sleeping advances the clock by
//! the requested duration and completes immediately, so a simulated run never
//! waits on the wall clock.

use std::{
    ops::{Add, Sub},
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use pearl_core::Environment;

/// Point on the virtual timeline, in milliseconds since the clock started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SimInstant(u64);

impl SimInstant {
    /// Instant at `millis` after the epoch.
    pub fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Milliseconds since the epoch.
    pub fn as_millis(self) -> u64 {
        self.0
    }
}

impl Add<Duration> for SimInstant {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self {
        Self(self.0.saturating_add(rhs.as_millis() as u64))
    }
}

impl Sub for SimInstant {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Duration {
        Duration::from_millis(self.0.saturating_sub(rhs.0))
    }
}

/// Simulated environment sharing one virtual clock across clones.
#[derive(Debug, Clone, Default)]
pub struct SimEnv {
    now_ms: Arc<AtomicU64>,
}

impl SimEnv {
    /// Clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward.
    pub fn advance(&self, duration: Duration) {
        self.now_ms.fetch_add(duration.as_millis() as u64, Ordering::SeqCst);
    }
}

impl Environment for SimEnv {
    type Instant = SimInstant;

    fn now(&self) -> SimInstant {
        SimInstant(self.now_ms.load(Ordering::SeqCst))
    }

    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send {
        self.advance(duration);
        std::future::ready(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_clock() {
        let env = SimEnv::new();
        let other = env.clone();
        env.advance(Duration::from_millis(1500));
        assert_eq!(other.now(), SimInstant::from_millis(1500));
    }

    #[test]
    fn instant_arithmetic() {
        let t = SimInstant::from_millis(1000) + Duration::from_secs(2);
        assert_eq!(t.as_millis(), 3000);
        assert_eq!(t - SimInstant::from_millis(500), Duration::from_millis(2500));
        assert_eq!(SimInstant::from_millis(1) - t, Duration::ZERO);
    }

    #[tokio::test]
    async fn sleep_advances_virtual_time() {
        let env = SimEnv::new();
        env.sleep(Duration::from_secs(3)).await;
        assert_eq!(env.now().as_millis(), 3000);
    }
}
