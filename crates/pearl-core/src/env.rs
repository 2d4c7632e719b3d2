//! Environment abstraction for deterministic testing.
//!
//! Decouples the state machines from the system clock. Production drivers use
//! `std::time::Instant`; the simulation harness uses a virtual instant that
//! only moves when a test advances it.

use std::{
    fmt::Debug,
    ops::{Add, Sub},
    time::Duration,
};

/// Time instant accepted by the state machines.
///
/// Deadlines are computed by adding a [`Duration`] to an instant, so the type
/// must support both directions of arithmetic. Blanket-implemented for every
/// type that qualifies, including `std::time::Instant`.
pub trait Instant:
    Copy + Ord + Debug + Send + Sync + Add<Duration, Output = Self> + Sub<Output = Duration>
{
}

impl<T> Instant for T where
    T: Copy + Ord + Debug + Send + Sync + Add<Duration, Output = T> + Sub<Output = Duration>
{
}

/// Abstract environment providing time and async sleeping.
///
/// Implementations MUST guarantee that `now()` never goes backwards within a
/// single execution context.
pub trait Environment: Clone + Send + Sync + 'static {
    /// The instant type used by this environment.
    type Instant: Instant;

    /// Current time (monotonic).
    fn now(&self) -> Self::Instant;

    /// Sleeps for the specified duration.
    ///
    /// Only driver code sleeps; state machines never do.
    fn sleep(&self, duration: Duration) -> impl std::future::Future<Output = ()> + Send;
}
