//! Simulated connection state machine.
//!
//! Models the Home screen's connect button. Uses the action pattern: methods
//! take time as input and return actions describing what changed. The two
//! scheduled callbacks of the screen (the one-shot connect delay and the
//! repeating elapsed tick) are stored as deadlines, so the state machine stays
//! pure and tests drive it with virtual time.
//!
//! # State Machine
//!
//! ```text
//! ┌──────────────┐  toggle   ┌────────────┐  connect delay  ┌───────────┐
//! │ Disconnected │──────────>│ Connecting │────────────────>│ Connected │
//! └──────────────┘           └────────────┘                 └───────────┘
//!        ^                                                        │
//!        └──────────────────────── toggle ────────────────────────┘
//! ```

use std::time::Duration;

use crate::{ConnectionError, ConnectionPhase, Instant, format_elapsed};

/// Delay between pressing connect and reaching [`ConnectionPhase::Connected`].
pub const DEFAULT_CONNECT_DELAY: Duration = Duration::from_secs(2);

/// Interval of the elapsed counter.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Floor applied to the tick interval so catch-up always terminates.
const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Actions returned by the connection state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionAction {
    /// Phase changed.
    PhaseChanged {
        /// Phase before the transition
        from: ConnectionPhase,
        /// Phase after the transition
        to: ConnectionPhase,
    },

    /// Elapsed counter advanced to this many seconds.
    Elapsed(u64),
}

/// Scheduled callbacks owned by the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    /// One-shot delay from Connecting to Connected.
    ConnectDelay,
    /// Repeating elapsed-counter tick while Connected.
    ElapsedTick,
}

/// Connection timing configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Simulated connect latency
    pub connect_delay: Duration,
    /// Period of the elapsed counter
    pub tick_interval: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self { connect_delay: DEFAULT_CONNECT_DELAY, tick_interval: DEFAULT_TICK_INTERVAL }
    }
}

/// Connection state machine.
///
/// Holds the phase, the elapsed counter and the pending deadlines. Elapsed is
/// zero in every phase except [`ConnectionPhase::Connected`], and each phase
/// owns exactly the timer it needs: the connect delay while connecting, the
/// elapsed tick while connected, nothing while disconnected.
#[derive(Debug, Clone)]
pub struct Connection<I = std::time::Instant>
where
    I: Instant,
{
    phase: ConnectionPhase,
    config: ConnectionConfig,
    elapsed_secs: u64,
    connect_deadline: Option<I>,
    next_tick: Option<I>,
}

impl<I> Connection<I>
where
    I: Instant,
{
    /// Create a disconnected connection with no pending timers.
    pub fn new(config: ConnectionConfig) -> Self {
        Self {
            phase: ConnectionPhase::Disconnected,
            config,
            elapsed_secs: 0,
            connect_deadline: None,
            next_tick: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> ConnectionPhase {
        self.phase
    }

    /// Seconds spent connected. Zero unless connected.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Elapsed counter as `HH:MM:SS`.
    pub fn elapsed_display(&self) -> String {
        format_elapsed(self.elapsed_secs)
    }

    /// Whether the toggle accepts input right now.
    pub fn is_toggle_enabled(&self) -> bool {
        self.phase.accepts_toggle()
    }

    /// Timers currently scheduled.
    pub fn pending_timers(&self) -> Vec<Timer> {
        let mut timers = Vec::with_capacity(1);
        if self.connect_deadline.is_some() {
            timers.push(Timer::ConnectDelay);
        }
        if self.next_tick.is_some() {
            timers.push(Timer::ElapsedTick);
        }
        timers
    }

    /// Earliest pending deadline. `None` if no timer is scheduled.
    pub fn next_deadline(&self) -> Option<I> {
        match (self.connect_deadline, self.next_tick) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Press the connect button.
    ///
    /// Disconnects immediately when connected. When disconnected, enters
    /// Connecting and schedules the connect delay.
    ///
    /// # Errors
    ///
    /// - `ConnectionError::ToggleDisabled` while connecting
    pub fn toggle(&mut self, now: I) -> Result<Vec<ConnectionAction>, ConnectionError> {
        match self.phase {
            ConnectionPhase::Connecting => {
                Err(ConnectionError::ToggleDisabled { phase: self.phase })
            },
            ConnectionPhase::Connected => {
                self.next_tick = None;
                self.elapsed_secs = 0;
                Ok(vec![self.transition(ConnectionPhase::Disconnected)])
            },
            ConnectionPhase::Disconnected => {
                self.connect_deadline = Some(now + self.config.connect_delay);
                self.elapsed_secs = 0;
                Ok(vec![self.transition(ConnectionPhase::Connecting)])
            },
        }
    }

    /// Fire every timer due at `now`.
    ///
    /// Deadlines advance from the previous deadline rather than from `now`, so
    /// a late tick catches up with one `Elapsed` action per missed second and
    /// the counter never drifts.
    pub fn tick(&mut self, now: I) -> Vec<ConnectionAction> {
        let mut actions = Vec::new();

        if self.phase == ConnectionPhase::Connecting
            && let Some(deadline) = self.connect_deadline
            && deadline <= now
        {
            self.connect_deadline = None;
            self.elapsed_secs = 0;
            self.next_tick = Some(deadline + self.tick_interval());
            actions.push(self.transition(ConnectionPhase::Connected));
        }

        while self.phase == ConnectionPhase::Connected
            && let Some(deadline) = self.next_tick
            && deadline <= now
        {
            self.elapsed_secs += 1;
            self.next_tick = Some(deadline + self.tick_interval());
            actions.push(ConnectionAction::Elapsed(self.elapsed_secs));
        }

        actions
    }

    /// Cancel every pending timer and return to Disconnected.
    ///
    /// Called when the owning screen goes away so no callback outlives it.
    pub fn teardown(&mut self) -> Vec<ConnectionAction> {
        self.connect_deadline = None;
        self.next_tick = None;
        self.elapsed_secs = 0;

        if self.phase == ConnectionPhase::Disconnected {
            return vec![];
        }
        vec![self.transition(ConnectionPhase::Disconnected)]
    }

    fn tick_interval(&self) -> Duration {
        self.config.tick_interval.max(MIN_TICK_INTERVAL)
    }

    fn transition(&mut self, to: ConnectionPhase) -> ConnectionAction {
        let from = self.phase;
        self.phase = to;
        ConnectionAction::PhaseChanged { from, to }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    fn connected(start: Instant) -> Connection<Instant> {
        let mut conn = Connection::new(ConnectionConfig::default());
        let _ = conn.toggle(start);
        let _ = conn.tick(start + secs(2));
        conn
    }

    #[test]
    fn starts_disconnected_without_timers() {
        let conn: Connection<Instant> = Connection::new(ConnectionConfig::default());
        assert_eq!(conn.phase(), ConnectionPhase::Disconnected);
        assert_eq!(conn.elapsed_secs(), 0);
        assert!(conn.pending_timers().is_empty());
        assert!(conn.next_deadline().is_none());
    }

    #[test]
    fn toggle_from_disconnected_enters_connecting() {
        let now = Instant::now();
        let mut conn = Connection::new(ConnectionConfig::default());

        let actions = conn.toggle(now);

        assert_eq!(
            actions,
            Ok(vec![ConnectionAction::PhaseChanged {
                from: ConnectionPhase::Disconnected,
                to: ConnectionPhase::Connecting,
            }])
        );
        assert_eq!(conn.phase(), ConnectionPhase::Connecting);
        assert_eq!(conn.pending_timers(), vec![Timer::ConnectDelay]);
        assert_eq!(conn.next_deadline(), Some(now + secs(2)));
    }

    #[test]
    fn toggle_rejected_while_connecting() {
        let now = Instant::now();
        let mut conn = Connection::new(ConnectionConfig::default());
        let _ = conn.toggle(now);

        let result = conn.toggle(now + Duration::from_millis(500));

        assert_eq!(
            result,
            Err(ConnectionError::ToggleDisabled { phase: ConnectionPhase::Connecting })
        );
        assert_eq!(conn.phase(), ConnectionPhase::Connecting);
        assert_eq!(conn.next_deadline(), Some(now + secs(2)));
    }

    #[test]
    fn stays_connecting_before_delay() {
        let now = Instant::now();
        let mut conn = Connection::new(ConnectionConfig::default());
        let _ = conn.toggle(now);

        let actions = conn.tick(now + Duration::from_millis(1999));

        assert!(actions.is_empty());
        assert_eq!(conn.phase(), ConnectionPhase::Connecting);
    }

    #[test]
    fn connects_at_delay() {
        let now = Instant::now();
        let mut conn = Connection::new(ConnectionConfig::default());
        let _ = conn.toggle(now);

        let actions = conn.tick(now + secs(2));

        assert_eq!(actions, vec![ConnectionAction::PhaseChanged {
            from: ConnectionPhase::Connecting,
            to: ConnectionPhase::Connected,
        }]);
        assert_eq!(conn.elapsed_secs(), 0);
        assert_eq!(conn.pending_timers(), vec![Timer::ElapsedTick]);
        assert_eq!(conn.next_deadline(), Some(now + secs(3)));
    }

    #[test]
    fn late_tick_catches_up_from_deadline() {
        let now = Instant::now();
        let mut conn = Connection::new(ConnectionConfig::default());
        let _ = conn.toggle(now);

        // Connect at t=2, ticks due at t=3,4,5
        let actions = conn.tick(now + Duration::from_millis(5500));

        assert_eq!(conn.phase(), ConnectionPhase::Connected);
        assert_eq!(conn.elapsed_secs(), 3);
        assert_eq!(
            actions.iter().filter(|a| matches!(a, ConnectionAction::Elapsed(_))).count(),
            3
        );
    }

    #[test]
    fn elapsed_increments_once_per_second() {
        let start = Instant::now();
        let mut conn = connected(start);

        for n in 1..=10 {
            let actions = conn.tick(start + secs(2 + n));
            assert_eq!(actions, vec![ConnectionAction::Elapsed(n)]);
            assert_eq!(conn.elapsed_secs(), n);
        }
        assert_eq!(conn.elapsed_display(), "00:00:10");
    }

    #[test]
    fn toggle_from_connected_disconnects_synchronously() {
        let start = Instant::now();
        let mut conn = connected(start);
        let _ = conn.tick(start + secs(7));
        assert_eq!(conn.elapsed_secs(), 5);

        let actions = conn.toggle(start + secs(7));

        assert_eq!(
            actions,
            Ok(vec![ConnectionAction::PhaseChanged {
                from: ConnectionPhase::Connected,
                to: ConnectionPhase::Disconnected,
            }])
        );
        assert_eq!(conn.elapsed_secs(), 0);
        assert!(conn.pending_timers().is_empty());

        // No dangling tick after disconnect
        assert!(conn.tick(start + secs(60)).is_empty());
        assert_eq!(conn.elapsed_secs(), 0);
    }

    #[test]
    fn reconnect_restarts_counter() {
        let start = Instant::now();
        let mut conn = connected(start);
        let _ = conn.tick(start + secs(10));
        let _ = conn.toggle(start + secs(10));

        let _ = conn.toggle(start + secs(20));
        assert_eq!(conn.elapsed_secs(), 0);
        let _ = conn.tick(start + secs(23));

        assert_eq!(conn.phase(), ConnectionPhase::Connected);
        assert_eq!(conn.elapsed_secs(), 1);
    }

    #[test]
    fn teardown_cancels_connect_delay() {
        let now = Instant::now();
        let mut conn = Connection::new(ConnectionConfig::default());
        let _ = conn.toggle(now);

        let actions = conn.teardown();

        assert_eq!(actions, vec![ConnectionAction::PhaseChanged {
            from: ConnectionPhase::Connecting,
            to: ConnectionPhase::Disconnected,
        }]);
        assert!(conn.pending_timers().is_empty());
        assert!(conn.tick(now + secs(5)).is_empty());
        assert_eq!(conn.phase(), ConnectionPhase::Disconnected);
    }

    #[test]
    fn teardown_when_disconnected_is_silent() {
        let mut conn: Connection<Instant> = Connection::new(ConnectionConfig::default());
        assert!(conn.teardown().is_empty());
    }

    #[test]
    fn zero_tick_interval_terminates() {
        let now = Instant::now();
        let config =
            ConnectionConfig { connect_delay: Duration::ZERO, tick_interval: Duration::ZERO };
        let mut conn = Connection::new(config);
        let _ = conn.toggle(now);

        let _ = conn.tick(now + Duration::from_millis(3));

        assert_eq!(conn.phase(), ConnectionPhase::Connected);
        assert_eq!(conn.elapsed_secs(), 3);
    }
}
