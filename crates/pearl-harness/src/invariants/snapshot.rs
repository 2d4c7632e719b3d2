//! Observable state snapshots for invariant checking.
//!
//! Snapshots capture the observable state of the app at a point in time.
//! Invariants operate on snapshots rather than live state to ensure
//! consistent, atomic checks.

use pearl_app::{App, Screen};
use pearl_core::{ConnectionPhase, Instant, Timer};

/// Snapshot of the App's observable state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppSnapshot {
    /// Screens on the navigation stack, bottom first.
    pub screens: Vec<Screen>,
    /// Home connection phase. `None` if no Home route exists.
    pub phase: Option<ConnectionPhase>,
    /// Home elapsed counter.
    pub elapsed_secs: u64,
    /// Home pending timers.
    pub pending_timers: Vec<Timer>,
    /// Name of the Home selection. `None` if no Home route exists.
    pub selection: Option<String>,
}

impl AppSnapshot {
    /// Capture the observable state of `app`.
    pub fn from_app<I: Instant>(app: &App<I>) -> Self {
        let navigator = app.navigator();
        let mut snapshot = Self { screens: navigator.screens(), ..Self::default() };

        if let Some(home) = navigator.home() {
            let connection = home.connection();
            snapshot.phase = Some(connection.phase());
            snapshot.elapsed_secs = connection.elapsed_secs();
            snapshot.pending_timers = connection.pending_timers();
            snapshot.selection = Some(home.selection().name().to_string());
        }
        snapshot
    }
}
