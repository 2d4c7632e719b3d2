//! Home screen: connection toggle and current server.

use pearl_core::{
    Connection, ConnectionAction, ConnectionConfig, ConnectionError, ConnectionPhase, Instant,
    ServerSelection,
};

/// Download total shown while connected. Not measured.
pub const DOWNLOAD_TOTAL: &str = "527 MB";

/// Upload total shown while connected. Not measured.
pub const UPLOAD_TOTAL: &str = "69 MB";

/// Placeholder public address shown while connected.
pub const PUBLIC_ADDRESS: &str = "185.101.575";

/// Traffic figures for the connected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Traffic {
    /// Downloaded label
    pub download: &'static str,
    /// Uploaded label
    pub upload: &'static str,
}

/// Home screen state.
///
/// Owns the connection state machine for as long as the Home route is on the
/// navigation stack.
#[derive(Debug, Clone)]
pub struct HomeState<I: Instant> {
    connection: Connection<I>,
    selection: ServerSelection,
}

impl<I: Instant> HomeState<I> {
    /// Disconnected, with the default selection.
    pub fn new(config: ConnectionConfig) -> Self {
        Self { connection: Connection::new(config), selection: ServerSelection::default() }
    }

    /// Connection state machine.
    pub fn connection(&self) -> &Connection<I> {
        &self.connection
    }

    /// Current phase.
    pub fn phase(&self) -> ConnectionPhase {
        self.connection.phase()
    }

    /// Selected server.
    pub fn selection(&self) -> &ServerSelection {
        &self.selection
    }

    /// Replace the selected server. Does not touch the connection.
    pub fn select(&mut self, selection: ServerSelection) {
        self.selection = selection;
    }

    /// Press the connection button.
    pub fn toggle(&mut self, now: I) -> Result<Vec<ConnectionAction>, ConnectionError> {
        self.connection.toggle(now)
    }

    /// Fire due connection timers.
    pub fn tick(&mut self, now: I) -> Vec<ConnectionAction> {
        self.connection.tick(now)
    }

    /// Cancel every pending timer.
    pub fn teardown(&mut self) -> Vec<ConnectionAction> {
        self.connection.teardown()
    }

    /// `HH:MM:SS` connection time. `None` unless connected.
    pub fn connection_time(&self) -> Option<String> {
        (self.phase() == ConnectionPhase::Connected).then(|| self.connection.elapsed_display())
    }

    /// Traffic figures. `None` unless connected.
    pub fn traffic(&self) -> Option<Traffic> {
        (self.phase() == ConnectionPhase::Connected)
            .then_some(Traffic { download: DOWNLOAD_TOTAL, upload: UPLOAD_TOTAL })
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant as StdInstant};

    use super::*;

    #[test]
    fn details_only_while_connected() {
        let t0 = StdInstant::now();
        let mut home = HomeState::new(ConnectionConfig::default());
        assert_eq!(home.connection_time(), None);
        assert_eq!(home.traffic(), None);

        assert!(home.toggle(t0).is_ok());
        assert_eq!(home.connection_time(), None);

        home.tick(t0 + Duration::from_secs(2));
        assert_eq!(home.connection_time().as_deref(), Some("00:00:00"));
        assert_eq!(home.traffic().map(|t| t.download), Some("527 MB"));

        home.tick(t0 + Duration::from_secs(5));
        assert_eq!(home.connection_time().as_deref(), Some("00:00:03"));
    }

    #[test]
    fn selecting_keeps_connection() {
        let t0 = StdInstant::now();
        let mut home = HomeState::new(ConnectionConfig::default());
        assert!(home.toggle(t0).is_ok());

        if let Ok(selection) = ServerSelection::by_name("Germany") {
            home.select(selection);
        }
        assert_eq!(home.selection().name(), "Germany");
        assert_eq!(home.phase(), ConnectionPhase::Connecting);
    }
}
