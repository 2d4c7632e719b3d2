//! Connection phase.

use std::fmt;

/// Phase of the simulated connection.
///
/// Exactly three phases exist. Transitions are driven by the toggle and by
/// time alone; nothing in the shell observes a real network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConnectionPhase {
    /// No connection. The toggle starts connecting.
    #[default]
    Disconnected,
    /// Waiting out the fixed connect delay. The toggle is disabled.
    Connecting,
    /// Connected. The elapsed counter runs and the toggle disconnects.
    Connected,
}

impl ConnectionPhase {
    /// Status label shown on the Home screen.
    pub fn status_label(self) -> &'static str {
        match self {
            Self::Disconnected => "Disconnected",
            Self::Connecting => "Connecting...",
            Self::Connected => "Connected",
        }
    }

    /// Label of the connect button.
    ///
    /// "Cancel Connection" is only a label; no cancel transition exists.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Disconnected => "Connect",
            Self::Connecting => "Cancel Connection",
            Self::Connected => "Disconnect",
        }
    }

    /// Whether the toggle accepts input in this phase.
    pub fn accepts_toggle(self) -> bool {
        !matches!(self, Self::Connecting)
    }
}

impl fmt::Display for ConnectionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Disconnected => "disconnected",
            Self::Connecting => "connecting",
            Self::Connected => "connected",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_per_phase() {
        assert_eq!(ConnectionPhase::Disconnected.button_label(), "Connect");
        assert_eq!(ConnectionPhase::Connecting.button_label(), "Cancel Connection");
        assert_eq!(ConnectionPhase::Connected.button_label(), "Disconnect");
        assert_eq!(ConnectionPhase::Connecting.status_label(), "Connecting...");
    }

    #[test]
    fn toggle_disabled_only_while_connecting() {
        assert!(ConnectionPhase::Disconnected.accepts_toggle());
        assert!(!ConnectionPhase::Connecting.accepts_toggle());
        assert!(ConnectionPhase::Connected.accepts_toggle());
    }
}
