//! Error types for the domain core.
//!
//! The simulated connection cannot fail. The only rejected operations are a
//! toggle while connecting and a selection naming a server outside the
//! catalog.

use thiserror::Error;

use crate::ConnectionPhase;

/// Errors from the connection state machine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    /// Toggle pressed while the toggle is disabled.
    #[error("toggle disabled while {phase}")]
    ToggleDisabled {
        /// Phase when the toggle was pressed
        phase: ConnectionPhase,
    },
}

/// Errors from server selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// No catalog entry carries this name.
    #[error("unknown server: {0}")]
    UnknownServer(String),
}
