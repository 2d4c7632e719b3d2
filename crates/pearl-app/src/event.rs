//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::App`] state machine: user interactions (keyboard, resize) and the
//! periodic tick that fires screen timers.

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Periodic tick. Fires every timer due at the current instant.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),
}
