//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.
//! They verify WHAT must be true, not specific test scenarios.

use pearl_core::{ConnectionPhase, ServerSelection, Timer};

use super::{AppSnapshot, Invariant, InvariantResult, Violation};

/// Elapsed counter is zero outside the connected phase.
///
/// The counter resets on every transition away from Connected and only
/// counts while connected.
pub struct ElapsedZeroUnlessConnected;

impl Invariant for ElapsedZeroUnlessConnected {
    fn name(&self) -> &'static str {
        "elapsed_zero_unless_connected"
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        if state.phase != Some(ConnectionPhase::Connected) && state.elapsed_secs != 0 {
            return Err(Violation {
                invariant: self.name(),
                message: format!("elapsed {} while {:?}", state.elapsed_secs, state.phase),
            });
        }
        Ok(())
    }
}

/// Each phase owns exactly its timer.
///
/// Connect delay while connecting, elapsed tick while connected, nothing
/// while disconnected. A leftover timer would fire into the wrong phase.
pub struct TimersMatchPhase;

impl Invariant for TimersMatchPhase {
    fn name(&self) -> &'static str {
        "timers_match_phase"
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        let expected: &[Timer] = match state.phase {
            None | Some(ConnectionPhase::Disconnected) => &[],
            Some(ConnectionPhase::Connecting) => &[Timer::ConnectDelay],
            Some(ConnectionPhase::Connected) => &[Timer::ElapsedTick],
        };

        if state.pending_timers != expected {
            return Err(Violation {
                invariant: self.name(),
                message: format!(
                    "{:?} has timers {:?}, expected {:?}",
                    state.phase, state.pending_timers, expected
                ),
            });
        }
        Ok(())
    }
}

/// There is always a visible screen.
pub struct StackNonEmpty;

impl Invariant for StackNonEmpty {
    fn name(&self) -> &'static str {
        "stack_non_empty"
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        if state.screens.is_empty() {
            return Err(Violation {
                invariant: self.name(),
                message: "navigation stack is empty".to_string(),
            });
        }
        Ok(())
    }
}

/// A screen appears at most once on the stack.
///
/// Navigating to a screen already on the stack pops back to it instead of
/// pushing a duplicate.
pub struct ScreensUnique;

impl Invariant for ScreensUnique {
    fn name(&self) -> &'static str {
        "screens_unique"
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        for (i, screen) in state.screens.iter().enumerate() {
            if state.screens[i + 1..].contains(screen) {
                return Err(Violation {
                    invariant: self.name(),
                    message: format!("{screen} appears twice in {:?}", state.screens),
                });
            }
        }
        Ok(())
    }
}

/// The Home selection always names a selectable catalog entry.
pub struct SelectionInCatalog;

impl Invariant for SelectionInCatalog {
    fn name(&self) -> &'static str {
        "selection_in_catalog"
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        if let Some(name) = &state.selection
            && let Err(error) = ServerSelection::by_name(name)
        {
            return Err(Violation { invariant: self.name(), message: error.to_string() });
        }
        Ok(())
    }
}
