//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` provides the same interface as `TerminalDriver` but for
//! deterministic testing. It implements [`Driver`] so the same
//! [`pearl_app::Runtime`] orchestration code runs in both production and
//! simulation.
//!
//! Input is a script of events and clock advances. Advancing the clock also
//! emits a tick, the way the terminal's periodic tick would. The input source
//! closes when the script runs out.

use std::{collections::VecDeque, time::Duration};

use pearl_app::{App, AppEvent, Driver, KeyInput};
use pearl_core::Environment;
use thiserror::Error;

use crate::{
    SimEnv, SimInstant,
    invariants::{AppSnapshot, InvariantRegistry, Violation},
};

/// Error type for simulation driver.
#[derive(Debug, Clone, Error)]
pub enum SimDriverError {
    /// A rendered state broke one or more invariants.
    #[error("invariant violation after render {render}: {}", format_violations(.violations))]
    InvariantViolation {
        /// Render count at which the violation was seen
        render: usize,
        /// Every violated invariant
        violations: Vec<Violation>,
    },
}

fn format_violations(violations: &[Violation]) -> String {
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// One scripted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimInput {
    /// Deliver an event at the current virtual time
    Event(AppEvent),
    /// Advance the virtual clock, then deliver a tick
    Advance(Duration),
}

/// Simulation driver for deterministic testing.
///
/// Implements [`Driver`] trait so the same [`pearl_app::Runtime`]
/// orchestration code runs in both production TUI and simulation tests.
#[derive(Debug)]
pub struct SimDriver {
    env: SimEnv,
    script: VecDeque<SimInput>,
    invariants: Option<InvariantRegistry>,
    renders: Vec<AppSnapshot>,
    stopped: bool,
}

impl Default for SimDriver {
    fn default() -> Self {
        Self::new(SimEnv::new())
    }
}

impl SimDriver {
    /// Create a driver reading time from `env`.
    pub fn new(env: SimEnv) -> Self {
        Self { env, script: VecDeque::new(), invariants: None, renders: Vec::new(), stopped: false }
    }

    /// Enable invariant checking on every render.
    #[must_use]
    pub fn with_invariants(mut self, registry: InvariantRegistry) -> Self {
        self.invariants = Some(registry);
        self
    }

    /// Queue an event.
    pub fn inject_event(&mut self, event: AppEvent) {
        self.script.push_back(SimInput::Event(event));
    }

    /// Queue a key press.
    pub fn inject_key(&mut self, key: KeyInput) {
        self.inject_event(AppEvent::Key(key));
    }

    /// Queue one key press per character.
    pub fn inject_text(&mut self, text: &str) {
        for c in text.chars() {
            self.inject_key(KeyInput::Char(c));
        }
    }

    /// Queue a clock advance followed by a tick.
    pub fn inject_advance(&mut self, duration: Duration) {
        self.script.push_back(SimInput::Advance(duration));
    }

    /// Check if there are pending inputs to process.
    pub fn has_pending(&self) -> bool {
        !self.script.is_empty()
    }

    /// Snapshot taken at every render, oldest first.
    pub fn renders(&self) -> &[AppSnapshot] {
        &self.renders
    }

    /// Whether the runtime stopped the driver.
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;
    type Instant = SimInstant;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        match self.script.pop_front() {
            Some(SimInput::Event(event)) => Ok(Some(event)),
            Some(SimInput::Advance(duration)) => {
                self.env.sleep(duration).await;
                Ok(Some(AppEvent::Tick))
            },
            None => Ok(None),
        }
    }

    fn now(&self) -> Self::Instant {
        self.env.now()
    }

    fn render(&mut self, app: &App<Self::Instant>) -> Result<(), Self::Error> {
        let snapshot = AppSnapshot::from_app(app);

        if let Some(registry) = &self.invariants
            && let Err(violations) = registry.check_all(&snapshot)
        {
            tracing::warn!(render = self.renders.len(), "invariant violation");
            return Err(SimDriverError::InvariantViolation { render: self.renders.len(), violations });
        }

        self.renders.push(snapshot);
        Ok(())
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}
