//! Deterministic simulation harness for Pearl VPN.
//!
//! A virtual clock, a scripted [`pearl_app::Driver`], and invariant checks
//! for deterministic, reproducible testing of the whole screen flow with the
//! same [`pearl_app::Runtime`] the terminal uses.
//!
//! # Invariant Testing
//!
//! The `invariants` module provides behavioral testing through invariant
//! checks. Invariants verify WHAT must be true across all execution paths, not
//! specific scenarios. Use [`InvariantRegistry::standard()`] for the App
//! invariants.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod invariants;
pub mod sim_driver;
pub mod sim_env;

pub use invariants::{
    AppSnapshot, ElapsedZeroUnlessConnected, Invariant, InvariantRegistry, InvariantResult,
    ScreensUnique, SelectionInCatalog, StackNonEmpty, TimersMatchPhase, Violation,
};
pub use sim_driver::{SimDriver, SimDriverError, SimInput};
pub use sim_env::{SimEnv, SimInstant};
