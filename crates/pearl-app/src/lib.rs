//! Application layer for Pearl VPN
//!
//! Pure state machines and a generic runtime for the screen flow, enabling
//! deterministic simulation testing with the same code that runs in the
//! terminal.
//!
//! # Components
//!
//! - [`App`]: UI state machine (input handling, navigation, screen state)
//! - [`Navigator`]: Stack of routes, each owning one screen's state
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod config;
mod driver;
mod event;
mod input;
mod navigation;
mod runtime;
pub mod screens;

pub use action::AppAction;
pub use app::App;
pub use config::AppConfig;
pub use driver::Driver;
pub use event::AppEvent;
pub use input::KeyInput;
pub use navigation::{Navigator, Screen};
pub use runtime::Runtime;
pub use screens::Route;
