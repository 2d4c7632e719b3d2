//! Terminal UI for Pearl VPN
//!
//! A thin shell over [`pearl_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`pearl_app::Runtime`].
//!
//! This crate only handles terminal input and rendering.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod system_env;
pub mod terminal;
pub mod ui;

pub use pearl_app::{App, AppAction, AppConfig, AppEvent, Driver, KeyInput, Runtime};
pub use system_env::SystemEnv;
pub use terminal::{TerminalDriver, TerminalError};
