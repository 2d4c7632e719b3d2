//! Domain core for the Pearl VPN client shell.
//!
//! Every piece of "VPN" behaviour in the shell is simulated: the connection
//! is a timer-driven state machine, the server list is a static table, and
//! nothing touches the network. This crate holds those pieces as pure state
//! machines that take time as input, so the same code runs under real and
//! virtual clocks.
//!
//! # Components
//!
//! - [`Connection`]: connect/disconnect toggle with the fixed connect delay and
//!   the per-second elapsed counter
//! - [`format_elapsed`]: `HH:MM:SS` rendering of the elapsed counter
//! - [`ServerSelection`]: the server shown on the Home screen
//! - [`ServerListView`]: filtering, partitioning and expansion of the catalog
//! - [`Environment`]: time abstraction implemented by drivers

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod connection;
pub mod env;
pub mod error;
pub mod format;
pub mod list_view;
pub mod phase;
pub mod selection;
pub mod servers;

pub use connection::{Connection, ConnectionAction, ConnectionConfig, Timer};
pub use env::{Environment, Instant};
pub use error::{ConnectionError, SelectionError};
pub use format::{format_elapsed, format_ping};
pub use list_view::{Partition, Row, ServerGroup, ServerListView};
pub use phase::ConnectionPhase;
pub use selection::ServerSelection;
pub use servers::{CATALOG, Server, Signal};
