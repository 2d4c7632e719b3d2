//! Application configuration.

use std::time::Duration;

use pearl_core::ConnectionConfig;

/// How long the splash screen stays up before onboarding.
pub const DEFAULT_SPLASH_DELAY: Duration = Duration::from_secs(2);

/// Timing of every simulated delay in the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Connect delay and elapsed tick of the Home screen
    pub connection: ConnectionConfig,
    /// Splash screen duration
    pub splash_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { connection: ConnectionConfig::default(), splash_delay: DEFAULT_SPLASH_DELAY }
    }
}
