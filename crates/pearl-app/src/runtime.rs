//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: UI state machine
//! - [`Driver`]: Platform-specific I/O

use crate::{App, AppAction, AppConfig, Driver};

/// Generic runtime that orchestrates App and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
pub struct Runtime<D>
where
    D: Driver,
{
    driver: D,
    app: App<D::Instant>,
}

impl<D> Runtime<D>
where
    D: Driver,
{
    /// Create a new runtime. The app starts on the splash screen at the
    /// driver's current instant.
    pub fn new(driver: D, config: AppConfig) -> Self {
        let app = App::new(config, driver.now());
        Self { driver, app }
    }

    /// Application state.
    pub fn app(&self) -> &App<D::Instant> {
        &self.app
    }

    /// I/O driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// I/O driver, mutably.
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Run the main event loop to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<(), D::Error> {
        self.run_until_quit().await
    }

    /// Run the main event loop, keeping the runtime for inspection.
    ///
    /// This is the core orchestration loop that:
    /// 1. Renders the initial state
    /// 2. Polls for input events from the driver
    /// 3. Feeds them to the App and executes the resulting actions
    /// 4. Tears down every route and stops the driver on quit
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run_until_quit(&mut self) -> Result<(), D::Error> {
        self.driver.render(&self.app)?;

        let result = loop {
            match self.step().await {
                Ok(false) => {},
                Ok(true) => break Ok(()),
                Err(error) => break Err(error),
            }
        };

        self.app.shutdown();
        self.driver.stop();
        result
    }

    /// Process one event.
    ///
    /// Returns `true` if the application should quit.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn step(&mut self) -> Result<bool, D::Error> {
        let Some(event) = self.driver.poll_event().await? else {
            tracing::debug!("input closed");
            return Ok(true);
        };

        let now = self.driver.now();
        let actions = self.app.handle(event, now);
        self.process_actions(actions)
    }

    /// Execute actions returned by the App.
    ///
    /// Returns `true` if should quit.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, D::Error> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app)?,
                AppAction::Quit => {
                    tracing::info!("quit requested");
                    return Ok(true);
                },
            }
        }
        Ok(false)
    }
}
