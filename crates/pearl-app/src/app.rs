//! Application state machine.
//!
//! This module defines the [`App`] state machine, which owns the navigation
//! stack and routes input to the visible screen, completely decoupled from
//! terminal I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//! Time enters only through the `now` argument.
//!
//! # Responsibilities
//!
//! - Maps keys to screen operations.
//! - Fires due route timers on every event (splash handover, connect delay,
//!   elapsed counter). Every route on the stack ticks, so the Home counter keeps
//!   running while another screen is on top.
//! - Stores terminal dimensions to handle resize events.
//! - Holds a status message until the next key press.

use pearl_core::{ConnectionAction, ConnectionPhase, Instant, ServerSelection};

use crate::{
    AppAction, AppConfig, AppEvent, KeyInput, Navigator, Route, Screen,
    screens::{RouteTick, login::SignInMethod, settings::SettingsCommand},
};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App<I: Instant> {
    /// Route stack and per-screen state.
    navigator: Navigator<I>,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
    /// Transient status message. `None` if no message.
    status_message: Option<String>,
}

impl<I: Instant> App<I> {
    /// Create a new App on the splash screen.
    pub fn new(config: AppConfig, now: I) -> Self {
        Self {
            navigator: Navigator::new(config, now),
            terminal_size: (80, 24),
            status_message: None,
        }
    }

    /// Process an event and return actions.
    ///
    /// Due route timers fire first, whatever the event, so a key arriving
    /// after a deadline sees the state the deadline produced.
    pub fn handle(&mut self, event: AppEvent, now: I) -> Vec<AppAction> {
        let timers_fired = self.fire_timers(now);

        let mut actions = match event {
            AppEvent::Tick => vec![],
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::Key(key) => self.handle_key(key, now),
        };

        if timers_fired && !actions.contains(&AppAction::Render) {
            actions.insert(0, AppAction::Render);
        }
        actions
    }

    /// Navigation stack.
    pub fn navigator(&self) -> &Navigator<I> {
        &self.navigator
    }

    /// Visible destination.
    pub fn screen(&self) -> Screen {
        self.navigator.screen()
    }

    /// Visible route.
    pub fn current(&self) -> &Route<I> {
        self.navigator.current()
    }

    /// Connection phase of the Home route. `None` before sign-in.
    pub fn phase(&self) -> Option<ConnectionPhase> {
        self.navigator.home().map(|home| home.phase())
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Current status message. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// Set a status message to display to the user.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Hand a confirmed choice to the Home screen and return to it.
    ///
    /// The connection phase is untouched.
    pub fn choose_server(&mut self, selection: ServerSelection, now: I) -> Vec<AppAction> {
        tracing::info!(server = selection.name(), "server selected");
        self.set_status(format!("Selected {}", selection.name()));

        if let Some(home) = self.navigator.home_mut() {
            home.select(selection);
        }
        self.navigator.navigate(Screen::Home, now);
        vec![AppAction::Render]
    }

    /// Cancel every route timer. Called before the runtime stops.
    pub fn shutdown(&mut self) {
        self.navigator.teardown_all();
    }

    /// Fire every due route timer. Returns whether anything changed.
    fn fire_timers(&mut self, now: I) -> bool {
        let mut changed = false;
        let mut splash_elapsed = false;

        for route in self.navigator.routes_mut() {
            match route.tick(now) {
                RouteTick::Idle => {},
                RouteTick::SplashElapsed => splash_elapsed = true,
                RouteTick::Connection(actions) => {
                    log_connection(&actions);
                    changed = true;
                },
            }
        }

        if splash_elapsed && self.screen() == Screen::Splash {
            self.navigator.replace(Screen::Onboarding, now);
            changed = true;
        }

        changed
    }

    fn handle_key(&mut self, key: KeyInput, now: I) -> Vec<AppAction> {
        self.status_message = None;
        if key == KeyInput::Esc {
            return self.back();
        }

        match self.screen() {
            Screen::Splash => vec![],
            Screen::Onboarding => self.onboarding_key(key, now),
            Screen::Login => self.login_key(key, now),
            Screen::Home => self.home_key(key, now),
            Screen::ServerList => self.server_list_key(key, now),
            Screen::Settings => self.settings_key(key, now),
            Screen::Premium => self.premium_key(key),
        }
    }

    fn back(&mut self) -> Vec<AppAction> {
        if self.navigator.go_back() { vec![AppAction::Render] } else { vec![AppAction::Quit] }
    }

    fn navigate(&mut self, screen: Screen, now: I) -> Vec<AppAction> {
        if self.navigator.navigate(screen, now) { vec![AppAction::Render] } else { vec![] }
    }

    fn onboarding_key(&mut self, key: KeyInput, now: I) -> Vec<AppAction> {
        let Route::Onboarding(onboarding) = self.navigator.current_mut() else {
            return vec![];
        };

        match key {
            KeyInput::Tab | KeyInput::BackTab | KeyInput::Up | KeyInput::Down => {
                onboarding.focus_next();
                vec![AppAction::Render]
            },
            KeyInput::Enter => self.navigate(Screen::Login, now),
            _ => vec![],
        }
    }

    fn login_key(&mut self, key: KeyInput, now: I) -> Vec<AppAction> {
        let Route::Login(login) = self.navigator.current_mut() else {
            return vec![];
        };

        match key {
            KeyInput::Tab | KeyInput::Down => login.focus_next(),
            KeyInput::BackTab | KeyInput::Up => login.focus_prev(),
            KeyInput::Char(c) => login.insert_char(c),
            KeyInput::Backspace => login.backspace(),
            KeyInput::Enter => {
                if let Some(method) = login.confirm() {
                    tracing::info!(?method, "signed in");
                    if method == SignInMethod::Google {
                        self.set_status("Signed in with Google");
                    }
                    self.navigator.replace(Screen::Home, now);
                }
            },
            KeyInput::Esc => {},
        }
        vec![AppAction::Render]
    }

    fn home_key(&mut self, key: KeyInput, now: I) -> Vec<AppAction> {
        match key {
            KeyInput::Enter | KeyInput::Char(' ') => self.toggle_connection(now),
            KeyInput::Char('l') => self.navigate(Screen::ServerList, now),
            KeyInput::Char('s') => self.navigate(Screen::Settings, now),
            KeyInput::Char('p') => self.navigate(Screen::Premium, now),
            KeyInput::Char('q') => vec![AppAction::Quit],
            _ => vec![],
        }
    }

    fn toggle_connection(&mut self, now: I) -> Vec<AppAction> {
        let Some(home) = self.navigator.home_mut() else {
            return vec![];
        };

        match home.toggle(now) {
            Ok(actions) => {
                log_connection(&actions);
                vec![AppAction::Render]
            },
            Err(error) => {
                tracing::warn!(%error, "toggle ignored");
                vec![]
            },
        }
    }

    fn server_list_key(&mut self, key: KeyInput, now: I) -> Vec<AppAction> {
        let Route::ServerList(view) = self.navigator.current_mut() else {
            return vec![];
        };

        match key {
            KeyInput::Char(c) => view.push_char(c),
            KeyInput::Backspace => view.pop_char(),
            KeyInput::Up | KeyInput::BackTab => view.move_up(),
            KeyInput::Down => view.move_down(),
            KeyInput::Enter => {
                if let Some(selection) = view.activate() {
                    return self.choose_server(selection, now);
                }
            },
            KeyInput::Tab => return self.navigate(Screen::Settings, now),
            KeyInput::Esc => {},
        }
        vec![AppAction::Render]
    }

    fn settings_key(&mut self, key: KeyInput, now: I) -> Vec<AppAction> {
        let Route::Settings(settings) = self.navigator.current_mut() else {
            return vec![];
        };

        match key {
            KeyInput::Up | KeyInput::BackTab => settings.move_up(),
            KeyInput::Down | KeyInput::Tab => settings.move_down(),
            KeyInput::Enter | KeyInput::Char(' ') => match settings.activate() {
                SettingsCommand::OpenPremium => return self.navigate(Screen::Premium, now),
                SettingsCommand::Toggled { switch, on } => {
                    tracing::info!(switch = switch.title(), on, "setting changed");
                },
                SettingsCommand::Nothing => {},
            },
            KeyInput::Char('h') => return self.navigate(Screen::Home, now),
            KeyInput::Char('l') => return self.navigate(Screen::ServerList, now),
            _ => return vec![],
        }
        vec![AppAction::Render]
    }

    fn premium_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        let Route::Premium(premium) = self.navigator.current_mut() else {
            return vec![];
        };

        match key {
            KeyInput::Up | KeyInput::BackTab => premium.select_prev(),
            KeyInput::Down | KeyInput::Tab => premium.select_next(),
            KeyInput::Enter => {
                let plan = premium.selected();
                tracing::info!(plan = plan.title, price = plan.price, "upgrade requested");
                self.set_status(format!("Upgrading to {} plan", plan.title));
            },
            _ => return vec![],
        }
        vec![AppAction::Render]
    }
}

fn log_connection(actions: &[ConnectionAction]) {
    for action in actions {
        match action {
            ConnectionAction::PhaseChanged { from, to } => {
                tracing::info!(%from, %to, "connection phase changed");
            },
            ConnectionAction::Elapsed(secs) => tracing::trace!(secs, "connection tick"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant as StdInstant};

    use super::*;

    fn at_home() -> (App<StdInstant>, StdInstant) {
        let t0 = StdInstant::now();
        let mut app = App::new(AppConfig::default(), t0);
        app.handle(AppEvent::Tick, t0 + Duration::from_secs(2));
        app.handle(AppEvent::Key(KeyInput::Enter), t0);
        app.handle(AppEvent::Key(KeyInput::Tab), t0);
        app.handle(AppEvent::Key(KeyInput::Tab), t0);
        app.handle(AppEvent::Key(KeyInput::Enter), t0);
        (app, t0)
    }

    #[test]
    fn splash_hands_over_after_delay() {
        let t0 = StdInstant::now();
        let mut app = App::new(AppConfig::default(), t0);

        assert!(app.handle(AppEvent::Tick, t0 + Duration::from_millis(1500)).is_empty());
        assert_eq!(app.screen(), Screen::Splash);

        let actions = app.handle(AppEvent::Tick, t0 + Duration::from_secs(2));
        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.navigator().screens(), vec![Screen::Onboarding]);
    }

    #[test]
    fn sign_in_replaces_login_with_home() {
        let (app, _) = at_home();
        assert_eq!(app.navigator().screens(), vec![Screen::Onboarding, Screen::Home]);
        assert_eq!(app.phase(), Some(ConnectionPhase::Disconnected));
    }

    #[test]
    fn toggle_while_connecting_is_ignored() {
        let (mut app, t0) = at_home();
        app.handle(AppEvent::Key(KeyInput::Enter), t0);
        assert_eq!(app.phase(), Some(ConnectionPhase::Connecting));

        let actions = app.handle(AppEvent::Key(KeyInput::Char(' ')), t0);
        assert!(actions.is_empty());
        assert_eq!(app.phase(), Some(ConnectionPhase::Connecting));
    }

    #[test]
    fn escape_quits_at_root() {
        let t0 = StdInstant::now();
        let mut app = App::new(AppConfig::default(), t0);
        assert_eq!(app.handle(AppEvent::Key(KeyInput::Esc), t0), vec![AppAction::Quit]);
    }

    #[test]
    fn resize_records_dimensions() {
        let t0 = StdInstant::now();
        let mut app = App::new(AppConfig::default(), t0);
        app.handle(AppEvent::Resize(120, 40), t0);
        assert_eq!(app.terminal_size(), (120, 40));
    }

    #[test]
    fn upgrade_sets_status() {
        let (mut app, t0) = at_home();
        app.handle(AppEvent::Key(KeyInput::Char('p')), t0);
        app.handle(AppEvent::Key(KeyInput::Enter), t0);
        assert_eq!(app.status_message(), Some("Upgrading to Yearly plan"));
    }
}
