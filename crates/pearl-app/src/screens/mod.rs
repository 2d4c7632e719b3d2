//! Per-screen state.
//!
//! Every route on the navigation stack owns one of these. State lives exactly
//! as long as its route: popping or replacing a route tears it down, which
//! cancels any timers it armed.

pub mod home;
pub mod login;
pub mod onboarding;
pub mod premium;
pub mod settings;
pub mod splash;

use pearl_core::{ConnectionAction, Instant, ServerListView};

use crate::{AppConfig, Screen};
use home::HomeState;
use login::LoginState;
use onboarding::OnboardingState;
use premium::PremiumState;
use settings::SettingsState;
use splash::SplashState;

/// A live route: a screen together with its state.
#[derive(Debug, Clone)]
pub enum Route<I: Instant> {
    /// Launch screen with a pending handover timer
    Splash(SplashState<I>),
    /// Welcome screen
    Onboarding(OnboardingState),
    /// Sign-in form
    Login(LoginState),
    /// Connection toggle
    Home(HomeState<I>),
    /// Server browser
    ServerList(ServerListView),
    /// Preferences
    Settings(SettingsState),
    /// Plan picker
    Premium(PremiumState),
}

/// What a route's timers did on a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTick {
    /// Nothing was due
    Idle,
    /// The splash delay elapsed
    SplashElapsed,
    /// The connection state machine advanced
    Connection(Vec<ConnectionAction>),
}

impl<I: Instant> Route<I> {
    /// Fresh state for `screen`, with timers armed relative to `now`.
    pub fn new(screen: Screen, config: &AppConfig, now: I) -> Self {
        match screen {
            Screen::Splash => Self::Splash(SplashState::new(now, config.splash_delay)),
            Screen::Onboarding => Self::Onboarding(OnboardingState::default()),
            Screen::Login => Self::Login(LoginState::default()),
            Screen::Home => Self::Home(HomeState::new(config.connection)),
            Screen::ServerList => Self::ServerList(ServerListView::new()),
            Screen::Settings => Self::Settings(SettingsState::default()),
            Screen::Premium => Self::Premium(PremiumState::default()),
        }
    }

    /// Destination this route renders.
    pub fn screen(&self) -> Screen {
        match self {
            Self::Splash(_) => Screen::Splash,
            Self::Onboarding(_) => Screen::Onboarding,
            Self::Login(_) => Screen::Login,
            Self::Home(_) => Screen::Home,
            Self::ServerList(_) => Screen::ServerList,
            Self::Settings(_) => Screen::Settings,
            Self::Premium(_) => Screen::Premium,
        }
    }

    /// Fire whatever timers are due at `now`.
    pub fn tick(&mut self, now: I) -> RouteTick {
        match self {
            Self::Splash(splash) => {
                if splash.tick(now) {
                    RouteTick::SplashElapsed
                } else {
                    RouteTick::Idle
                }
            },
            Self::Home(home) => {
                let actions = home.tick(now);
                if actions.is_empty() { RouteTick::Idle } else { RouteTick::Connection(actions) }
            },
            _ => RouteTick::Idle,
        }
    }

    /// Whether any timer is still armed.
    pub fn has_pending_timers(&self) -> bool {
        match self {
            Self::Splash(splash) => splash.is_pending(),
            Self::Home(home) => !home.connection().pending_timers().is_empty(),
            _ => false,
        }
    }

    /// Cancel every timer. Called when the route leaves the stack.
    pub fn teardown(&mut self) {
        match self {
            Self::Splash(splash) => splash.teardown(),
            Self::Home(home) => {
                home.teardown();
            },
            _ => {},
        }
    }
}
