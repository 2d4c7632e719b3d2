//! Stack navigation between screens.
//!
//! The stack is never empty: the visible route is held separately from the
//! routes beneath it, so there is always something to render.

use std::{fmt, iter, mem};

use pearl_core::Instant;

use crate::{AppConfig, Route, screens::home::HomeState};

/// Named destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Launch screen
    Splash,
    /// Welcome screen
    Onboarding,
    /// Sign-in form
    Login,
    /// Connection toggle
    Home,
    /// Server browser
    ServerList,
    /// Preferences
    Settings,
    /// Plan picker
    Premium,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Navigation stack of live routes.
#[derive(Debug, Clone)]
pub struct Navigator<I: Instant> {
    config: AppConfig,
    /// Routes below the visible one, bottom first.
    below: Vec<Route<I>>,
    /// Visible route.
    top: Route<I>,
}

impl<I: Instant> Navigator<I> {
    /// Stack holding only the splash route.
    pub fn new(config: AppConfig, now: I) -> Self {
        let top = Route::new(Screen::Splash, &config, now);
        Self { config, below: Vec::new(), top }
    }

    /// Visible route.
    pub fn current(&self) -> &Route<I> {
        &self.top
    }

    /// Visible route, mutably.
    pub fn current_mut(&mut self) -> &mut Route<I> {
        &mut self.top
    }

    /// Visible destination.
    pub fn screen(&self) -> Screen {
        self.top.screen()
    }

    /// Destinations on the stack, bottom first.
    pub fn screens(&self) -> Vec<Screen> {
        self.routes().map(Route::screen).collect()
    }

    /// Number of routes on the stack. Always at least one.
    pub fn depth(&self) -> usize {
        self.below.len() + 1
    }

    /// Every route, bottom first.
    pub fn routes(&self) -> impl Iterator<Item = &Route<I>> {
        self.below.iter().chain(iter::once(&self.top))
    }

    /// Every route, bottom first, mutably.
    pub fn routes_mut(&mut self) -> impl Iterator<Item = &mut Route<I>> {
        self.below.iter_mut().chain(iter::once(&mut self.top))
    }

    /// Home state, if a Home route is anywhere on the stack.
    pub fn home(&self) -> Option<&HomeState<I>> {
        self.routes().find_map(|route| match route {
            Route::Home(home) => Some(home),
            _ => None,
        })
    }

    /// Home state, mutably.
    pub fn home_mut(&mut self) -> Option<&mut HomeState<I>> {
        self.routes_mut().find_map(|route| match route {
            Route::Home(home) => Some(home),
            _ => None,
        })
    }

    /// Show `screen`.
    ///
    /// Pops back to `screen` if it is already on the stack, otherwise pushes a
    /// fresh route for it. Returns `false` if `screen` was already visible.
    pub fn navigate(&mut self, screen: Screen, now: I) -> bool {
        if self.top.screen() == screen {
            return false;
        }

        if self.below.iter().any(|route| route.screen() == screen) {
            while self.top.screen() != screen && self.go_back() {}
        } else {
            let route = Route::new(screen, &self.config, now);
            let previous = mem::replace(&mut self.top, route);
            self.below.push(previous);
        }

        tracing::debug!(%screen, depth = self.depth(), "navigate");
        true
    }

    /// Swap the visible route for a fresh `screen` route.
    pub fn replace(&mut self, screen: Screen, now: I) {
        let route = Route::new(screen, &self.config, now);
        let mut old = mem::replace(&mut self.top, route);
        old.teardown();
        tracing::debug!(from = %old.screen(), to = %screen, "replace");
    }

    /// Pop the visible route. Returns `false` at the root.
    pub fn go_back(&mut self) -> bool {
        let Some(previous) = self.below.pop() else {
            return false;
        };

        let mut old = mem::replace(&mut self.top, previous);
        old.teardown();
        tracing::debug!(from = %old.screen(), to = %self.top.screen(), "back");
        true
    }

    /// Tear down every route in place. Used on shutdown.
    pub fn teardown_all(&mut self) {
        for route in self.routes_mut() {
            route.teardown();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant as StdInstant;

    use super::*;

    fn navigator() -> (Navigator<StdInstant>, StdInstant) {
        let now = StdInstant::now();
        (Navigator::new(AppConfig::default(), now), now)
    }

    #[test]
    fn starts_on_splash() {
        let (nav, _) = navigator();
        assert_eq!(nav.screens(), vec![Screen::Splash]);
    }

    #[test]
    fn navigate_pushes_then_pops_back() {
        let (mut nav, now) = navigator();
        nav.replace(Screen::Home, now);
        assert!(nav.navigate(Screen::ServerList, now));
        assert!(nav.navigate(Screen::Settings, now));
        assert_eq!(nav.screens(), vec![Screen::Home, Screen::ServerList, Screen::Settings]);

        assert!(nav.navigate(Screen::Home, now));
        assert_eq!(nav.screens(), vec![Screen::Home]);
        assert!(!nav.navigate(Screen::Home, now));
    }

    #[test]
    fn go_back_stops_at_root() {
        let (mut nav, now) = navigator();
        assert!(!nav.go_back());
        nav.navigate(Screen::Login, now);
        assert!(nav.go_back());
        assert!(!nav.go_back());
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn replace_tears_down_old_route() {
        let (mut nav, now) = navigator();
        assert!(nav.current().has_pending_timers());
        nav.replace(Screen::Onboarding, now);
        assert_eq!(nav.screens(), vec![Screen::Onboarding]);
        assert!(nav.routes().all(|r| !r.has_pending_timers()));
    }

    #[test]
    fn home_found_below_top() {
        let (mut nav, now) = navigator();
        nav.replace(Screen::Home, now);
        nav.navigate(Screen::ServerList, now);
        assert!(nav.home().is_some());
        assert_eq!(nav.screen(), Screen::ServerList);
    }
}
