//! Status bar
//!
//! Shows the transient status message, or key hints for the visible screen.

use pearl_app::{App, Screen};
use pearl_core::Instant;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Key hints for a screen.
pub fn hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Splash => "esc quit",
        Screen::Onboarding => "tab switch · enter continue · esc quit",
        Screen::Login => "tab next field · enter sign in · esc back",
        Screen::Home => "enter toggle · l servers · s settings · p premium · q quit",
        Screen::ServerList => "type to search · ↑↓ move · enter select · tab settings · esc back",
        Screen::Settings => "↑↓ move · enter toggle · h home · l servers · esc back",
        Screen::Premium => "↑↓ plan · enter upgrade · esc back",
    }
}

/// Render the status bar.
pub fn render<I: Instant>(frame: &mut Frame, app: &App<I>, area: Rect) {
    let text = match app.status_message() {
        Some(message) => Span::styled(message.to_string(), Style::default().fg(Color::Yellow)),
        None => Span::raw(hints(app.screen())),
    };

    let status_line = Line::from(vec![Span::raw(" "), text]);
    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
