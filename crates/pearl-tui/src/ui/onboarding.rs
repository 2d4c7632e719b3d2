//! Onboarding screen

use pearl_app::screens::onboarding::{OnboardingButton, OnboardingState};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
};

/// Render the onboarding screen.
pub fn render(frame: &mut Frame, state: &OnboardingState, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::raw(""),
        Line::styled("Secure Browsing", bold),
        Line::styled("With No Limits", bold),
        Line::raw(""),
        Line::raw("With Our Encrypted VPN Tunnel, Your"),
        Line::raw("Data Stay Safe, Even Over Public Or"),
        Line::raw("Untrusted Internet Connections."),
        Line::raw(""),
        Line::raw("● ○ ○"),
        Line::raw(""),
    ];
    for button in [OnboardingButton::CreateAccount, OnboardingButton::SignIn] {
        lines.push(super::button(button.label(), state.focus() == button));
    }
    super::centered(frame, "Pearl VPN", lines, area);
}
