//! Splash screen
//!
//! Logo, name and tagline while the handover timer runs.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
};

use super::ACCENT;

/// Tagline under the app name.
pub const TAGLINE: &str = "Secure Browsing With No Limits";

/// Render the splash screen.
pub fn render(frame: &mut Frame, area: Rect) {
    let top_padding = usize::from(area.height.saturating_sub(6) / 2);
    let mut lines = vec![Line::raw(""); top_padding];
    lines.extend([
        Line::styled("( P )", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Line::raw(""),
        Line::styled("Pearl VPN", Style::default().add_modifier(Modifier::BOLD)),
        Line::raw(TAGLINE),
    ]);
    super::centered(frame, "Pearl VPN", lines, area);
}
