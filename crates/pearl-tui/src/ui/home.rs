//! Home screen
//!
//! Status, connection time, selected server, traffic and the connect button.

use pearl_app::screens::home::{HomeState, PUBLIC_ADDRESS};
use pearl_core::{ConnectionPhase, Instant};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Status colour for a phase.
pub fn phase_color(phase: ConnectionPhase) -> Color {
    match phase {
        ConnectionPhase::Disconnected => Color::Red,
        ConnectionPhase::Connecting => Color::Yellow,
        ConnectionPhase::Connected => Color::Green,
    }
}

/// Render the Home screen.
pub fn render<I: Instant>(frame: &mut Frame, state: &HomeState<I>, area: Rect) {
    let phase = state.phase();
    let selection = state.selection();
    let dim = Style::default().fg(Color::Gray);

    let mut lines = vec![
        Line::raw(""),
        Line::styled("Status", dim),
        Line::styled(
            phase.status_label(),
            Style::default().fg(phase_color(phase)).add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
    ];

    if let Some(time) = state.connection_time() {
        lines.push(Line::styled("Connecting Time", dim));
        lines.push(Line::styled(time, Style::default().add_modifier(Modifier::BOLD)));
        lines.push(Line::raw(""));
    }

    lines.push(Line::from(vec![
        Span::raw(format!("{} ", selection.flag())),
        Span::styled(selection.name(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {}  ", selection.location()), dim),
        Span::raw(selection.ping_label()),
    ]));

    if let Some(traffic) = state.traffic() {
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("Download ", dim),
            Span::raw(traffic.download),
            Span::styled("   Upload ", dim),
            Span::raw(traffic.upload),
        ]));
        lines.push(Line::from(vec![
            Span::raw(selection.location()),
            Span::styled(format!("  {PUBLIC_ADDRESS}"), dim),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(super::button(phase.button_label(), state.connection().is_toggle_enabled()));

    super::centered(frame, "Pearl Vpn", lines, area);
}
