//! Premium screen
//!
//! Feature list, plan cards and the upgrade button.

use pearl_app::screens::premium::{FEATURES, PLANS, PremiumState};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::ACCENT;

/// Render the premium screen.
pub fn render(frame: &mut Frame, state: &PremiumState, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(Color::Gray);

    let mut lines = vec![
        Line::styled("👑 Upgrade to Premium", bold),
        Line::styled(
            "Unlock all features and enjoy unlimited access to premium servers worldwide",
            dim,
        ),
        Line::raw(""),
        Line::styled("Premium Features", bold),
    ];
    lines.extend(FEATURES.iter().map(|feature| {
        Line::from(vec![Span::styled("✓ ", Style::default().fg(Color::Green)), Span::raw(*feature)])
    }));

    lines.push(Line::raw(""));
    lines.push(Line::styled("Choose Your Plan", bold));
    for plan in &PLANS {
        let selected = state.selected().id == plan.id;
        let radio = if selected { "(•)" } else { "( )" };
        let mut spans = vec![
            Span::styled(format!("{radio} {:<9}", plan.title), if selected { bold } else { dim }),
            Span::raw(format!("{} {}", plan.price, plan.period)),
        ];
        if let Some(badge) = plan.badge {
            spans.push(Span::styled(format!("  {badge}"), Style::default().fg(Color::Green)));
        }
        if plan.popular {
            spans.push(Span::styled("  Most Popular", Style::default().fg(ACCENT)));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::raw(""));
    lines.push(super::button(&state.upgrade_label(), true));

    let paragraph = Paragraph::new(lines).block(super::titled_block("Premium"));
    frame.render_widget(paragraph, area);
}
