//! Settings screen

use pearl_app::screens::settings::{SettingsRow, SettingsState, VERSION_LABEL};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
};

use super::ACCENT;

/// Render the settings screen.
pub fn render(frame: &mut Frame, state: &SettingsState, area: Rect) {
    let dim = Style::default().fg(Color::Gray);

    let mut items: Vec<ListItem> = SettingsState::rows()
        .into_iter()
        .map(|row| {
            let line = match row {
                SettingsRow::Upgrade => Line::from(vec![
                    Span::styled("Free Plan  ", Style::default().add_modifier(Modifier::BOLD)),
                    Span::styled("[ Upgrade ]", Style::default().fg(ACCENT)),
                ]),
                SettingsRow::Switch(switch) => {
                    let mark = if state.is_on(switch) { "[x]" } else { "[ ]" };
                    Line::from(vec![
                        Span::raw(format!("{mark} {}  ", switch.title())),
                        Span::styled(switch.subtitle(), dim),
                    ])
                },
                SettingsRow::Info { title, subtitle } => Line::from(vec![
                    Span::raw(format!("    {title}  ")),
                    Span::styled(subtitle, dim),
                    Span::raw("  ›"),
                ]),
                SettingsRow::SignOut => Line::styled("Sign Out", Style::default().fg(Color::Red)),
            };
            ListItem::new(line)
        })
        .collect();
    items.push(ListItem::new(Line::styled(VERSION_LABEL, dim)));

    let list = List::new(items)
        .block(super::titled_block("Settings"))
        .highlight_style(super::row_style(true));
    let mut list_state = ListState::default().with_selected(Some(state.cursor()));
    frame.render_stateful_widget(list, area, &mut list_state);
}
