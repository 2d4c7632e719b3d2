//! Login screen

use pearl_app::screens::login::{LoginField, LoginState};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::ACCENT;

/// Render the login form.
pub fn render(frame: &mut Frame, state: &LoginState, area: Rect) {
    let focus = state.focus();
    let masked = state.masked_password();

    let lines = vec![
        Line::raw(""),
        Line::styled("Hello Again!", Style::default().add_modifier(Modifier::BOLD)),
        Line::styled("Welcome Back You've Been Missed!", Style::default().fg(Color::Gray)),
        Line::raw(""),
        field("Username", state.username(), focus == LoginField::Username),
        field("Password", &masked, focus == LoginField::Password),
        Line::raw(""),
        super::button("Sign In", focus == LoginField::SignIn),
        Line::styled("Or, Sign In With", Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        super::button("Sign In With Google", focus == LoginField::Google),
    ];

    let paragraph = Paragraph::new(lines).block(super::titled_block("Sign In"));
    frame.render_widget(paragraph, area);
}

fn field<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let marker = if focused { "> " } else { "  " };
    let value_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::raw(marker),
        Span::styled(format!("{label:<10}"), Style::default().fg(Color::Gray)),
        Span::styled(if value.is_empty() { " " } else { value }, value_style),
    ])
}
