//! UI rendering
//!
//! Rendering functions that convert App state into terminal output using
//! ratatui widgets. All functions are pure (no I/O), taking state and
//! drawing into the frame.

mod home;
mod login;
mod onboarding;
mod premium;
mod server_list;
mod settings;
mod splash;
mod status;

use pearl_app::{App, Route};
use pearl_core::Instant;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

pub use home::phase_color;
pub use status::hints;

/// Brand accent.
const ACCENT: Color = Color::Rgb(0x6c, 0x5c, 0xe7);

/// Render the entire UI.
pub fn render<I: Instant>(frame: &mut Frame, app: &App<I>) {
    const MAIN_AREA_MIN_HEIGHT: u16 = 3;
    const STATUS_HEIGHT: u16 = 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(MAIN_AREA_MIN_HEIGHT), Constraint::Length(STATUS_HEIGHT)])
        .split(frame.area());

    let [main_area, status_area] = chunks.as_ref() else {
        return;
    };

    match app.current() {
        Route::Splash(_) => splash::render(frame, *main_area),
        Route::Onboarding(state) => onboarding::render(frame, state, *main_area),
        Route::Login(state) => login::render(frame, state, *main_area),
        Route::Home(state) => home::render(frame, state, *main_area),
        Route::ServerList(view) => server_list::render(frame, view, *main_area),
        Route::Settings(state) => settings::render(frame, state, *main_area),
        Route::Premium(state) => premium::render(frame, state, *main_area),
    }
    status::render(frame, app, *status_area);
}

/// Bordered block with a centred title.
fn titled_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(Line::from(format!(" {title} ")).alignment(Alignment::Center))
}

/// Button line, highlighted when focused.
fn button(label: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(Color::White).bg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(ACCENT)
    };
    Line::styled(format!("[ {label} ]"), style).alignment(Alignment::Center)
}

/// Style for a list row under or away from the cursor.
fn row_style(selected: bool) -> Style {
    if selected {
        Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

/// Render centred lines inside a titled block.
fn centered(frame: &mut Frame, title: &str, lines: Vec<Line<'_>>, area: Rect) {
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(titled_block(title));
    frame.render_widget(paragraph, area);
}
