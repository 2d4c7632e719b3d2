//! Server list
//!
//! Search box plus free and premium sections. Parents show an expand marker;
//! expanded parents are followed by their indented sub-servers.

use pearl_core::{Row, Server, ServerListView};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

const SEARCH_HEIGHT: u16 = 3;
const SEARCH_PLACEHOLDER: &str = "Search For Country Or City";
const PREMIUM_MARKER: &str = "👑";

/// Render the server list.
pub fn render(frame: &mut Frame, view: &ServerListView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(SEARCH_HEIGHT), Constraint::Min(1)])
        .split(area);

    let [search_area, list_area] = chunks.as_ref() else {
        return;
    };

    let search = if view.query().is_empty() {
        Line::styled(SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Line::raw(view.query())
    };
    let search = Paragraph::new(search).block(super::titled_block("Countries"));
    frame.render_widget(search, *search_area);

    let mut selected = None;
    let mut selectable = 0;
    let items: Vec<ListItem> = view
        .rows()
        .into_iter()
        .enumerate()
        .map(|(index, row)| {
            if row.is_selectable() {
                if selectable == view.cursor() {
                    selected = Some(index);
                }
                selectable += 1;
            }
            ListItem::new(row_line(view, row))
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM))
        .highlight_style(super::row_style(true));
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, *list_area, &mut state);
}

fn row_line(view: &ServerListView, row: Row) -> Line<'static> {
    match row {
        Row::Header { group, count } => Line::styled(
            format!("{} ({count})", group.title()),
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        ),
        Row::Server(server) => {
            let marker = match (server.has_sub_servers(), view.is_expanded(server.id)) {
                (false, _) => " ",
                (true, true) => "▾",
                (true, false) => "▸",
            };
            server_line(server, marker, &server.location_label())
        },
        Row::SubServer { server, .. } => {
            let mut line = server_line(server, " ", server.location);
            line.spans.insert(0, Span::raw("    "));
            line
        },
    }
}

fn server_line(server: &Server, marker: &str, location: &str) -> Line<'static> {
    let premium = if server.premium { PREMIUM_MARKER } else { "" };
    Line::from(vec![
        Span::raw(format!("{marker} {} ", server.flag)),
        Span::styled(server.name, Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {location} {premium}"), Style::default().fg(Color::Gray)),
        Span::raw(format!("  {} {}", server.signal().glyph(), server.ping_label())),
    ])
}
