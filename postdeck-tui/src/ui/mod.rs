//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! The posts collection and operation status are rendered from a store
//! snapshot taken by the main loop; the text areas are stateful widgets
//! owned by the main loop and drawn here.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};
use tui_textarea::TextArea;

use libpostdeck::{PostsState, Status};

use crate::app::{AppState, Screen};

/// Render the application UI
pub fn render(
    frame: &mut Frame,
    state: &AppState,
    posts_state: &PostsState,
    title_area: &TextArea,
    body_area: &TextArea,
) {
    let area = frame.area();

    match state.current_screen {
        Screen::Form => render_form(frame, area, state, posts_state, title_area, body_area),
        Screen::Browser => render_browser(frame, area, state, posts_state),
    }

    if state.help_visible {
        render_help_overlay(frame, area);
    }
}

/// Render the compose form: title input, body input, status bar
fn render_form(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    posts_state: &PostsState,
    title_area: &TextArea,
    body_area: &TextArea,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title input
            Constraint::Min(5),    // Body input
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    frame.render_widget(title_area, chunks[0]);
    frame.render_widget(body_area, chunks[1]);

    render_status_bar(
        frame,
        chunks[2],
        state,
        posts_state,
        "Ctrl+S: Submit | Tab: Switch field | F2: Posts | F1: Help",
    );
}

/// Render the posts browser: list of fetched posts plus status bar
fn render_browser(frame: &mut Frame, area: Rect, state: &AppState, posts_state: &PostsState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Posts list
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    let items: Vec<ListItem> = posts_state
        .posts
        .iter()
        .map(|post| {
            let id = post
                .id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string());
            let line = Line::from(vec![
                Span::styled(format!("{:>4} ", id), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    post.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    post.body.lines().next().unwrap_or("").to_string(),
                    Style::default().fg(Color::Gray),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().title(" Posts ").borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !posts_state.posts.is_empty() {
        list_state.select(Some(state.browser.selected));
    }

    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    render_status_bar(
        frame,
        chunks[1],
        state,
        posts_state,
        "r: Refresh | d: Delete | j/k: Move | F3: Compose | F1: Help | q: Quit",
    );
}

/// Render the status bar: operation status, optional message, key hints
fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    posts_state: &PostsState,
    hints: &str,
) {
    let status_style = if !state.config.colors_enabled {
        Style::default()
    } else {
        match posts_state.status {
            Status::Initial => Style::default().fg(Color::DarkGray),
            Status::Loading => Style::default().fg(Color::Yellow),
            Status::UpToDate => Style::default().fg(Color::Green),
            Status::Error => Style::default().fg(Color::Red),
        }
    };

    let mut spans = vec![
        Span::styled(posts_state.status.to_string(), status_style),
        Span::raw(" | "),
    ];

    if let Some(ref message) = state.status.message {
        spans.push(Span::raw(message.clone()));
        spans.push(Span::raw(" | "));
    }

    spans.push(Span::styled(
        hints.to_string(),
        Style::default().fg(Color::DarkGray),
    ));

    let bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Left);

    frame.render_widget(bar, area);
}

/// Render the help overlay centered over the current screen
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let overlay = centered_rect(60, 60, area);

    let lines = vec![
        Line::from(Span::styled(
            "Keybindings",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("F1          Toggle this help"),
        Line::from("F2          Posts browser"),
        Line::from("F3          Compose form"),
        Line::from("Tab         Switch form field"),
        Line::from("Ctrl+S      Submit the form"),
        Line::from("j/k, arrows Move selection"),
        Line::from("r           Refresh the posts list"),
        Line::from("d           Delete the selected post"),
        Line::from("q / Ctrl+C  Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Esc to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help = Paragraph::new(lines)
        .block(Block::default().title(" Help ").borders(Borders::ALL))
        .alignment(Alignment::Left);

    frame.render_widget(Clear, overlay);
    frame.render_widget(help, overlay);
}

/// Compute a centered rect occupying the given percentages of `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
