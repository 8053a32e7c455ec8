// UI module for rendering the TUI.
// Contains widgets for the tab bar, hero lists, console, and help overlay.

mod list;
mod tabs;

use ratatui::{prelude::*, widgets::*};

use crate::app::{App, Tab};
use crate::query::QuerySnapshot;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tabs(frame, app, chunks[0]);
    draw_content(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    // Help overlay (rendered last, on top of everything)
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draw the main content area based on the active tab.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    match app.active_tab {
        Tab::Home => draw_home_tab(frame, area),
        Tab::SuperHeroes => list::render_heroes_list(frame, &mut app.heroes.list, area),
        Tab::RqSuperHeroes => draw_rq_heroes_tab(frame, app, area),
        Tab::Console => list::render_console(frame, &mut app.console, area),
    }
}

/// Draw the home view.
fn draw_home_tab(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Home",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Super Heroes     fetch managed by hand, one request per refresh"),
        Line::from("RQ Super Heroes  fetch through the query cache, deduplicated"),
        Line::from(""),
        Line::from(Span::styled(
            "Switch views with Tab, refresh with r",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Home "));
    frame.render_widget(text, area);
}

/// Draw the query-backed heroes view. Loading wins over warm data so a
/// refetch never shows stale entries; an error wins over data.
fn draw_rq_heroes_tab(frame: &mut Frame, app: &mut App, area: Rect) {
    let snapshot = app.rq_heroes.observe(&app.queries);

    if snapshot.is_loading() || snapshot.is_fetching {
        list::render_loading(frame, area, "Loading heroes");
    } else if snapshot.is_error() {
        list::render_error(frame, area, snapshot.error.as_deref().unwrap_or("unknown"));
    } else {
        let names = snapshot.data.unwrap_or_default();
        list::render_names_list(frame, &names, &mut app.rq_heroes.list_state, area);
    }
}

/// Draw the status bar with keybinding hints and roster cache freshness.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut hints = vec![
        Span::raw(" ↑↓ "),
        Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
        Span::raw("  Tab "),
        Span::styled("Switch", Style::default().fg(Color::DarkGray)),
        Span::raw("  r "),
        Span::styled("Refresh", Style::default().fg(Color::DarkGray)),
        Span::raw("  ? "),
        Span::styled("Help", Style::default().fg(Color::DarkGray)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ];

    let snapshot: QuerySnapshot<serde_json::Value> =
        app.queries.snapshot(crate::state::HEROES_QUERY_KEY);
    if snapshot.is_fetching {
        hints.push(Span::styled(
            "  roster: fetching…",
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(updated_at) = snapshot.updated_at {
        hints.push(Span::styled(
            format!("  roster: updated {}", list::format_relative_time(&updated_at)),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}

/// Draw the help overlay.
fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();

    // Centered popup
    let popup_width = 50;
    let popup_height = 13;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ↑/↓ or j/k  ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate list"),
        ]),
        Line::from(vec![
            Span::styled("  Tab         ", Style::default().fg(Color::Cyan)),
            Span::raw("Switch views"),
        ]),
        Line::from(vec![
            Span::styled("  r           ", Style::default().fg(Color::Cyan)),
            Span::raw("Refresh / refetch heroes"),
        ]),
        Line::from(vec![
            Span::styled("  ?           ", Style::default().fg(Color::Cyan)),
            Span::raw("Show/hide this help"),
        ]),
        Line::from(vec![
            Span::styled("  q           ", Style::default().fg(Color::Cyan)),
            Span::raw("Quit"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" to close", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let help_paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);
}
