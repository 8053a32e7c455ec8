// List rendering for hero names and console messages.
// Provides styled list views with loading, error, and empty states.

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::api::Hero;
use crate::state::{ConsoleLevel, ConsoleState, LoadingState, SelectableList};

/// Format a timestamp as relative time (e.g., "2m ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(*dt);

    if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, area);
}

/// Render an error message.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let text = Paragraph::new(format!("❌ {}", error))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

/// Render the traditional heroes list from its hand-managed state.
pub fn render_heroes_list(frame: &mut Frame, list: &mut SelectableList<Hero>, area: Rect) {
    match &list.data {
        LoadingState::Idle => render_empty(frame, area, "Press r to fetch heroes"),
        LoadingState::Loading => render_loading(frame, area, "Loading heroes"),
        LoadingState::Error(e) => render_error(frame, area, e),
        LoadingState::Loaded(heroes) => {
            if heroes.is_empty() {
                render_empty(frame, area, "No heroes in the roster");
            } else {
                let items: Vec<ListItem> = heroes
                    .iter()
                    .map(|hero| ListItem::new(format!("🦸 {}", hero.name)))
                    .collect();

                let list_widget = List::new(items)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .title(" Super Heroes "),
                    )
                    .highlight_style(
                        Style::default()
                            .bg(Color::DarkGray)
                            .add_modifier(Modifier::BOLD),
                    )
                    .highlight_symbol("> ");

                frame.render_stateful_widget(list_widget, area, &mut list.list_state);
            }
        }
    }
}

/// Render the query-backed name list.
pub fn render_names_list(
    frame: &mut Frame,
    names: &[String],
    list_state: &mut ListState,
    area: Rect,
) {
    if names.is_empty() {
        render_empty(frame, area, "No heroes in the roster");
        return;
    }

    let items: Vec<ListItem> = names
        .iter()
        .map(|name| ListItem::new(format!("🦸 {}", name)))
        .collect();

    let list_widget = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" RQ Super Heroes "),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, list_state);
}

/// Render the console activity log, newest messages first.
pub fn render_console(frame: &mut Frame, console: &mut ConsoleState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Console ");

    if console.messages.is_empty() {
        let text = Paragraph::new("No messages")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(text, area);
    } else {
        let items: Vec<ListItem> = console
            .messages
            .iter()
            .rev()
            .map(|msg| {
                let (icon, color) = match msg.level {
                    ConsoleLevel::Error => ("❌", Color::Red),
                    ConsoleLevel::Warn => ("⚠️", Color::Yellow),
                    ConsoleLevel::Info => ("ℹ️", Color::Cyan),
                };

                let time = format_relative_time(&msg.timestamp);

                ListItem::new(Line::from(vec![
                    Span::raw(format!("{} ", icon)),
                    Span::styled(time, Style::default().fg(Color::DarkGray)),
                    Span::raw(" "),
                    Span::styled(msg.message.clone(), Style::default().fg(color)),
                ]))
            })
            .collect();

        let list_widget = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        frame.render_stateful_widget(list_widget, area, &mut console.list_state);
    }
}
