//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the terminal into the content area and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar: a transient notification when present, key hints
/// otherwise
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = if app.state.submitting {
        Line::from(Span::styled(
            " Submitting estimate request... ",
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(message) = &app.state.status_message {
        Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        match app.state.current_view {
            View::Form => Line::from(vec![
                Span::styled(" Tab", Style::default().fg(Color::Cyan)),
                Span::raw(": next field  "),
                Span::styled("←/→", Style::default().fg(Color::Cyan)),
                Span::raw(": change option  "),
                Span::styled("Ctrl+S", Style::default().fg(Color::Cyan)),
                Span::raw(": submit  "),
                Span::styled("Esc", Style::default().fg(Color::Cyan)),
                Span::raw(": quit"),
            ]),
            View::Results => Line::from(vec![
                Span::styled(" ↑/↓", Style::default().fg(Color::Cyan)),
                Span::raw(": scroll  "),
                Span::styled("Esc", Style::default().fg(Color::Cyan)),
                Span::raw(": back to form  "),
                Span::styled("q", Style::default().fg(Color::Cyan)),
                Span::raw(": quit"),
            ]),
        }
    };

    frame.render_widget(
        Paragraph::new(line).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
