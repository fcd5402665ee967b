//! Estimate form rendering

use super::field_renderer::{draw_field, draw_select_field};
use crate::app::App;
use crate::state::{EstimateForm, FieldKind, FIELD_SUBMIT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FIELDS_PER_ROW: usize = 3;
const FIELD_ROW_HEIGHT: u16 = 3;

/// Draw the construction estimate form: a grid of fields plus the submit row
pub fn draw_estimate_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Construction Estimate Planner ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // 15 input fields in rows of three, then the submit row.
    let row_count = FIELD_SUBMIT.div_ceil(FIELDS_PER_ROW);
    let mut constraints: Vec<Constraint> =
        vec![Constraint::Length(FIELD_ROW_HEIGHT); row_count];
    constraints.push(Constraint::Length(FIELD_ROW_HEIGHT)); // submit row
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for row in 0..row_count {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(rows[row]);

        for col in 0..FIELDS_PER_ROW {
            let index = row * FIELDS_PER_ROW + col;
            if index < FIELD_SUBMIT {
                draw_form_field(frame, columns[col], app, index);
            }
        }
    }

    draw_submit_row(frame, rows[row_count], app);
}

fn draw_form_field(frame: &mut Frame, area: Rect, app: &App, index: usize) {
    let label = EstimateForm::field_label(index);
    let value = app.form.field_display(index);
    let is_active = app.form.active_field_index == index;
    let has_error = app
        .state
        .field_error(EstimateForm::field_name(index))
        .is_some();

    match EstimateForm::field_kind(index) {
        FieldKind::Select | FieldKind::Count => {
            draw_select_field(frame, area, label, &value, is_active, has_error)
        }
        _ => draw_field(frame, area, label, &value, is_active, has_error),
    }
}

fn draw_submit_row(frame: &mut Frame, area: Rect, app: &App) {
    let is_active = app.form.active_field_index == FIELD_SUBMIT;

    let (text, color) = if app.state.submitting {
        ("  Submitting...  ", Color::Yellow)
    } else {
        ("  Get Estimate  ", Color::Green)
    };

    let style = if is_active {
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };

    let button = Paragraph::new(Line::from(Span::styled(text, style)))
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if is_active {
                    Style::default().fg(color)
                } else {
                    Style::default().fg(Color::DarkGray)
                }),
        );

    frame.render_widget(button, area);
}
