//! Estimate results view
//!
//! Renders the response exactly as received: cost summary, materials
//! breakdown, plan details, design concepts, and design-image URLs. No
//! values are computed here.

use crate::api::EstimateResponse;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the results view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Construction Estimate Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(estimate) = &app.state.estimate else {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No estimate loaded.",
            Style::default().fg(Color::DarkGray),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let paragraph = Paragraph::new(build_lines(estimate))
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.state.scroll_offset as u16, 0));

    frame.render_widget(paragraph, area);
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn entry(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label}: "), Style::default().fg(Color::DarkGray)),
        Span::raw(value),
    ])
}

fn build_lines(estimate: &EstimateResponse) -> Vec<Line<'static>> {
    let cost = &estimate.result.cost;
    let mut lines = vec![
        section("Cost Summary"),
        entry("Covered Area (sqft)", format_number(cost.covered_sqft)),
        entry("Grey Structure Cost", format_currency(cost.grey_cost)),
        entry("Finishing Cost", format_currency(cost.finishing_cost)),
        entry("Total Estimated Cost", format_currency(cost.total_cost)),
        entry("City Factor", cost.city_factor.to_string()),
        Line::from(""),
        section("Materials Breakdown"),
    ];

    for (material, quantity) in &estimate.result.materials {
        let formatted = if material.contains("PKR") {
            format_currency(*quantity)
        } else {
            format_number(*quantity)
        };
        lines.push(entry(material, formatted));
    }

    lines.push(Line::from(""));
    lines.push(section("Plan Details (Approx. Area in sqft)"));
    for (room, value) in &estimate.result.plan {
        let display = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        lines.push(entry(room, display));
    }

    lines.push(Line::from(""));
    lines.push(section("Design Concepts"));
    for design in &estimate.result.designs {
        lines.push(Line::from(Span::styled(
            format!("  {}", design.name),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(entry("  Summary", design.summary.clone()));
        lines.push(entry("  Best For", design.best_for.clone()));
        lines.push(entry("  Note", design.note.clone()));
        lines.push(Line::from(""));
    }

    let images = estimate.design_images();
    if !images.is_empty() {
        lines.push(section("Design Visualizations"));
        for image in images {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}: ", image.caption),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(image.url, Style::default().fg(Color::Blue)),
            ]));
        }
    }

    lines
}

/// Format a quantity with thousands separators, rounded to whole units
fn format_number(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format a PKR amount, rounded to whole rupees
fn format_currency(value: f64) -> String {
    format!("PKR {}", format_number(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_groups_thousands() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(45000.0), "45,000");
        assert_eq!(format_number(4300000.0), "4,300,000");
    }

    #[test]
    fn test_format_number_rounds_fractions() {
        assert_eq!(format_number(1234.6), "1,235");
        assert_eq!(format_number(1234.4), "1,234");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(2500000.0), "PKR 2,500,000");
        assert_eq!(format_currency(0.0), "PKR 0");
    }
}
