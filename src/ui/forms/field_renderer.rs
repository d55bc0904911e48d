//! Field rendering utilities for forms

use crate::state::{FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = match &field.value {
        FieldValue::Text(value) => {
            let cursor = if is_active { "▌" } else { "" };
            if value.is_empty() {
                Line::from(vec![
                    Span::styled(&field.placeholder, Style::default().fg(Color::DarkGray)),
                    Span::styled(cursor, Style::default().fg(Color::Cyan)),
                ])
            } else {
                Line::from(vec![
                    Span::styled(value, style),
                    Span::styled(cursor, Style::default().fg(Color::Cyan)),
                ])
            }
        }
        FieldValue::Select { options, selected } => {
            let label = selected.map(|i| options[i].label);
            let mut spans = Vec::new();
            if is_active {
                spans.push(Span::styled("◂ ", Style::default().fg(Color::Cyan)));
            }
            match label {
                Some(label) => spans.push(Span::styled(label, style)),
                None => spans.push(Span::styled(
                    &field.placeholder,
                    Style::default().fg(Color::DarkGray),
                )),
            }
            if is_active {
                spans.push(Span::styled(" ▸", Style::default().fg(Color::Cyan)));
            }
            Line::from(spans)
        }
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(content).wrap(Wrap { trim: false }).block(block),
        area,
    );
}
