//! Voice configuration form rendering

use super::field_renderer::draw_field;
use crate::platform;
use crate::state::AppState;
use crate::ui::components::{centered_button_area, render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the voice configuration form
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let form = &state.voice_form;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Subtitle
            Constraint::Length(3),             // Voice type
            Constraint::Length(3),             // Brand voice style
            Constraint::Length(3),             // Content structure
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Help text
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Configure Your Content Voice ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let subtitle =
        Paragraph::new("Customize your content's voice, brand style, and structure")
            .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(subtitle, chunks[0]);

    draw_field(frame, chunks[1], &form.voice_type, form.active_field_index == 0);
    draw_field(frame, chunks[2], &form.brand_voice, form.active_field_index == 1);
    draw_field(
        frame,
        chunks[3],
        &form.content_structure,
        form.active_field_index == 2,
    );

    let label = if state.is_submitting {
        "Submitting..."
    } else {
        "Submit Configuration"
    };
    render_button(
        frame,
        centered_button_area(chunks[4], 26),
        label,
        form.is_submit_row_active(),
        !state.is_submitting,
    );

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("j/k", Style::default().fg(Color::Cyan)),
        Span::raw(": option  "),
        Span::styled(platform::SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": submit  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": clear"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[5]);
}
