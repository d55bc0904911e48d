//! Blog content form rendering

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

/// Draw the blog content form
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let form = &state.blog_form;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Blog title
            Constraint::Length(3),             // Seo keywords
            Constraint::Length(3),             // Content preference
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Help text
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Content ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    draw_field(frame, chunks[0], &form.blog_title, form.active_field_index == 0);
    draw_field(frame, chunks[1], &form.seo_keywords, form.active_field_index == 1);
    draw_field(
        frame,
        chunks[2],
        &form.content_preference,
        form.active_field_index == 2,
    );

    let label = if state.is_submitting {
        "Submitting..."
    } else {
        "Submit"
    };
    render_button(
        frame,
        centered_button_area(chunks[3], 18),
        label,
        form.is_submit_row_active(),
        !state.is_submitting,
    );

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled(platform::SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": submit  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": clear"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[4]);
}
