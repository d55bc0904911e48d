//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::state::{AppState, Notification, View};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState, notification: Option<&Notification>) {
    let area = frame.area();

    let (sidebar_area, main_area) = layout::create_layout(area);

    layout::draw_sidebar(frame, sidebar_area, state);

    match state.current_view {
        View::BlogContent => forms::draw_blog_content(frame, main_area, state),
        View::VoiceConfig => forms::draw_voice_config(frame, main_area, state),
    }

    layout::draw_status_bar(frame, state, notification);
}
