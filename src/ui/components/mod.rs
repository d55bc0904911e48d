//! Reusable UI components

mod button;

pub use button::{centered_button_area, render_button, render_sidebar_button, BUTTON_HEIGHT};
