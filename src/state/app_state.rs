//! Application state: views and the records they own

use crate::state::{BlogContentForm, VoiceConfigForm};

/// Available views, one per form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    BlogContent,
    VoiceConfig,
}

impl View {
    /// The other form view
    pub fn other(&self) -> Self {
        match self {
            Self::BlogContent => Self::VoiceConfig,
            Self::VoiceConfig => Self::BlogContent,
        }
    }

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            Self::BlogContent => "Content",
            Self::VoiceConfig => "Voice",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,

    /// Soft guard set while a submission is in flight; disables the submit
    /// control and gates re-entry at the submit handlers
    pub is_submitting: bool,

    // Form state; each view owns its record exclusively
    pub blog_form: BlogContentForm,
    pub voice_form: VoiceConfigForm,
}

impl AppState {
    /// Destroy the record owned by a view (successful submit or navigation away)
    pub fn reset_form(&mut self, view: View) {
        match view {
            View::BlogContent => self.blog_form.reset(),
            View::VoiceConfig => self.voice_form.reset(),
        }
    }
}
