//! Application state and core logic

use crate::platform;
use crate::state::{AppState, Form, Notification, View};
use crate::webhook::{WebhookClient, WebhookDispatch};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App<C: WebhookDispatch = WebhookClient> {
    /// Current application state
    pub state: AppState,
    /// Client used to deliver submissions
    webhook: C,
    /// Whether the app should quit
    quit: bool,
    /// Transient notification shown in the status bar
    pub notification: Option<Notification>,
}

impl App {
    /// Create a new App instance against the compiled-in endpoints
    pub fn new() -> Self {
        Self::with_client(WebhookClient::new())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: WebhookDispatch> App<C> {
    /// Create an App with an explicit dispatcher (tests inject a mock here)
    pub fn with_client(webhook: C) -> Self {
        Self {
            state: AppState::default(),
            webhook,
            quit: false,
            notification: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Clear the notification once its display window has elapsed
    pub fn update_notification(&mut self) {
        if self.notification.as_ref().is_some_and(Notification::is_expired) {
            self.notification = None;
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global quit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Any key press dismisses the current notification
        self.notification = None;

        // Switch to the other form; leaving a view destroys its record
        if key.code == KeyCode::Char('n') && key.modifiers.contains(KeyModifiers::CONTROL) {
            let leaving = self.state.current_view;
            self.state.reset_form(leaving);
            self.state.current_view = leaving.other();
            return Ok(());
        }

        match self.state.current_view {
            View::BlogContent => self.handle_blog_content_key(key).await,
            View::VoiceConfig => self.handle_voice_config_key(key).await,
        }
        Ok(())
    }

    /// Handle keys in the blog content view
    async fn handle_blog_content_key(&mut self, key: KeyEvent) {
        let on_submit_row = self.state.blog_form.is_submit_row_active();

        match key.code {
            KeyCode::Tab => self.state.blog_form.next_field(),
            KeyCode::BackTab => self.state.blog_form.prev_field(),
            KeyCode::Char('s') if key.modifiers.contains(platform::SUBMIT_MODIFIER) => {
                self.submit_blog_content().await;
            }
            KeyCode::Enter if on_submit_row => self.submit_blog_content().await,
            KeyCode::Enter => self.state.blog_form.next_field(),
            KeyCode::Up if self.state.blog_form.is_active_field_select() => {
                self.state.blog_form.get_active_field_mut().select_prev();
            }
            KeyCode::Down if self.state.blog_form.is_active_field_select() => {
                self.state.blog_form.get_active_field_mut().select_next();
            }
            KeyCode::Esc => self.state.blog_form.reset(),
            KeyCode::Char(c) if !on_submit_row => {
                let ch = if key.modifiers.contains(KeyModifiers::SHIFT) {
                    c.to_ascii_uppercase()
                } else {
                    c
                };
                self.state.blog_form.get_active_field_mut().push_char(ch);
            }
            KeyCode::Backspace if !on_submit_row => {
                self.state.blog_form.get_active_field_mut().pop_char();
            }
            _ => {}
        }
    }

    /// Handle keys in the voice configuration view
    async fn handle_voice_config_key(&mut self, key: KeyEvent) {
        let on_submit_row = self.state.voice_form.is_submit_row_active();

        match key.code {
            KeyCode::Tab => self.state.voice_form.next_field(),
            KeyCode::BackTab => self.state.voice_form.prev_field(),
            KeyCode::Char('s') if key.modifiers.contains(platform::SUBMIT_MODIFIER) => {
                self.submit_voice_config().await;
            }
            KeyCode::Enter if on_submit_row => self.submit_voice_config().await,
            KeyCode::Enter => self.state.voice_form.next_field(),
            KeyCode::Up | KeyCode::Char('k') if !on_submit_row => {
                self.state.voice_form.get_active_field_mut().select_prev();
            }
            KeyCode::Down | KeyCode::Char('j') if !on_submit_row => {
                self.state.voice_form.get_active_field_mut().select_next();
            }
            KeyCode::Esc => self.state.voice_form.reset(),
            _ => {}
        }
    }

    /// Submit the blog content form: validate presence, dispatch, notify
    async fn submit_blog_content(&mut self) {
        if self.state.is_submitting {
            return;
        }
        let Some(request) = self.state.blog_form.to_request() else {
            self.notify(Notification::error(
                "Missing Fields",
                "Please fill in all required fields.",
            ));
            return;
        };

        self.state.is_submitting = true;
        let result = self.webhook.submit_blog_content(request).await;
        self.state.is_submitting = false;

        match result {
            Ok(()) => {
                self.state.blog_form.reset();
                self.notify(Notification::success(
                    "Success!",
                    "Your blog content request has been submitted successfully.",
                ));
            }
            Err(err) => {
                tracing::error!("blog content submission failed: {err}");
                self.notify(Notification::error(
                    "Submission Failed",
                    "There was an error submitting your request. Please try again.",
                ));
            }
        }
    }

    /// Submit the voice configuration form: validate presence, dispatch, notify
    async fn submit_voice_config(&mut self) {
        if self.state.is_submitting {
            return;
        }
        let Some(request) = self.state.voice_form.to_request() else {
            self.notify(Notification::error(
                "Missing Information",
                "Please select an option for all three forms.",
            ));
            return;
        };

        self.state.is_submitting = true;
        let result = self.webhook.submit_voice_config(request).await;
        self.state.is_submitting = false;

        match result {
            Ok(()) => {
                self.state.voice_form.reset();
                self.notify(Notification::success("Success", "Submitted successfully!"));
            }
            Err(err) => {
                tracing::error!("voice configuration submission failed: {err}");
                self.notify(Notification::error(
                    "Error",
                    "Failed to submit. Please try again.",
                ));
            }
        }
    }
}
