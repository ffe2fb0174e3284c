//! Terminal-side state wrapped around the library [`App`].
//!
//! The library owns everything Chef Bot knows about; this struct holds what
//! only the terminal needs: the text being typed, which panel has focus, how
//! far the chat is scrolled, and a one-line status message.

use messbot::App;
use tracing::debug;

/// Panel receiving typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Chat,
    Feedback,
}

pub struct ChatScreen {
    pub app: App,
    pub focus: Focus,
    pub input: String,
    /// Messages scrolled up from the newest one.
    pub scroll: usize,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl ChatScreen {
    pub fn new(app: App) -> Self {
        Self {
            app,
            focus: Focus::Chat,
            input: String::new(),
            scroll: 0,
            status_message: None,
            should_quit: false,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Chat => Focus::Feedback,
            Focus::Feedback => Focus::Chat,
        };
    }

    /// Send the typed text to Chef Bot.
    ///
    /// Blank input is ignored, like a disabled send button.
    pub fn send_message(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.input);
        match self.app.submit_chat(&text) {
            Ok(id) => {
                debug!(id, "Message sent");
                self.scroll = 0;
            }
            Err(e) => {
                self.input = text;
                self.set_status_message(e.to_string());
            }
        }
    }

    pub fn submit_feedback(&mut self) {
        match self.app.submit_feedback() {
            Ok(_) => self.clear_status_message(),
            Err(e) => self.set_status_message(e.to_string()),
        }
    }

    pub fn nudge_rating(&mut self, up: bool) {
        if let Err(e) = self.app.nudge_rating(up) {
            self.set_status_message(e.to_string());
        }
    }

    /// Route a typed character to the focused panel.
    pub fn push_char(&mut self, c: char) {
        match self.focus {
            Focus::Chat => self.input.push(c),
            Focus::Feedback => {
                if let Err(e) = self.app.push_feedback_char(c) {
                    self.set_status_message(e.to_string());
                }
            }
        }
    }

    pub fn pop_char(&mut self) {
        match self.focus {
            Focus::Chat => {
                self.input.pop();
            }
            Focus::Feedback => {
                if let Err(e) = self.app.pop_feedback_char() {
                    self.set_status_message(e.to_string());
                }
            }
        }
    }

    pub fn scroll_up(&mut self) {
        let max = self.app.session().len().saturating_sub(1);
        self.scroll = (self.scroll + 1).min(max);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn set_status_message(&mut self, msg: String) {
        self.status_message = Some(msg);
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }
}
