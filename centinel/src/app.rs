//! Application state for the CENTINEL TUI.

use centinel_core::{Command, NavigationEngine, Outcome, View};

use crate::ui::theme::Theme;

/// Input routing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Single-key navigation (digits, q, +, p).
    #[default]
    Browse,
    /// Collecting a password, terminated by Enter.
    Password,
}

/// Main application state: the engine plus thin presentation state.
pub struct App {
    pub engine: NavigationEngine,
    pub input_mode: InputMode,
    pub theme: Theme,
    password_buffer: String,
    text_scroll: u16,
    status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(engine: NavigationEngine) -> Self {
        App {
            engine,
            input_mode: InputMode::default(),
            theme: Theme::default(),
            password_buffer: String::new(),
            text_scroll: 0,
            status_message: None,
            should_quit: false,
        }
    }

    /// Feed one command to the engine and fold the outcome into UI state.
    ///
    /// Invalid input is absorbed without an error dialog; the unchanged
    /// state simply re-renders.
    pub fn dispatch(&mut self, command: Command) {
        match self.engine.apply(command) {
            Outcome::Entered | Outcome::BackedUp | Outcome::BookmarksOpened => {
                self.text_scroll = 0;
                self.status_message = None;
            }
            Outcome::AtRoot => {
                // Backing out of the root ends the session.
                self.should_quit = true;
            }
            Outcome::PasswordRequired => {
                self.input_mode = InputMode::Password;
                self.password_buffer.clear();
                self.set_status("File locked. Enter password to authorize entry.");
            }
            Outcome::Unlocked => {
                self.input_mode = InputMode::Browse;
                self.text_scroll = 0;
                self.set_status("Access granted.");
            }
            Outcome::PasswordRejected => {
                self.input_mode = InputMode::Browse;
                self.set_status("Access denied.");
            }
            Outcome::NoFurtherLevels => {
                self.input_mode = InputMode::Browse;
                self.set_status("No further clearance levels exist.");
            }
            Outcome::Bookmarked => {
                self.set_status("Bookmarked.");
            }
            Outcome::InvalidSelection | Outcome::Unchanged => {}
        }
    }

    /// Abandon password entry and return to the prior view.
    pub fn cancel_password(&mut self) {
        self.input_mode = InputMode::Browse;
        self.password_buffer.clear();
        self.dispatch(Command::Back);
    }

    /// Submit the collected password.
    pub fn submit_password(&mut self) {
        let candidate = std::mem::take(&mut self.password_buffer);
        self.dispatch(Command::SubmitPassword(candidate));
    }

    pub fn push_password_char(&mut self, c: char) {
        self.password_buffer.push(c);
    }

    pub fn password_backspace(&mut self) {
        self.password_buffer.pop();
    }

    pub fn password_buffer(&self) -> &str {
        &self.password_buffer
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn text_scroll(&self) -> u16 {
        self.text_scroll
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.text_scroll = self.text_scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        let max = self.text_line_count().saturating_sub(1).min(u16::MAX as usize) as u16;
        self.text_scroll = self.text_scroll.saturating_add(lines).min(max);
    }

    fn text_line_count(&self) -> usize {
        match self.engine.current_view() {
            View::Text { contents, .. } => contents.lines().count(),
            _ => 0,
        }
    }
}
