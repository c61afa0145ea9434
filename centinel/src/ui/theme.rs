//! Color theme and styling for the CENTINEL TUI.

use ratatui::style::{Color, Modifier, Style};

/// UI color theme.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct Theme {
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    pub header: Color,
    pub directory: Color,
    pub file: Color,
    pub locked: Color,
    pub hint: Color,
    pub status: Color,
    pub prompt: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Cyan,

            header: Color::Cyan,
            directory: Color::LightBlue,
            file: Color::White,
            locked: Color::Red,
            hint: Color::DarkGray,
            status: Color::Yellow,
            prompt: Color::LightYellow,
        }
    }
}

impl Theme {
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header)
            .add_modifier(Modifier::BOLD)
    }

    pub fn directory_style(&self) -> Style {
        Style::default().fg(self.directory)
    }

    pub fn file_style(&self) -> Style {
        Style::default().fg(self.file)
    }

    pub fn locked_style(&self) -> Style {
        Style::default().fg(self.locked).add_modifier(Modifier::BOLD)
    }

    pub fn hint_style(&self) -> Style {
        Style::default().fg(self.hint).add_modifier(Modifier::DIM)
    }

    pub fn status_style(&self) -> Style {
        Style::default().fg(self.status)
    }

    pub fn prompt_style(&self) -> Style {
        Style::default()
            .fg(self.prompt)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }
}
