//! Password prompt overlay.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::Theme;

/// Centered prompt for a locked directory. Typed characters echo in the
/// clear.
pub struct PasswordPromptWidget<'a> {
    target: &'a str,
    level: u8,
    input: &'a str,
    theme: &'a Theme,
}

impl<'a> PasswordPromptWidget<'a> {
    pub fn new(target: &'a str, level: u8, input: &'a str, theme: &'a Theme) -> Self {
        Self {
            target,
            level,
            input,
            theme,
        }
    }
}

impl Widget for PasswordPromptWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Restricted ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(Span::styled(
                format!("{}/ requires level {} clearance.", self.target, self.level),
                self.theme.prompt_style(),
            )),
            Line::from(""),
            Line::from("File locked. Enter password to authorize entry:"),
            Line::from(vec![
                Span::styled("> ", self.theme.prompt_style()),
                Span::raw(self.input.to_string()),
                Span::styled("_", self.theme.prompt_style()),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Enter to submit, Esc to go back",
                self.theme.hint_style(),
            )),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
