//! Scrollable text artifact viewer.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::ui::theme::Theme;

/// Renders a text artifact in a bordered, wrapped, scrollable pane.
pub struct TextViewWidget<'a> {
    name: &'a str,
    contents: &'a str,
    scroll: u16,
    theme: &'a Theme,
}

impl<'a> TextViewWidget<'a> {
    pub fn new(name: &'a str, contents: &'a str, theme: &'a Theme) -> Self {
        Self {
            name,
            contents,
            scroll: 0,
            theme,
        }
    }

    pub fn scroll(mut self, scroll: u16) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for TextViewWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.name))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));

        Paragraph::new(self.contents)
            .style(self.theme.file_style())
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .block(block)
            .render(area, buf);
    }
}
