//! Image artifact information card.
//!
//! Pixel display is outside the terminal's reach here; the card shows what
//! is known about the decoded artifact instead.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::Theme;

pub struct ImageCardWidget<'a> {
    name: &'a str,
    width: usize,
    height: usize,
    byte_len: usize,
    theme: &'a Theme,
}

impl<'a> ImageCardWidget<'a> {
    pub fn new(
        name: &'a str,
        width: usize,
        height: usize,
        byte_len: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            name,
            width,
            height,
            byte_len,
            theme,
        }
    }
}

impl Widget for ImageCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.name))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(Span::styled("PNG image artifact", self.theme.header_style())),
            Line::from(""),
            Line::from(format!("Dimensions: {} x {}", self.width, self.height)),
            Line::from(format!("Size: {} bytes", self.byte_len)),
            Line::from(""),
            Line::from(Span::styled(
                "Press Q to go back",
                self.theme.hint_style(),
            )),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
