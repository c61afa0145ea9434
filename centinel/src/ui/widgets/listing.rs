//! Numbered directory/bookmark listing widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use centinel_core::ListingRow;

use crate::ui::theme::Theme;

/// Renders a numbered artifact listing. Locked directories show as
/// `[LOCKED]`, unlocked ones with a trailing `/`.
pub struct ListingWidget<'a> {
    rows: &'a [ListingRow],
    theme: &'a Theme,
}

impl<'a> ListingWidget<'a> {
    pub fn new(rows: &'a [ListingRow], theme: &'a Theme) -> Self {
        Self { rows, theme }
    }
}

impl Widget for ListingWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::with_capacity(self.rows.len().max(1));
        if self.rows.is_empty() {
            lines.push(Line::from(Span::styled("(empty)", self.theme.hint_style())));
        }
        for (i, row) in self.rows.iter().enumerate() {
            let index = Span::styled(format!("{}. ", i + 1), self.theme.hint_style());
            let label = if row.locked {
                Span::styled("[LOCKED]", self.theme.locked_style())
            } else if row.is_directory {
                Span::styled(format!("{}/", row.name), self.theme.directory_style())
            } else {
                Span::styled(row.name.clone(), self.theme.file_style())
            };
            lines.push(Line::from(vec![index, label]));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
