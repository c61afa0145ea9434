//! Screen layout helpers.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Standard three-band layout: header line, body, hint/status line.
pub struct AppLayout {
    pub header_area: Rect,
    pub body_area: Rect,
    pub hint_area: Rect,
}

impl AppLayout {
    pub fn calculate(area: Rect) -> Self {
        let bands = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(area);

        AppLayout {
            header_area: bands[0],
            body_area: bands[1],
            hint_area: bands[2],
        }
    }
}

/// A fixed-size rect centered in `area`, clamped to fit.
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
