//! Render orchestration for the CENTINEL TUI.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use centinel_core::View;

use crate::app::App;
use crate::ui::layout::{centered_rect_fixed, AppLayout};
use crate::ui::widgets::{
    ImageCardWidget, ListingWidget, PasswordPromptWidget, TextViewWidget,
};

const DIR_HINTS: &str = "Press number keys to open files · Q to go back · + bookmark · P bookmarks";
const FILE_HINTS: &str = "Press Q to go back · ↑/↓ scroll · + bookmark";

/// Main render function.
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::calculate(frame.area());

    match app.engine.current_view() {
        View::Listing { header, rows } => {
            render_header(frame, app, &header, layout.header_area);
            frame.render_widget(ListingWidget::new(&rows, &app.theme), layout.body_area);
            render_hints(frame, app, DIR_HINTS, layout.hint_area);
        }
        View::Text { name, contents } => {
            render_header(frame, app, &app.engine.path_string(), layout.header_area);
            let widget =
                TextViewWidget::new(name, contents, &app.theme).scroll(app.text_scroll());
            frame.render_widget(widget, layout.body_area);
            render_hints(frame, app, FILE_HINTS, layout.hint_area);
        }
        View::Image {
            name,
            width,
            height,
            bytes,
        } => {
            render_header(frame, app, &app.engine.path_string(), layout.header_area);
            let widget = ImageCardWidget::new(name, width, height, bytes.len(), &app.theme);
            frame.render_widget(widget, layout.body_area);
            render_hints(frame, app, FILE_HINTS, layout.hint_area);
        }
        View::PasswordPrompt { target, level } => {
            render_header(frame, app, &app.engine.path_string(), layout.header_area);
            render_password_overlay(frame, app, target, level, layout.body_area);
            render_hints(frame, app, "Enter password · Esc to go back", layout.hint_area);
        }
    }
}

/// Current-path header line.
fn render_header(frame: &mut Frame, app: &App, header: &str, area: Rect) {
    let line = Line::from(Span::styled(header.to_string(), app.theme.header_style()));
    frame.render_widget(Paragraph::new(line), area);
}

/// Hint bar, replaced by the status message when one is set.
fn render_hints(frame: &mut Frame, app: &App, hints: &str, area: Rect) {
    let line = match app.status_message() {
        Some(message) => Line::from(Span::styled(message.to_string(), app.theme.status_style())),
        None => Line::from(Span::styled(hints.to_string(), app.theme.hint_style())),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_password_overlay(frame: &mut Frame, app: &App, target: &str, level: u8, area: Rect) {
    let popup = centered_rect_fixed(56, 8, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        PasswordPromptWidget::new(target, level, app.password_buffer(), &app.theme),
        popup,
    );
}
