//! Key-event handling: raw terminal keys to engine commands.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use centinel_core::Command;

use crate::app::{App, InputMode};

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    NeedsRedraw,
    Quit,
}

/// Handle a terminal event.
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key_event(app, key),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Ctrl+C always quits.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return EventResult::Quit;
    }

    match app.input_mode {
        InputMode::Browse => handle_browse_key(app, key),
        InputMode::Password => handle_password_key(app, key),
    }
}

/// Browse-mode keys: digits open, Q backs up (and quits from the root),
/// `+` bookmarks, P opens the bookmark list, arrows scroll text.
fn handle_browse_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char(c @ '1'..='9') => {
            app.dispatch(Command::Select((c as u8 - b'0') as usize));
            EventResult::NeedsRedraw
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.dispatch(Command::Back);
            if app.should_quit {
                EventResult::Quit
            } else {
                EventResult::NeedsRedraw
            }
        }
        KeyCode::Char('+') => {
            app.dispatch(Command::ToggleBookmark);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('p') | KeyCode::Char('P') => {
            app.dispatch(Command::ViewBookmarks);
            EventResult::NeedsRedraw
        }
        KeyCode::Up => {
            app.scroll_up(1);
            EventResult::NeedsRedraw
        }
        KeyCode::Down => {
            app.scroll_down(1);
            EventResult::NeedsRedraw
        }
        KeyCode::PageUp => {
            app.scroll_up(10);
            EventResult::NeedsRedraw
        }
        KeyCode::PageDown => {
            app.scroll_down(10);
            EventResult::NeedsRedraw
        }
        KeyCode::Esc => EventResult::Quit,
        _ => EventResult::Continue,
    }
}

/// Password-mode keys: characters accumulate, Enter submits, Esc cancels.
fn handle_password_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Enter => {
            app.submit_password();
            EventResult::NeedsRedraw
        }
        KeyCode::Esc => {
            app.cancel_password();
            EventResult::NeedsRedraw
        }
        KeyCode::Backspace => {
            app.password_backspace();
            EventResult::NeedsRedraw
        }
        KeyCode::Char(c) => {
            app.push_password_char(c);
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}
