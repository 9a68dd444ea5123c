// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages sent to the app
// orchestrator, or into local ViewState mutations (typing, scrolling,
// dismissing an alert).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::ViewState;
use crate::protocol::UserCommand;

/// Lines moved by PageUp/PageDown.
const PAGE_SIZE: usize = 20;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to the
/// app orchestrator. Returns `None` when it was handled locally.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Only process key press events; Windows also reports releases.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    // Ctrl+C / Ctrl+Q always quit, even with an alert open.
    if ctrl && matches!(key_event.code, KeyCode::Char('c') | KeyCode::Char('q')) {
        return Some(UserCommand::Quit);
    }

    // An open alert blocks everything else; any key dismisses it.
    if view_state.alert.is_some() {
        view_state.alert = None;
        return None;
    }

    match key_event.code {
        KeyCode::Enter => {
            if view_state.submit_enabled {
                Some(UserCommand::Submit(view_state.query.clone()))
            } else {
                None
            }
        }
        KeyCode::Esc => Some(UserCommand::Clear),
        KeyCode::Char('l') if ctrl => Some(UserCommand::Clear),

        KeyCode::Backspace => {
            view_state.query.pop();
            None
        }

        KeyCode::Up => {
            scroll_up(view_state, 1);
            None
        }
        KeyCode::Down => {
            scroll_down(view_state, 1);
            None
        }
        KeyCode::PageUp => {
            scroll_up(view_state, PAGE_SIZE);
            None
        }
        KeyCode::PageDown => {
            scroll_down(view_state, PAGE_SIZE);
            None
        }

        KeyCode::Char(c) if !ctrl && !key_event.modifiers.contains(KeyModifiers::ALT) => {
            view_state.query.push(c);
            None
        }

        _ => None,
    }
}

fn scroll_up(view_state: &mut ViewState, lines: usize) {
    view_state.result_scroll = view_state.result_scroll.saturating_sub(lines);
}

fn scroll_down(view_state: &mut ViewState, lines: usize) {
    let max = view_state.result_text.lines().count().saturating_sub(1);
    view_state.result_scroll = view_state.result_scroll.saturating_add(lines).min(max);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
