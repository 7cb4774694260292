// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages for the app
// orchestrator, or into local ViewState changes (typing, focus, selection).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{Focus, ViewState};
use crate::protocol::UserCommand;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to the
/// app orchestrator, `None` when it was handled locally.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // crossterm reports Release/Repeat on some platforms; act on Press only.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately regardless of mode
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    if view_state.confirm_quit {
        return handle_confirm_quit(key_event, view_state);
    }

    if matches!(key_event.code, KeyCode::Tab | KeyCode::BackTab) {
        toggle_focus(view_state);
        return None;
    }

    match view_state.focus {
        Focus::Entry => handle_entry(key_event, view_state),
        Focus::List => handle_list(key_event, view_state),
    }
}

/// Quit confirmation: `y`/`q` confirm, `n`/Esc cancel, everything else is
/// swallowed.
fn handle_confirm_quit(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(UserCommand::Quit)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            view_state.confirm_quit = false;
            None
        }
        _ => None,
    }
}

/// Entry field: printable characters edit the pending name, Enter submits it.
fn handle_entry(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Enter => {
            if !view_state.can_add() {
                return None;
            }
            let name = std::mem::take(&mut view_state.pending_name);
            Some(UserCommand::AddParticipant(name))
        }
        KeyCode::Esc => {
            view_state.pending_name.clear();
            None
        }
        KeyCode::Backspace => {
            view_state.pending_name.pop();
            None
        }
        KeyCode::Char(c)
            if !key_event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            view_state.pending_name.push(c);
            None
        }
        _ => None,
    }
}

/// Participant table: move the selection, remove, reshuffle, quit.
fn handle_list(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Up | KeyCode::Char('k') => {
            move_selection(view_state, -1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            move_selection(view_state, 1);
            None
        }
        KeyCode::Home | KeyCode::Char('g') => {
            if !view_state.participants.is_empty() {
                view_state.selected = Some(0);
            }
            None
        }
        KeyCode::End | KeyCode::Char('G') => {
            view_state.selected = view_state.participants.len().checked_sub(1);
            None
        }
        KeyCode::Delete | KeyCode::Char('d') => view_state
            .selected
            .filter(|&i| i < view_state.participants.len())
            .map(UserCommand::RemoveParticipant),
        KeyCode::Char('r') => Some(UserCommand::Reshuffle),
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Esc => {
            view_state.focus = Focus::Entry;
            None
        }
        KeyCode::Char('q') => {
            view_state.confirm_quit = true;
            None
        }
        _ => None,
    }
}

fn toggle_focus(view_state: &mut ViewState) {
    view_state.focus = match view_state.focus {
        Focus::Entry => {
            if view_state.selected.is_none() && !view_state.participants.is_empty() {
                view_state.selected = Some(0);
            }
            Focus::List
        }
        Focus::List => Focus::Entry,
    };
}

/// Move the selection by `delta` rows, clamped to the list.
fn move_selection(view_state: &mut ViewState, delta: isize) {
    let len = view_state.participants.len();
    if len == 0 {
        view_state.selected = None;
        return;
    }
    let current = view_state.selected.unwrap_or(0) as isize;
    let next = (current + delta).clamp(0, len as isize - 1);
    view_state.selected = Some(next as usize);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
