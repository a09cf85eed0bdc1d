use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::validate::{allow_empty_text_input, validate_text_input};
use super::{Modal, ModalKind, PendingAction, TextInputAction};

pub(super) enum ModalAction {
    None,
    Close,
    Confirm(PendingAction),
    SubmitTextInput {
        action: TextInputAction,
        value: String,
    },
}

pub(super) fn map_modal_key(modal: &mut Modal, key: KeyEvent) -> ModalAction {
    match &modal.kind {
        ModalKind::Viewer => handle_viewer_like_key(modal, key),

        ModalKind::TextInput { action, .. } => match key.code {
            KeyCode::Esc => ModalAction::Close,
            KeyCode::Enter => {
                let action = action.clone();
                let raw = modal.input.buf.trim().to_string();
                if raw.is_empty() && !allow_empty_text_input(&action) {
                    append_modal_error(modal, "value required".to_string());
                    return ModalAction::None;
                }
                match validate_text_input(&action, &raw) {
                    Ok(()) => ModalAction::SubmitTextInput { action, value: raw },
                    Err(msg) => {
                        append_modal_error(modal, msg);
                        ModalAction::None
                    }
                }
            }
            _ => {
                apply_input_edit_key(modal, key);
                ModalAction::None
            }
        },

        ModalKind::ConfirmAction { action } => match key.code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => ModalAction::Close,
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                ModalAction::Confirm(action.clone())
            }
            _ => handle_viewer_like_key(modal, key),
        },
    }
}

const PAGE: isize = 10;

fn handle_viewer_like_key(modal: &mut Modal, key: KeyEvent) -> ModalAction {
    let delta = match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => return ModalAction::Close,
        KeyCode::Up | KeyCode::Char('k') => -1,
        KeyCode::Down | KeyCode::Char('j') => 1,
        KeyCode::PageUp => -PAGE,
        KeyCode::PageDown => PAGE,
        _ => return ModalAction::None,
    };
    let last = modal.lines.len().saturating_sub(1);
    modal.scroll = modal.scroll.saturating_add_signed(delta).min(last);
    ModalAction::None
}

fn apply_input_edit_key(modal: &mut Modal, key: KeyEvent) {
    let input = &mut modal.input;
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        // Ctrl-U clears the line; other chords are ignored.
        if key.code == KeyCode::Char('u') {
            input.clear();
        }
        return;
    }
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => input.insert_char(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        _ => {}
    }
}

fn append_modal_error(modal: &mut Modal, msg: String) {
    modal.lines.retain(|l| !l.starts_with("error:"));
    modal.lines.push(format!("error: {}", msg));
}

#[cfg(test)]
#[path = "../../tests/tui_shell/modal/keymap_tests.rs"]
mod tests;
