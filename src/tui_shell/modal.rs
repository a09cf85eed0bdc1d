use crossterm::event::KeyEvent;

use super::app::App;
use super::input::Input;

use self::keymap::{ModalAction, map_modal_key};

mod draw;
mod keymap;
mod validate;

pub(super) use self::draw::draw_modal;

pub(super) struct Modal {
    pub(super) title: String,
    pub(super) lines: Vec<String>,
    pub(super) scroll: usize,
    pub(super) kind: ModalKind,
    pub(super) input: Input,
}

pub(super) enum ModalKind {
    Viewer,
    ConfirmAction { action: PendingAction },
    TextInput { action: TextInputAction, prompt: String },
}

/// Actions that run only after an explicit confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum PendingAction {
    DeleteProject,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum TextInputAction {
    ProjectName,
    ProjectDescription,
    ItemOwner(String),
    ItemNotes(String),
    EvidencePath(String),
}

impl Modal {
    pub(super) fn viewer(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.into(),
            lines,
            scroll: 0,
            kind: ModalKind::Viewer,
            input: Input::default(),
        }
    }

    pub(super) fn confirm(title: impl Into<String>, lines: Vec<String>, action: PendingAction) -> Self {
        Self {
            title: title.into(),
            lines,
            scroll: 0,
            kind: ModalKind::ConfirmAction { action },
            input: Input::default(),
        }
    }

    pub(super) fn text_input(
        title: impl Into<String>,
        lines: Vec<String>,
        prompt: impl Into<String>,
        initial: &str,
        action: TextInputAction,
    ) -> Self {
        Self {
            title: title.into(),
            lines,
            scroll: 0,
            kind: ModalKind::TextInput {
                action,
                prompt: prompt.into(),
            },
            input: Input::with_value(initial),
        }
    }
}

pub(super) fn handle_modal_key(app: &mut App, key: KeyEvent) {
    let action = {
        let Some(m) = app.modal.as_mut() else {
            return;
        };
        map_modal_key(m, key)
    };

    match action {
        ModalAction::None => {}
        ModalAction::Close => app.close_modal(),
        ModalAction::Confirm(action) => {
            app.close_modal();
            app.execute_confirmed(action);
        }
        ModalAction::SubmitTextInput { action, value } => {
            app.close_modal();
            app.submit_text_input(action, value);
        }
    }
}
