use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::*;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_str(modal: &mut Modal, s: &str) {
    for c in s.chars() {
        assert!(matches!(
            map_modal_key(modal, key(KeyCode::Char(c))),
            ModalAction::None
        ));
    }
}

#[test]
fn required_value_keeps_modal_open() {
    let mut modal = Modal::text_input("Rename", Vec::new(), "name: ", "", TextInputAction::ProjectName);
    assert!(matches!(map_modal_key(&mut modal, key(KeyCode::Enter)), ModalAction::None));
    assert_eq!(modal.lines, vec!["error: value required".to_string()]);

    type_str(&mut modal, " Claims ");
    match map_modal_key(&mut modal, key(KeyCode::Enter)) {
        ModalAction::SubmitTextInput { action, value } => {
            assert_eq!(action, TextInputAction::ProjectName);
            assert_eq!(value, "Claims");
        }
        _ => panic!("expected submit"),
    }
}

#[test]
fn optional_fields_submit_empty() {
    let mut modal = Modal::text_input(
        "Owner",
        Vec::new(),
        "owner: ",
        "alice",
        TextInputAction::ItemOwner("sec-1".to_string()),
    );
    let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
    map_modal_key(&mut modal, ctrl_u);
    assert!(matches!(
        map_modal_key(&mut modal, key(KeyCode::Enter)),
        ModalAction::SubmitTextInput { value, .. } if value.is_empty()
    ));
}

#[test]
fn evidence_path_must_exist() {
    let mut modal = Modal::text_input(
        "Upload",
        Vec::new(),
        "file: ",
        "/definitely/not/here.pdf",
        TextInputAction::EvidencePath("sec-1".to_string()),
    );
    assert!(matches!(map_modal_key(&mut modal, key(KeyCode::Enter)), ModalAction::None));
    assert!(modal.lines[0].starts_with("error: not a file"));

    let file = tempfile::NamedTempFile::new().unwrap();
    modal.input.set(file.path().display().to_string());
    assert!(matches!(
        map_modal_key(&mut modal, key(KeyCode::Enter)),
        ModalAction::SubmitTextInput { .. }
    ));
    assert_eq!(modal.lines.len(), 1);
}

#[test]
fn confirm_accepts_enter_or_y() {
    let mut modal = Modal::confirm("Delete", Vec::new(), PendingAction::DeleteProject);
    assert!(matches!(
        map_modal_key(&mut modal, key(KeyCode::Char('y'))),
        ModalAction::Confirm(PendingAction::DeleteProject)
    ));
    assert!(matches!(map_modal_key(&mut modal, key(KeyCode::Esc)), ModalAction::Close));
    assert!(matches!(
        map_modal_key(&mut modal, key(KeyCode::Enter)),
        ModalAction::Confirm(_)
    ));
}

#[test]
fn viewer_scroll_is_clamped() {
    let mut modal = Modal::viewer("Report", vec!["a".to_string(), "b".to_string()]);
    map_modal_key(&mut modal, key(KeyCode::Down));
    map_modal_key(&mut modal, key(KeyCode::Down));
    assert_eq!(modal.scroll, 1);
    map_modal_key(&mut modal, key(KeyCode::PageUp));
    assert_eq!(modal.scroll, 0);
}
