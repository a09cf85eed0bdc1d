use crossterm::event::KeyModifiers;

use super::*;
use crate::model::ConsoleConfig;

fn app() -> App {
    let client = ApiClient::new(ConsoleConfig::with_base("http://127.0.0.1:9")).unwrap();
    App::new(client, "p-1")
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn tab_cycles_panes_and_back_tab_reverses() {
    let mut app = app();
    assert_eq!(app.focus, Focus::Packs);

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Learning);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Checklist);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Form);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::Packs);

    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus, Focus::Form);
}

#[test]
fn q_quits_outside_a_modal() {
    let mut app = app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.quit);
}

#[test]
fn editing_the_name_goes_through_a_text_input_modal() {
    let mut app = app();
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.focus, Focus::Form);
    assert!(app.modal.is_some());

    // Keys go to the modal, so 'q' is typed rather than quitting.
    type_str(&mut app, "  Acme q ");
    assert!(!app.quit);
    press(&mut app, KeyCode::Enter);

    assert!(app.modal.is_none());
    assert_eq!(app.view.edit_name(), "Acme q");
}

#[test]
fn empty_name_keeps_the_modal_open() {
    let mut app = app();
    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::Enter);

    let modal = app.modal.as_ref().unwrap();
    assert!(modal.lines.iter().any(|l| l.contains("value required")));
}

#[test]
fn description_may_be_cleared() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.form_field, FormField::Description);

    press(&mut app, KeyCode::Enter);
    type_str(&mut app, "temp");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.view.edit_description(), "temp");

    press(&mut app, KeyCode::Enter);
    for _ in 0..4 {
        press(&mut app, KeyCode::Backspace);
    }
    press(&mut app, KeyCode::Enter);
    assert!(app.modal.is_none());
    assert_eq!(app.view.edit_description(), "");
}

#[test]
fn delete_needs_a_loaded_project() {
    let mut app = app();
    press(&mut app, KeyCode::Char('D'));
    assert!(app.modal.is_none());
}

#[test]
fn report_link_opens_a_viewer_that_esc_closes() {
    let mut app = app();
    press(&mut app, KeyCode::Char('c'));

    let modal = app.modal.as_ref().unwrap();
    assert_eq!(modal.title, "CSV report");
    assert_eq!(
        modal.lines[0],
        "http://127.0.0.1:9/api/reports/p-1?format=csv"
    );

    press(&mut app, KeyCode::Esc);
    assert!(app.modal.is_none());
    assert!(!app.quit);
}

#[test]
fn esc_clears_the_last_result() {
    let mut app = app();
    app.push_output("hello".to_string());
    press(&mut app, KeyCode::Esc);
    assert!(app.last_result.is_none());
}

#[test]
fn checklist_keys_do_nothing_without_items() {
    let mut app = app();
    app.focus = Focus::Checklist;
    for c in ['S', 'o', 'n', 'u'] {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);
    assert!(app.modal.is_none());
    assert_eq!(app.worker.pending(), 0);
}
