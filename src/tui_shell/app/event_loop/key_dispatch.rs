use super::*;

pub(in crate::tui_shell) fn handle_key(app: &mut App, key: KeyEvent) {
    if app.modal.is_some() {
        modal::handle_modal_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit = true,
        KeyCode::Esc => {
            app.view.dismiss_error();
            app.last_result = None;
        }

        KeyCode::Tab => app.focus = app.focus.next(),
        KeyCode::BackTab => app.focus = app.focus.prev(),
        KeyCode::Up => app.move_up(),
        KeyCode::Down => app.move_down(),

        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('s') => app.save(),
        KeyCode::Char('D') => app.confirm_delete(),
        KeyCode::Char('e') => app.edit_form_field(),
        KeyCode::Char('h') => app.show_report_link(ReportFormat::Html),
        KeyCode::Char('c') => app.show_report_link(ReportFormat::Csv),
        KeyCode::Char('p') => app.show_report_link(ReportFormat::Pdf),

        KeyCode::Enter | KeyCode::Char(' ') => match app.focus {
            Focus::Form => app.edit_form_field(),
            Focus::Packs => app.toggle_selected_pack(),
            Focus::Checklist if key.code == KeyCode::Enter => app.show_item_detail(),
            _ => {}
        },
        KeyCode::Char('v') if app.focus == Focus::Packs => app.cycle_selected_version(),
        KeyCode::Char('x') if app.focus == Focus::Packs => app.remove_selected_unavailable(),

        KeyCode::Char('S') if app.focus == Focus::Checklist => app.cycle_item_status(),
        KeyCode::Char('o') if app.focus == Focus::Checklist => app.edit_item_owner(),
        KeyCode::Char('n') if app.focus == Focus::Checklist => app.edit_item_notes(),
        KeyCode::Char('u') if app.focus == Focus::Checklist => app.upload_item_evidence(),

        _ => {}
    }
}

#[cfg(test)]
#[path = "../../../tests/tui_shell/app/event_loop/key_dispatch_tests.rs"]
mod tests;
