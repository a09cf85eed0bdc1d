use std::path::PathBuf;

use crate::console::{Request, item_detail_lines};

use super::*;

impl App {
    pub(in crate::tui_shell) fn dispatch(&mut self, reqs: Vec<Request>) {
        for req in reqs {
            self.worker.submit(req);
        }
    }

    /// Folds every finished response into the view and starts its follow-ups.
    pub(in crate::tui_shell) fn pump(&mut self) {
        let responses = self.worker.drain();
        if responses.is_empty() {
            return;
        }
        for resp in responses {
            let follow = self.view.apply(resp);
            self.dispatch(follow);
        }
        self.clamp_rows();
        self.notice_deletion();
    }

    /// Once the project is gone the only thing left is a notice; closing it quits.
    pub(in crate::tui_shell) fn notice_deletion(&mut self) {
        if self.closing {
            return;
        }
        let Some(d) = self.view.deleted() else {
            return;
        };
        let name = d.name.clone().unwrap_or_else(|| d.project_id.clone());
        let mut lines = vec![format!("Deleted project \"{}\" ({}).", name, d.project_id)];
        if let Some(by) = &d.deleted_by {
            lines.push(format!("Deleted by {}.", by));
        }
        lines.push(String::new());
        lines.push("Press Enter to close the console.".to_string());
        self.modal = Some(Modal::viewer("Project deleted", lines));
        self.closing = true;
    }

    fn run_intent(&mut self, reqs: Vec<Request>, busy: &str) -> bool {
        if reqs.is_empty() {
            if self.view.controls_locked() {
                self.push_output(busy.to_string());
            }
            return false;
        }
        self.dispatch(reqs);
        true
    }

    pub(in crate::tui_shell) fn close_modal(&mut self) {
        self.modal = None;
        if self.closing {
            self.quit = true;
        }
    }

    pub(in crate::tui_shell) fn push_output(&mut self, text: String) {
        self.last_result = Some(StatusEntry {
            ts: now_ts(),
            kind: EntryKind::Output,
            text,
        });
    }

    pub(in crate::tui_shell) fn push_error(&mut self, text: String) {
        self.last_result = Some(StatusEntry {
            ts: now_ts(),
            kind: EntryKind::Error,
            text,
        });
    }

    // ---- navigation ----

    pub(in crate::tui_shell) fn move_up(&mut self) {
        match self.focus {
            Focus::Form => self.form_field = FormField::Name,
            Focus::Packs => self.pack_row = self.pack_row.saturating_sub(1),
            Focus::Learning => self.learn_scroll = self.learn_scroll.saturating_sub(1),
            Focus::Checklist => self.item_row = self.item_row.saturating_sub(1),
        }
    }

    pub(in crate::tui_shell) fn move_down(&mut self) {
        match self.focus {
            Focus::Form => self.form_field = FormField::Description,
            Focus::Packs => {
                let n = self.pack_rows().len();
                self.pack_row = (self.pack_row + 1).min(n.saturating_sub(1));
            }
            Focus::Learning => self.learn_scroll += 1,
            Focus::Checklist => {
                let n = self.items().len();
                self.item_row = (self.item_row + 1).min(n.saturating_sub(1));
            }
        }
    }

    // ---- project ----

    pub(in crate::tui_shell) fn refresh(&mut self) {
        let reqs = self.view.refresh();
        self.dispatch(reqs);
        self.push_output("Refreshing".to_string());
    }

    pub(in crate::tui_shell) fn edit_form_field(&mut self) {
        if self.view.controls_locked() {
            self.push_output("Saving; edits are disabled".to_string());
            return;
        }
        self.focus = Focus::Form;
        self.modal = Some(match self.form_field {
            FormField::Name => Modal::text_input(
                "Project name",
                Vec::new(),
                "name: ",
                self.view.edit_name(),
                TextInputAction::ProjectName,
            ),
            FormField::Description => Modal::text_input(
                "Project description",
                vec!["An empty value clears the description.".to_string()],
                "description: ",
                self.view.edit_description(),
                TextInputAction::ProjectDescription,
            ),
        });
    }

    pub(in crate::tui_shell) fn save(&mut self) {
        let reqs = self.view.save_project();
        if reqs.is_empty() {
            if self.view.controls_locked() {
                self.push_output("Already saving".to_string());
            } else if self.view.edit_name().trim().is_empty() {
                self.push_error("Project name cannot be empty".to_string());
            } else {
                self.push_output("Nothing to save".to_string());
            }
            return;
        }
        self.dispatch(reqs);
        self.push_output("Saving project".to_string());
    }

    pub(in crate::tui_shell) fn confirm_delete(&mut self) {
        if self.view.controls_locked() || self.view.project().is_none() {
            return;
        }
        self.modal = Some(Modal::confirm(
            "Delete project",
            vec![self.view.delete_prompt()],
            PendingAction::DeleteProject,
        ));
    }

    pub(in crate::tui_shell) fn execute_confirmed(&mut self, action: PendingAction) {
        match action {
            PendingAction::DeleteProject => {
                let reqs = self.view.delete_project();
                if self.run_intent(reqs, "Busy; try again once the save finishes") {
                    self.push_output("Deleting project".to_string());
                }
            }
        }
    }

    pub(in crate::tui_shell) fn submit_text_input(&mut self, action: TextInputAction, value: String) {
        match action {
            TextInputAction::ProjectName => {
                if self.view.set_name(value) && self.view.can_save() {
                    self.push_output("Name changed; press s to save".to_string());
                }
            }
            TextInputAction::ProjectDescription => {
                if self.view.set_description(value) && self.view.can_save() {
                    self.push_output("Description changed; press s to save".to_string());
                }
            }
            TextInputAction::ItemOwner(item_id) => {
                let reqs = self.view.set_item_owner(&item_id, value);
                self.run_item_intent(&item_id, reqs);
            }
            TextInputAction::ItemNotes(item_id) => {
                let reqs = self.view.set_item_notes(&item_id, value);
                self.run_item_intent(&item_id, reqs);
            }
            TextInputAction::EvidencePath(item_id) => {
                let path = PathBuf::from(&value);
                let reqs = self.view.upload_evidence(&item_id, path);
                if self.run_item_intent(&item_id, reqs) {
                    self.push_output(format!("Uploading {} to {}", value, item_id));
                }
            }
        }
    }

    pub(in crate::tui_shell) fn show_report_link(&mut self, format: ReportFormat) {
        let url = self.client.report_url(self.view.project_id(), format);
        self.modal = Some(Modal::viewer(
            format!("{} report", format.as_str().to_uppercase()),
            vec![
                url,
                String::new(),
                "Open this link in a browser to download the report.".to_string(),
            ],
        ));
    }

    // ---- packs ----

    pub(in crate::tui_shell) fn toggle_selected_pack(&mut self) {
        match self.selected_pack_row() {
            Some(PackRow::Catalog(entry)) => {
                let reqs = self.view.toggle_pack(&entry.key());
                self.run_intent(reqs, "Saving packs; wait for it to finish");
            }
            Some(PackRow::Unavailable(p)) => {
                self.push_output(format!("{} is no longer in the registry; press x to remove it", p));
            }
            None => {}
        }
    }

    pub(in crate::tui_shell) fn cycle_selected_version(&mut self) {
        let Some(PackRow::Catalog(entry)) = self.selected_pack_row() else {
            return;
        };
        let key = entry.key();
        let Some(current) = self.view.selection().get(&key).map(|p| p.version.clone()) else {
            self.push_output(format!("Select {} first (Enter)", key));
            return;
        };
        let Some(next) = next_version(&entry.versions, &current) else {
            self.push_output(format!("{} has a single version", key));
            return;
        };
        let reqs = self.view.set_pack_version(&key, &next);
        self.run_intent(reqs, "Saving packs; wait for it to finish");
    }

    pub(in crate::tui_shell) fn remove_selected_unavailable(&mut self) {
        if let Some(PackRow::Unavailable(p)) = self.selected_pack_row() {
            let reqs = self.view.remove_unavailable(&p.key());
            if self.run_intent(reqs, "Saving packs; wait for it to finish") {
                self.push_output(format!("Removing {}", p));
            }
        }
    }

    // ---- checklist ----

    fn run_item_intent(&mut self, item_id: &str, reqs: Vec<Request>) -> bool {
        if reqs.is_empty() {
            if self.view.is_item_busy(item_id) {
                self.push_output(format!("{} is still updating", item_id));
            }
            return false;
        }
        self.dispatch(reqs);
        true
    }

    pub(in crate::tui_shell) fn cycle_item_status(&mut self) {
        let Some(item) = self.selected_item() else {
            return;
        };
        let (item_id, next) = (item.item_id.clone(), item.status.next());
        let reqs = self.view.set_item_status(&item_id, next);
        self.run_item_intent(&item_id, reqs);
    }

    pub(in crate::tui_shell) fn edit_item_owner(&mut self) {
        let Some(item) = self.selected_item() else {
            return;
        };
        let modal = Modal::text_input(
            format!("Owner of {}", item.item_id),
            vec![item.title.clone()],
            "owner: ",
            item.owner.as_deref().unwrap_or(""),
            TextInputAction::ItemOwner(item.item_id.clone()),
        );
        self.open_item_modal(modal);
    }

    pub(in crate::tui_shell) fn edit_item_notes(&mut self) {
        let Some(item) = self.selected_item() else {
            return;
        };
        let modal = Modal::text_input(
            format!("Notes for {}", item.item_id),
            vec![item.title.clone()],
            "notes: ",
            item.notes.as_deref().unwrap_or(""),
            TextInputAction::ItemNotes(item.item_id.clone()),
        );
        self.open_item_modal(modal);
    }

    pub(in crate::tui_shell) fn upload_item_evidence(&mut self) {
        let Some(item) = self.selected_item() else {
            return;
        };
        let modal = Modal::text_input(
            format!("Upload evidence for {}", item.item_id),
            vec![item.title.clone(), "Path to a local file.".to_string()],
            "file: ",
            "",
            TextInputAction::EvidencePath(item.item_id.clone()),
        );
        self.open_item_modal(modal);
    }

    fn open_item_modal(&mut self, modal: Modal) {
        let busy = self
            .selected_item()
            .map(|it| it.item_id.clone())
            .filter(|id| self.view.is_item_busy(id));
        match busy {
            Some(id) => self.push_output(format!("{} is still updating", id)),
            None => self.modal = Some(modal),
        }
    }

    pub(in crate::tui_shell) fn show_item_detail(&mut self) {
        if let Some(item) = self.selected_item() {
            let modal = Modal::viewer(item.item_id.clone(), item_detail_lines(item));
            self.modal = Some(modal);
        }
    }
}

/// The version after `current` in catalog order, wrapping around.
pub(in crate::tui_shell) fn next_version(versions: &[String], current: &str) -> Option<String> {
    if versions.len() < 2 {
        return None;
    }
    let next = match versions.iter().position(|v| v == current) {
        Some(i) => &versions[(i + 1) % versions.len()],
        None => &versions[0],
    };
    Some(next.clone())
}

#[cfg(test)]
#[path = "../../tests/tui_shell/app/actions_tests.rs"]
mod tests;
