use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::model::{
    Checklist, DeleteProjectResponse, ItemPatch, ItemStatus, PackCatalogEntry, PackKey,
    ProjectDoc, ProjectPatch, SelectedPack,
};

use super::derived::{self, Progress};
use super::detail_cache::PackDetailCache;
use super::learning::{LearningGroup, learning_center};
use super::refresh::RefreshSequencer;
use super::request::{EnrichPass, Request, Response, Settle};
use super::selection::{PackSelection, Toggle};

/// Client-side state of one project screen.
///
/// Intents return the requests to run; `apply` folds a response back in and may
/// return follow-up requests. The view itself never performs I/O.
#[derive(Debug)]
pub struct ProjectView {
    project_id: String,

    project: Option<ProjectDoc>,
    checklist: Option<Checklist>,
    catalog: Vec<PackCatalogEntry>,
    details: PackDetailCache,

    // Pending edits; overwritten whenever a project snapshot is applied.
    selection: PackSelection,
    edit_name: String,
    edit_description: String,

    saving: bool,
    deleting: bool,
    busy_items: BTreeSet<String>,
    error: Option<String>,
    deleted: Option<DeleteProjectResponse>,

    refresh: RefreshSequencer,
}

impl ProjectView {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            project: None,
            checklist: None,
            catalog: Vec::new(),
            details: PackDetailCache::default(),
            selection: PackSelection::default(),
            edit_name: String::new(),
            edit_description: String::new(),
            saving: false,
            deleting: false,
            busy_items: BTreeSet::new(),
            error: None,
            deleted: None,
            refresh: RefreshSequencer::default(),
        }
    }

    // ---- reads ----

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn project(&self) -> Option<&ProjectDoc> {
        self.project.as_ref()
    }

    pub fn checklist(&self) -> Option<&Checklist> {
        self.checklist.as_ref()
    }

    pub fn catalog(&self) -> &[PackCatalogEntry] {
        &self.catalog
    }

    pub fn catalog_entry(&self, key: &PackKey) -> Option<&PackCatalogEntry> {
        self.catalog.iter().find(|p| p.key() == *key)
    }

    pub fn details(&self) -> &PackDetailCache {
        &self.details
    }

    pub fn selection(&self) -> &PackSelection {
        &self.selection
    }

    pub fn edit_name(&self) -> &str {
        &self.edit_name
    }

    pub fn edit_description(&self) -> &str {
        &self.edit_description
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Project-level controls are disabled while a save or delete is in flight.
    pub fn controls_locked(&self) -> bool {
        self.saving || self.deleting
    }

    pub fn is_item_busy(&self, item_id: &str) -> bool {
        self.busy_items.contains(item_id)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Set once the project has been deleted; the screen should be closed.
    pub fn deleted(&self) -> Option<&DeleteProjectResponse> {
        self.deleted.as_ref()
    }

    pub fn display_name(&self) -> &str {
        self.project
            .as_ref()
            .map(|p| p.project.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.project_id)
    }

    pub fn saved_selection(&self) -> &[SelectedPack] {
        self.project
            .as_ref()
            .map(ProjectDoc::selected_packs)
            .unwrap_or(&[])
    }

    pub fn progress(&self) -> Progress {
        self.checklist
            .as_ref()
            .map(derived::progress)
            .unwrap_or_default()
    }

    pub fn packs_changed(&self) -> bool {
        !derived::selections_equal(self.selection.as_slice(), self.saved_selection())
    }

    /// Save is offered only for a non-empty name and an actual difference from the snapshot.
    pub fn can_save(&self) -> bool {
        let Some(project) = &self.project else {
            return false;
        };
        let name = self.edit_name.trim();
        if name.is_empty() {
            return false;
        }
        name != project.project.name
            || self.edit_description.trim() != project.description()
            || self.packs_changed()
    }

    pub fn unavailable_packs(&self) -> Vec<SelectedPack> {
        derived::unavailable_selected(self.selection.as_slice(), &self.catalog)
    }

    pub fn learning_center(&self) -> Vec<LearningGroup> {
        learning_center(&self.catalog, &self.details)
    }

    pub fn delete_prompt(&self) -> String {
        format!(
            "Delete project \"{}\"? This action cannot be undone.",
            self.display_name()
        )
    }

    // ---- intents ----

    /// Initial load: project and checklist together, plus the pack catalog.
    pub fn mount(&mut self) -> Vec<Request> {
        let mut out = self.refresh();
        out.push(Request::LoadCatalog);
        out
    }

    pub fn refresh(&mut self) -> Vec<Request> {
        self.error = None;
        vec![self.issue_refresh(None)]
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        if self.controls_locked() {
            return false;
        }
        self.edit_name = name.into();
        true
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> bool {
        if self.controls_locked() {
            return false;
        }
        self.edit_description = description.into();
        true
    }

    /// Removes the pack if selected, otherwise selects its latest catalog version.
    /// Persists immediately.
    pub fn toggle_pack(&mut self, key: &PackKey) -> Vec<Request> {
        if self.controls_locked() {
            return Vec::new();
        }
        let versions = self
            .catalog_entry(key)
            .map(|p| p.versions.clone())
            .unwrap_or_default();
        match self.selection.toggle(key, &versions) {
            Toggle::Unchanged => Vec::new(),
            Toggle::Added(p) => {
                tracing::info!(project_id = %self.project_id, pack = %p, "add pack");
                self.persist_selection()
            }
            Toggle::Removed(p) => {
                tracing::info!(project_id = %self.project_id, pack = %p, "remove pack");
                self.persist_selection()
            }
        }
    }

    /// No-op unless the pack is currently selected.
    pub fn set_pack_version(&mut self, key: &PackKey, version: &str) -> Vec<Request> {
        if self.controls_locked() || !self.selection.set_version(key, version) {
            return Vec::new();
        }
        tracing::info!(project_id = %self.project_id, pack = %key, version, "set pack version");
        self.persist_selection()
    }

    /// Drops a selected pack that the registry no longer lists.
    pub fn remove_unavailable(&mut self, key: &PackKey) -> Vec<Request> {
        if self.controls_locked() || self.catalog_entry(key).is_some() {
            return Vec::new();
        }
        match self.selection.remove(key) {
            Some(p) => {
                tracing::info!(project_id = %self.project_id, pack = %p, "remove unavailable pack");
                self.persist_selection()
            }
            None => Vec::new(),
        }
    }

    pub fn save_project(&mut self) -> Vec<Request> {
        if self.controls_locked() || !self.can_save() {
            return Vec::new();
        }
        let description = self.edit_description.trim();
        let patch = ProjectPatch {
            name: Some(self.edit_name.trim().to_string()),
            description: Some((!description.is_empty()).then(|| description.to_string())),
            selected_packs: Some(self.selection.to_vec()),
        };
        self.error = None;
        self.saving = true;
        tracing::info!(project_id = %self.project_id, "save project");
        vec![Request::PatchProject(patch)]
    }

    /// Call only after the user confirmed `delete_prompt()`.
    pub fn delete_project(&mut self) -> Vec<Request> {
        if self.controls_locked() || self.deleted.is_some() {
            return Vec::new();
        }
        self.error = None;
        self.deleting = true;
        tracing::info!(project_id = %self.project_id, "delete project");
        vec![Request::DeleteProject]
    }

    pub fn update_item(&mut self, item_id: &str, patch: ItemPatch) -> Vec<Request> {
        if patch == ItemPatch::default() || !self.claim_item(item_id) {
            return Vec::new();
        }
        vec![Request::PatchItem {
            item_id: item_id.to_string(),
            patch,
        }]
    }

    pub fn set_item_status(&mut self, item_id: &str, status: ItemStatus) -> Vec<Request> {
        self.update_item(item_id, ItemPatch::status(status))
    }

    pub fn set_item_owner(&mut self, item_id: &str, owner: impl Into<String>) -> Vec<Request> {
        self.update_item(item_id, ItemPatch::owner(owner))
    }

    pub fn set_item_notes(&mut self, item_id: &str, notes: impl Into<String>) -> Vec<Request> {
        self.update_item(item_id, ItemPatch::notes(notes))
    }

    pub fn upload_evidence(&mut self, item_id: &str, path: impl Into<PathBuf>) -> Vec<Request> {
        if !self.claim_item(item_id) {
            return Vec::new();
        }
        vec![Request::UploadEvidence {
            item_id: item_id.to_string(),
            path: path.into(),
        }]
    }

    // ---- responses ----

    pub fn apply(&mut self, resp: Response) -> Vec<Request> {
        match resp {
            Response::Refreshed {
                ticket,
                settle,
                result,
            } => {
                let out = self.apply_refresh(ticket, result);
                self.settle(settle);
                out
            }
            Response::CatalogLoaded(Ok(packs)) => {
                self.catalog = packs;
                self.enrich(EnrichPass::Catalog)
            }
            Response::CatalogLoaded(Err(msg)) => {
                self.error = Some(msg);
                Vec::new()
            }
            Response::PackDetails { pass, keys, result } => {
                self.details.release(&keys);
                match result {
                    Ok(details) => self.details.merge(details),
                    Err(msg) => {
                        tracing::debug!(?pass, keys = keys.len(), error = %msg, "pack detail enrichment failed")
                    }
                }
                Vec::new()
            }
            Response::ProjectPatched(result) => {
                // Refresh either way so the screen shows what the server actually holds.
                if let Err(msg) = result {
                    self.error = Some(msg);
                }
                vec![self.issue_refresh(Some(Settle::Saving))]
            }
            Response::ProjectDeleted(Ok(resp)) => {
                self.deleted = Some(resp);
                Vec::new()
            }
            Response::ProjectDeleted(Err(msg)) => {
                self.error = Some(msg);
                self.deleting = false;
                Vec::new()
            }
            Response::ItemPatched { item_id, result } => self.item_done(item_id, result.err()),
            Response::EvidenceUploaded { item_id, result } => {
                self.item_done(item_id, result.err())
            }
        }
    }

    // ---- internals ----

    fn issue_refresh(&mut self, settle: Option<Settle>) -> Request {
        Request::Refresh {
            ticket: self.refresh.issue(),
            settle,
        }
    }

    fn persist_selection(&mut self) -> Vec<Request> {
        self.error = None;
        self.saving = true;
        let mut out = vec![Request::PatchProject(ProjectPatch::selected_packs(
            self.selection.to_vec(),
        ))];
        out.extend(self.enrich(EnrichPass::Selected));
        out
    }

    fn claim_item(&mut self, item_id: &str) -> bool {
        if self.busy_items.contains(item_id) {
            return false;
        }
        if let Some(checklist) = &self.checklist {
            if checklist.item(item_id).is_none() {
                return false;
            }
        }
        self.busy_items.insert(item_id.to_string());
        true
    }

    fn item_done(&mut self, item_id: String, err: Option<String>) -> Vec<Request> {
        match err {
            None => vec![self.issue_refresh(Some(Settle::Item(item_id)))],
            Some(msg) => {
                self.error = Some(msg);
                self.busy_items.remove(&item_id);
                Vec::new()
            }
        }
    }

    fn apply_refresh(
        &mut self,
        ticket: u64,
        result: Result<(ProjectDoc, Checklist), String>,
    ) -> Vec<Request> {
        match result {
            Ok((project, checklist)) => {
                if !self.refresh.accept(ticket) {
                    tracing::debug!(ticket, latest = ?self.refresh.latest_applied(), "dropping stale refresh");
                    return Vec::new();
                }
                self.edit_name = project.project.name.clone();
                self.edit_description = project.description().to_string();
                self.selection = PackSelection::from_snapshot(project.selected_packs());
                self.project = Some(project);
                self.checklist = Some(checklist);
                self.enrich(EnrichPass::Selected)
            }
            Err(msg) => {
                if self.refresh.is_current(ticket) {
                    self.error = Some(msg);
                }
                Vec::new()
            }
        }
    }

    fn settle(&mut self, settle: Option<Settle>) {
        match settle {
            Some(Settle::Saving) => self.saving = false,
            Some(Settle::Item(id)) => {
                self.busy_items.remove(&id);
            }
            None => {}
        }
    }

    fn enrich(&mut self, pass: EnrichPass) -> Vec<Request> {
        let targets = match pass {
            EnrichPass::Catalog => derived::latest_targets(&self.catalog),
            EnrichPass::Selected => self.selection.to_vec(),
        };
        let keys = self.details.claim_missing(&targets);
        if keys.is_empty() {
            return Vec::new();
        }
        vec![Request::FetchPackDetails { pass, keys }]
    }
}

#[cfg(test)]
#[path = "../tests/console/view_tests.rs"]
mod tests;
