use std::path::PathBuf;

use crate::model::{
    Checklist, ChecklistItem, DeleteProjectResponse, EvidenceRecord, ItemPatch, PackCatalogEntry,
    PackDetail, PackVersionKey, ProjectDoc, ProjectPatch,
};

/// Work the view asks for. Executed against a `ConsoleApi` by a driver.
#[derive(Clone, Debug, PartialEq)]
pub enum Request {
    /// Fetch project and checklist together.
    Refresh {
        ticket: u64,
        settle: Option<Settle>,
    },
    LoadCatalog,
    FetchPackDetails {
        pass: EnrichPass,
        keys: Vec<PackVersionKey>,
    },
    PatchProject(ProjectPatch),
    DeleteProject,
    PatchItem {
        item_id: String,
        patch: ItemPatch,
    },
    UploadEvidence {
        item_id: String,
        path: PathBuf,
    },
}

/// In-flight flag released once the refresh that follows a mutation lands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Settle {
    Saving,
    Item(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnrichPass {
    /// Latest version of every catalog pack.
    Catalog,
    /// Whatever is currently selected.
    Selected,
}

/// Outcome of one `Request`. Errors carry the banner text.
#[derive(Clone, Debug)]
pub enum Response {
    Refreshed {
        ticket: u64,
        settle: Option<Settle>,
        result: Result<(ProjectDoc, Checklist), String>,
    },
    CatalogLoaded(Result<Vec<PackCatalogEntry>, String>),
    PackDetails {
        pass: EnrichPass,
        keys: Vec<PackVersionKey>,
        result: Result<Vec<PackDetail>, String>,
    },
    ProjectPatched(Result<ProjectDoc, String>),
    ProjectDeleted(Result<DeleteProjectResponse, String>),
    ItemPatched {
        item_id: String,
        result: Result<ChecklistItem, String>,
    },
    EvidenceUploaded {
        item_id: String,
        result: Result<EvidenceRecord, String>,
    },
}

impl Request {
    pub fn label(&self) -> &'static str {
        match self {
            Request::Refresh { .. } => "refresh",
            Request::LoadCatalog => "load catalog",
            Request::FetchPackDetails { .. } => "fetch pack details",
            Request::PatchProject(_) => "patch project",
            Request::DeleteProject => "delete project",
            Request::PatchItem { .. } => "patch checklist item",
            Request::UploadEvidence { .. } => "upload evidence",
        }
    }
}
