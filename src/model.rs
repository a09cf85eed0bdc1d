mod checklist;
mod config;
mod pack;
mod project;

pub use self::checklist::{
    Checklist, ChecklistCounts, ChecklistItem, EvidenceRecord, EvidenceRequirement, ItemPatch,
    ItemStatus, Severity,
};
pub use self::config::{
    ConfigOverrides, ConsoleConfig, DEFAULT_API_BASE, DEFAULT_TIMEOUT_SECS, ENV_API_BASE,
    ENV_CONFIG, ENV_TIMEOUT_SECS, ENV_USER,
};
pub use self::pack::{
    PackCatalog, PackCatalogEntry, PackDetail, PackKey, PackMeta, PackSource, PackVersionKey,
    SelectedPack,
};
pub use self::project::{
    CreateProjectRequest, CreateProjectResponse, DeleteProjectResponse, ProjectDoc, ProjectInputs,
    ProjectList, ProjectPatch, ProjectRecord, ProjectSummary,
};
