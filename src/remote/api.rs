//! The seam between the view controller and the network.

use super::*;

/// One method per remote operation the project screen performs.
///
/// Implementations must be shareable across threads: pack-detail enrichment and
/// refreshes issue several of these calls in parallel.
pub trait ConsoleApi: Sync {
    fn fetch_project(&self, project_id: &str) -> ApiResult<ProjectDoc>;

    fn fetch_checklist(&self, project_id: &str) -> ApiResult<Checklist>;

    fn fetch_packs(&self) -> ApiResult<Vec<PackCatalogEntry>>;

    fn fetch_pack(&self, domain: &str, pack_id: &str, version: &str) -> ApiResult<PackDetail>;

    fn patch_project(&self, project_id: &str, patch: &ProjectPatch) -> ApiResult<ProjectDoc>;

    fn delete_project(&self, project_id: &str) -> ApiResult<DeleteProjectResponse>;

    fn patch_checklist_item(
        &self,
        project_id: &str,
        item_id: &str,
        patch: &ItemPatch,
    ) -> ApiResult<ChecklistItem>;

    fn upload_evidence(
        &self,
        project_id: &str,
        item_id: &str,
        path: &Path,
    ) -> ApiResult<EvidenceRecord>;
}
