use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::model::{
    Checklist, ChecklistItem, ConsoleConfig, CreateProjectRequest, CreateProjectResponse,
    DeleteProjectResponse, EvidenceRecord, ItemPatch, PackCatalog, PackCatalogEntry, PackDetail,
    ProjectDoc, ProjectList, ProjectPatch,
};

mod api;
pub use self::api::ConsoleApi;

mod error;
pub use self::error::{ApiError, ApiResult};

mod http_client;

mod checklist;
pub use self::checklist::sha256_hex;
mod packs;
mod projects;
mod reports;
pub use self::reports::{ReportFormat, report_url};

/// Blocking client for the compliance API. Cheap to clone; clones share a connection pool.
#[derive(Clone)]
pub struct ApiClient {
    config: ConsoleConfig,
    client: reqwest::blocking::Client,
}

impl ApiClient {
    pub fn new(config: ConsoleConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("truststack-console/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .context("build reqwest client")?;
        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn api_base(&self) -> &str {
        &self.config.api_base
    }
}

impl ConsoleApi for ApiClient {
    fn fetch_project(&self, project_id: &str) -> ApiResult<ProjectDoc> {
        ApiClient::fetch_project(self, project_id)
    }

    fn fetch_checklist(&self, project_id: &str) -> ApiResult<Checklist> {
        ApiClient::fetch_checklist(self, project_id)
    }

    fn fetch_packs(&self) -> ApiResult<Vec<PackCatalogEntry>> {
        ApiClient::fetch_packs(self)
    }

    fn fetch_pack(&self, domain: &str, pack_id: &str, version: &str) -> ApiResult<PackDetail> {
        ApiClient::fetch_pack(self, domain, pack_id, version)
    }

    fn patch_project(&self, project_id: &str, patch: &ProjectPatch) -> ApiResult<ProjectDoc> {
        ApiClient::patch_project(self, project_id, patch)
    }

    fn delete_project(&self, project_id: &str) -> ApiResult<DeleteProjectResponse> {
        ApiClient::delete_project(self, project_id)
    }

    fn patch_checklist_item(
        &self,
        project_id: &str,
        item_id: &str,
        patch: &ItemPatch,
    ) -> ApiResult<ChecklistItem> {
        ApiClient::patch_checklist_item(self, project_id, item_id, patch)
    }

    fn upload_evidence(
        &self,
        project_id: &str,
        item_id: &str,
        path: &Path,
    ) -> ApiResult<EvidenceRecord> {
        ApiClient::upload_evidence(self, project_id, item_id, path)
    }
}
