use reqwest::Method;
use reqwest::blocking::multipart::{Form, Part};
use sha2::{Digest, Sha256};

use super::*;

/// Lowercase hex sha256, the same fingerprint the server records for evidence.
pub fn sha256_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

impl ApiClient {
    pub fn fetch_checklist(&self, project_id: &str) -> ApiResult<Checklist> {
        self.get_json(
            "fetch checklist",
            &format!("/api/projects/{}/checklist", project_id),
        )
    }

    pub fn patch_checklist_item(
        &self,
        project_id: &str,
        item_id: &str,
        patch: &ItemPatch,
    ) -> ApiResult<ChecklistItem> {
        self.write_json(
            Method::PATCH,
            "patch checklist item",
            &format!("/api/projects/{}/checklist/{}", project_id, item_id),
            Some(patch),
        )
    }

    pub fn upload_evidence(
        &self,
        project_id: &str,
        item_id: &str,
        path: &Path,
    ) -> ApiResult<EvidenceRecord> {
        let endpoint = "upload evidence";
        let bytes = std::fs::read(path).map_err(|source| ApiError::Evidence {
            path: path.to_path_buf(),
            source,
        })?;
        let local_sha = sha256_hex(&bytes);
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.bin".to_string());

        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));
        let req = self
            .client
            .post(self.url(&format!(
                "/api/projects/{}/evidence/{}",
                project_id, item_id
            )))
            .multipart(form);
        let resp = self.send(req, endpoint)?;
        let record: EvidenceRecord = Self::decode(resp, endpoint)?;

        if !record.sha256.eq_ignore_ascii_case(&local_sha) {
            tracing::warn!(
                project_id,
                item_id,
                local = %local_sha,
                server = %record.sha256,
                "evidence hash mismatch"
            );
        }
        Ok(record)
    }
}

#[cfg(test)]
#[path = "../tests/remote/checklist_tests.rs"]
mod tests;
