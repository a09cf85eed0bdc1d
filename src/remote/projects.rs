use reqwest::Method;

use super::*;

impl ApiClient {
    pub fn list_projects(&self) -> ApiResult<ProjectList> {
        self.get_json("list projects", "/api/projects")
    }

    pub fn create_project(&self, req: &CreateProjectRequest) -> ApiResult<CreateProjectResponse> {
        self.write_json(Method::POST, "create project", "/api/projects", Some(req))
    }

    pub fn fetch_project(&self, project_id: &str) -> ApiResult<ProjectDoc> {
        self.get_json("fetch project", &format!("/api/projects/{}", project_id))
    }

    pub fn patch_project(&self, project_id: &str, patch: &ProjectPatch) -> ApiResult<ProjectDoc> {
        tracing::debug!(
            project_id,
            name = patch.name.is_some(),
            description = patch.description.is_some(),
            selected_packs = patch.selected_packs.as_ref().map(|p| p.len()),
            "patch project"
        );
        self.write_json(
            Method::PATCH,
            "patch project",
            &format!("/api/projects/{}", project_id),
            Some(patch),
        )
    }

    pub fn delete_project(&self, project_id: &str) -> ApiResult<DeleteProjectResponse> {
        self.write_json::<(), _>(
            Method::DELETE,
            "delete project",
            &format!("/api/projects/{}", project_id),
            None,
        )
    }
}
