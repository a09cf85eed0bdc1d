use serde::{Deserialize, Serialize};

use super::pack::SelectedPack;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectInputs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment_id: Option<String>,
    #[serde(default)]
    pub use_case_id: String,
    #[serde(default)]
    pub selected_packs: Vec<SelectedPack>,
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub scope_answers: serde_json::Map<String, serde_json::Value>,
}

/// Server snapshot of one project. Read-only on the client; replaced after every write.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectDoc {
    pub project: ProjectRecord,
    #[serde(default)]
    pub inputs: ProjectInputs,
}

impl ProjectDoc {
    pub fn description(&self) -> &str {
        self.project.description.as_deref().unwrap_or("")
    }

    pub fn selected_packs(&self) -> &[SelectedPack] {
        &self.inputs.selected_packs
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProjectList {
    #[serde(default)]
    pub projects: Vec<serde_json::Value>,
}

/// Compact listing view; the server's list payload is free-form, so fields are best-effort.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectSummary {
    pub id: String,
    pub name: String,
    pub updated_at: Option<String>,
}

impl ProjectSummary {
    pub fn from_value(v: &serde_json::Value) -> Option<Self> {
        let inner = v.get("project").unwrap_or(v);
        let id = inner
            .get("id")
            .or_else(|| v.get("project_id"))
            .and_then(|x| x.as_str())?;
        let name = inner.get("name").and_then(|x| x.as_str()).unwrap_or(id);
        let updated_at = inner
            .get("updated_at")
            .and_then(|x| x.as_str())
            .map(str::to_string);
        Some(Self {
            id: id.to_string(),
            name: name.to_string(),
            updated_at,
        })
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub industry_id: String,
    pub segment_id: String,
    pub use_case_id: String,
    pub scope_answers: serde_json::Map<String, serde_json::Value>,
    pub selected_packs: Vec<SelectedPack>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateProjectResponse {
    pub project: ProjectRecord,
    pub project_id: String,
}

/// Partial update. Absent fields are left alone by the server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `Some(None)` is sent as an explicit `null` and clears the description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_packs: Option<Vec<SelectedPack>>,
}

impl ProjectPatch {
    pub fn selected_packs(packs: Vec<SelectedPack>) -> Self {
        Self {
            selected_packs: Some(packs),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteProjectResponse {
    pub project_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub deleted_by: Option<String>,
    #[serde(default)]
    pub deleted_at: Option<String>,
}
