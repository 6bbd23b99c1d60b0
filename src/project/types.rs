use serde::Deserialize;

use super::models::NewProject;

/// Request payload for creating a project. A client-supplied `id` is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCreateRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub github_url: Option<String>,
}

impl From<ProjectCreateRequest> for NewProject {
    fn from(request: ProjectCreateRequest) -> Self {
        Self {
            title: request.title,
            description: request.description,
            github_url: request.github_url,
        }
    }
}
